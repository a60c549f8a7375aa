//! Progress presentation layer
//!
//! All progress reporting goes through the [`ProgressReporter`] trait so the
//! assembler can run with a visual progress bar from the CLI and silently
//! from tests.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub mod display;

/// Progress reporter for the artifacts of one assembler run
pub trait ProgressReporter {
    /// Set the number of artifacts about to be processed
    fn start(&mut self, total_artifacts: u64);

    /// Show the artifact currently being processed
    fn update_artifact(&mut self, artifact: &str);

    /// Mark one artifact as done
    fn inc_artifact(&mut self);

    /// Finish successfully
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Progress bar on stderr, hidden automatically when stderr is not a terminal
pub struct InteractiveProgressReporter {
    artifact_pb: ProgressBar,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        let artifact_pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            artifact_pb.set_style(style.progress_chars("#>-"));
        }
        Self { artifact_pb }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, total_artifacts: u64) {
        self.artifact_pb.set_length(total_artifacts);
    }

    fn update_artifact(&mut self, artifact: &str) {
        // Truncate long paths for display
        let display = if artifact.len() > 50 {
            let tail = artifact
                .char_indices()
                .map(|(i, _)| i)
                .find(|&i| artifact.len() - i <= 47)
                .unwrap_or(0);
            format!("...{}", &artifact[tail..])
        } else {
            artifact.to_string()
        };
        self.artifact_pb.set_message(display);
    }

    fn inc_artifact(&mut self) {
        self.artifact_pb.inc(1);
    }

    fn finish(&mut self) {
        self.artifact_pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.artifact_pb.abandon();
    }
}

/// Progress bar when `interactive`, otherwise a reporter that prints nothing
pub fn progress_reporter(interactive: bool) -> Box<dyn ProgressReporter> {
    if interactive {
        Box::new(InteractiveProgressReporter::new())
    } else {
        Box::new(SilentProgressReporter)
    }
}

/// No-op reporter used by tests and non-terminal runs
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _total_artifacts: u64) {}

    fn update_artifact(&mut self, _artifact: &str) {}

    fn inc_artifact(&mut self) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}
