use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pyframeworks completions bash > ~/.bash_completion.d/pyframeworks\n\n\
                  Generate zsh completions:\n    pyframeworks completions zsh > ~/.zfunc/_pyframeworks")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
