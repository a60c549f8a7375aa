//! install-deps integration tests with a stand-in Python interpreter

#![cfg(unix)]

mod common;

use common::{TestWorkspace, dir_names, pyframeworks_cmd};
use predicates::prelude::*;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

/// Shell script answering `-m venv` and `-m pip` the way CPython lays
/// out a venv, recording the pip arguments it was given
const FAKE_PYTHON: &str = r#"#!/bin/sh
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
    mkdir -p "$3/bin" "$3/lib/python3.11/site-packages" "$3/include"
    echo "home = /usr/bin" > "$3/pyvenv.cfg"
    cp "$0" "$3/bin/python3.11"
    touch "$3/bin/activate" "$3/bin/Activate.ps1"
    exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
    shift 2
    pkgs="$PYTHONPATH/lib/python3.11/site-packages"
    echo "$*" > "$pkgs/pip_args.txt"
    prev=""
    for arg in "$@"; do
        if [ "$prev" = "-r" ]; then
            cat "$arg" > "$pkgs/requirements.txt"
        fi
        prev="$arg"
    done
    mkdir -p "$pkgs/six"
    touch "$PYTHONPATH/bin/six-tool"
    exit 0
fi
exit 2
"#;

fn fake_python(workspace: &TestWorkspace) -> PathBuf {
    let path = workspace.write_file("interp/python3.11", FAKE_PYTHON);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn test_install_deps_flattens_site() {
    let workspace = TestWorkspace::new();
    let python = fake_python(&workspace);
    let site = workspace.path.join("site");

    pyframeworks_cmd()
        .arg("install-deps")
        .arg(&site)
        .arg(&python)
        .args(["install", "--no-deps", "six"])
        .assert()
        .success();

    assert_eq!(
        dir_names(&site),
        vec!["bin", "pip_args.txt", "six"],
        "venv scaffolding should be gone"
    );
    assert_eq!(dir_names(&site.join("bin")), vec!["six-tool"]);
    assert_eq!(
        workspace.read_file("site/pip_args.txt").trim(),
        "install --no-deps six"
    );
}

#[test]
fn test_install_deps_rewrites_requires_txt() {
    let workspace = TestWorkspace::new();
    let python = fake_python(&workspace);
    let requires = workspace.write_file(
        "pkg.egg-info/requires.txt",
        "attrs>=21\npackaging\n[test]\npytest\n",
    );
    let site = workspace.path.join("site");

    pyframeworks_cmd()
        .arg("install-deps")
        .arg(&site)
        .arg(&python)
        .args(["install", "-r"])
        .arg(&requires)
        .assert()
        .success();

    assert_eq!(
        workspace.read_file("site/requirements.txt"),
        "attrs>=21\npackaging\n"
    );
    assert!(
        !workspace
            .read_file("site/pip_args.txt")
            .contains("requires.txt")
    );
}

#[test]
fn test_install_deps_without_pip_args_keeps_venv() {
    let workspace = TestWorkspace::new();
    let python = fake_python(&workspace);
    let site = workspace.path.join("site");

    pyframeworks_cmd()
        .arg("install-deps")
        .arg(&site)
        .arg(&python)
        .assert()
        .success();

    assert!(site.join("pyvenv.cfg").is_file());
    assert!(site.join("bin/python3.11").is_file());
}

#[test]
fn test_install_deps_failing_interpreter() {
    let workspace = TestWorkspace::new();

    pyframeworks_cmd()
        .arg("install-deps")
        .arg(workspace.path.join("site"))
        .arg("false")
        .args(["install", "six"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'false' exited with exit code 1"));
}
