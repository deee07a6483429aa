//! # Integration tests for the command line of `cumulo-vet`.
//! The tests in this module exercise the built binary end to end against a
//! throwaway project tree. Every external tool the orchestrator delegates
//! to is replaced by a stub script on a private PATH, so the runs are
//! deterministic on any machine.
//!
//! ## Test Plan
//!
//! + [x] Test the usage gate and the help flag.
//! + [x] Test a full default run.
//! + [x] Test fail-fast behaviour and exit codes.
//! + [x] Test the advisory scoring pass.
//! + [x] Test CLI subtest selection.

mod suite;
mod usage;

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Output;

use tempdir::TempDir;
use vet_lib::constants::LICENCE_BANNER;

/// The testing environment passed to individual #[test](s)
#[allow(dead_code)]
struct TestEnv {
    vet_path: PathBuf,
    project: TempDir,
    stubs: PathBuf,
}

/// Run the built binary against the environment's project with a PATH
/// containing only the stubbed tools.
#[macro_export]
macro_rules! vet {
    ($env:expr) => {
        $crate::vet_command(&$env).output().unwrap()
    };
    ($env:expr; $($arg:expr),*) => {
        $crate::vet_command(&$env).args([$($arg),*]).output().unwrap()
    };
}

/// The base command every invocation starts from.
fn vet_command(env: &TestEnv) -> std::process::Command {
    let mut cmd = std::process::Command::new(&env.vet_path);
    cmd.env("CUMULO_DIR", env.project.path())
        .env("PATH", &env.stubs)
        .env_remove("RECREATE_KGO")
        .env_remove("CODACY_PROJECT_TOKEN")
        .env("RUST_BACKTRACE", "0")
        .current_dir(env.project.path());
    cmd
}

/// Write an executable stub that exits with the given status.
fn write_stub(dir: &Path, name: &str, code: i32) {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\nexit {code}\n")).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

/// Re-script one stub, for failure-path tests.
fn fail_stub(env: &TestEnv, name: &str) {
    write_stub(&env.stubs, name, 1);
}

/// Count occurrences of a marker in the captured stdout.
fn count_markers(output: &Output, marker: &str) -> usize {
    String::from_utf8_lossy(&output.stdout).matches(marker).count()
}

/// Build the environment: a project with one CLI test group, a licenced
/// source file, and passing stubs for every delegated tool.
fn init() -> TestEnv {
    let vet_path = PathBuf::from(env!("CARGO_BIN_EXE_cumulo-vet"));
    assert!(
        vet_path.exists(),
        "\nTest setup couldn't find the cumulo-vet executable.
    [Expected to find it at: {:?}]\n",
        vet_path
    );

    let project = TempDir::new_in(env!("CARGO_TARGET_TMPDIR"), "cumulo").unwrap();

    let tests = project.path().join("tests");
    fs::create_dir_all(tests.join("bin")).unwrap();
    fs::create_dir_all(tests.join("lib")).unwrap();

    let group = tests.join("cumulo-nbhood");
    fs::create_dir_all(&group).unwrap();
    fs::write(group.join("01-help.bats"), "#!/usr/bin/env bats\n").unwrap();

    fs::write(
        project.path().join("setup.py"),
        format!("{LICENCE_BANNER}\nimport cumulo\n"),
    )
    .unwrap();

    let stubs = project.path().join("tool-stubs");
    fs::create_dir_all(&stubs).unwrap();
    for tool in ["pycodestyle", "pylint", "sphinx-build", "python", "bats"] {
        write_stub(&stubs, tool, 0);
    }

    TestEnv {
        vet_path,
        project,
        stubs,
    }
}
