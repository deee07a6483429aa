use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::Result;
use tempdir::TempDir;
use vet_lib::config::Config;
use vet_lib::config::Tools;
use vet_lib::shell::ShellCommander;

use crate::runner::Confirmer;
use crate::runner::RunContext;

/// Build a throwaway project tree with the given CLI test groups, each
/// holding one `.bats` file.
pub fn sample_project(groups: &[&str]) -> TempDir {
    let tmp = TempDir::new("cumulo").unwrap();
    let tests = tmp.path().join("tests");

    fs::create_dir_all(tests.join("bin")).unwrap();
    fs::create_dir_all(tests.join("lib")).unwrap();

    for group in groups {
        let dir = tests.join(format!("cumulo-{group}"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("01-help.bats"), "#!/usr/bin/env bats\n").unwrap();
    }

    tmp
}

/// A configuration pointing at `project_dir`, with default tools and no
/// recreation or coverage upload.
pub fn sample_config(project_dir: &Path) -> Config {
    Config {
        project_dir: project_dir.to_path_buf(),
        tools: Tools {
            pycodestyle: "pycodestyle".to_string(),
            pylint: "pylint".to_string(),
            sphinx_build: "sphinx-build".to_string(),
            codacy: "python-codacy-coverage".to_string(),
        },
        recreate_kgo: None,
        coverage_token: None,
    }
}

/// A run context rooted in the sample project.
pub fn sample_context(project: &TempDir) -> RunContext {
    RunContext {
        config: sample_config(project.path()),
        invocation_dir: project.path().to_path_buf(),
        serial_runner: false,
        debug: false,
    }
}

/// Records every command instead of running it; availability and
/// failures are scripted per program name.
#[derive(Debug, Default)]
pub struct StubShell {
    /// Programs that `available` reports as installed.
    pub installed: Vec<String>,

    /// Programs whose invocation is scripted to fail.
    pub fail_on: Vec<String>,

    /// Every recorded invocation, program first.
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl StubShell {
    /// The program of every recorded invocation, in order.
    pub fn programs_run(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c[0].clone()).collect()
    }
}

impl ShellCommander for StubShell {
    fn available(&self, program: &str) -> bool {
        self.installed.iter().any(|p| p == program)
    }

    fn run(&self, cmd: Command) -> Result<()> {
        let mut call = vec![cmd.get_program().to_string_lossy().into_owned()];
        call.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));

        self.calls.borrow_mut().push(call.clone());

        if self.fail_on.iter().any(|p| p == &call[0]) {
            anyhow::bail!("{} failed in the stub", call[0]);
        }

        Ok(())
    }
}

/// A confirmer with a scripted answer.
pub struct StubConfirmer(pub bool);

impl Confirmer for StubConfirmer {
    fn confirm(&self, _question: &str) -> Result<bool> {
        Ok(self.0)
    }
}
