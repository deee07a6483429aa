use std::process::Command;

use anyhow::Result;
use log::debug;
use vet_lib::constants::COVERAGE_TOOL;
use vet_lib::constants::PYTHON;
use vet_lib::shell::ShellCommander;
use vet_lib::sources::project_sources;

use super::RunContext;

/// A command for `program`, rooted in the project directory.
fn tool(run: &RunContext, program: &str) -> Command {
    let mut cmd = Command::new(program);
    cmd.current_dir(&run.config.project_dir);
    cmd
}

/// The style check: `pycodestyle` over every project source file.
pub fn style(run: &RunContext, shell: &impl ShellCommander) -> Result<()> {
    let mut cmd = tool(run, &run.config.tools.pycodestyle);
    cmd.args(project_sources(&run.config.project_dir)?);

    shell.run(cmd)
}

/// Static analysis restricted to errors; this pass gates the run.
pub fn pylint_errors(run: &RunContext, shell: &impl ShellCommander) -> Result<()> {
    let mut cmd = tool(run, &run.config.tools.pylint);
    cmd.arg("-E");
    cmd.args(project_sources(&run.config.project_dir)?);

    shell.run(cmd)
}

/// The full static-analysis scoring pass.
///
/// The caller treats this category as advisory and never lets its result
/// gate the exit code.
pub fn pylint_full(run: &RunContext, shell: &impl ShellCommander) -> Result<()> {
    let mut cmd = tool(run, &run.config.tools.pylint);
    cmd.args(project_sources(&run.config.project_dir)?);

    shell.run(cmd)
}

/// Build the HTML documentation.
pub fn doc(run: &RunContext, shell: &impl ShellCommander) -> Result<()> {
    let mut cmd = tool(run, &run.config.tools.sphinx_build);
    cmd.args(["-b", "html", "doc/source", "doc/build/html"]);

    shell.run(cmd)
}

/// The unit tests, with coverage when the coverage tool is installed.
///
/// The coverage report is uploaded only when a project token is present
/// in the environment; an absent token skips the upload silently.
pub fn unit(run: &RunContext, shell: &impl ShellCommander) -> Result<()> {
    if !shell.available(COVERAGE_TOOL) {
        let mut cmd = tool(run, PYTHON);
        cmd.args(["-m", "pytest"]);

        return shell.run(cmd);
    }

    let mut cmd = tool(run, COVERAGE_TOOL);
    cmd.args(["run", "-m", "pytest"]);
    shell.run(cmd)?;

    let mut report = tool(run, COVERAGE_TOOL);
    report.arg("xml");
    shell.run(report)?;

    if run.config.coverage_token.is_some() {
        let mut upload = tool(run, &run.config.tools.codacy);
        upload.args(["-r", "coverage.xml"]);
        shell.run(upload)?;
    } else {
        debug!("No coverage token in the environment, skipping the upload");
    }

    Ok(())
}
