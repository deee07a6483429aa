use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use log::info;
use log::warn;
use vet_lib::category::Category;
use vet_lib::config::Config;
use vet_lib::ctx;
use vet_lib::shell::ShellCommander;
use vet_lib::tokens::Selection;

use crate::cli::printing::print_fail;
use crate::cli::printing::print_ok;

/// The CLI acceptance-test category.
pub mod bats;

/// The thin delegated categories: style, static analysis, docs, units.
pub mod checks;

/// The licence banner scan.
pub mod licence;

/// Everything a run needs besides the selection itself.
#[derive(Clone, Debug)]
pub struct RunContext {
    /// The environment-derived configuration.
    pub config: Config,

    /// The invoker's working directory, captured at startup; relative
    /// subtest paths resolve against it.
    pub invocation_dir: PathBuf,

    /// `--bats`: skip the parallel runner even when it is installed.
    pub serial_runner: bool,

    /// `--debug`: serialize the acceptance tests.
    pub debug: bool,
}

/// The interactive confirmation capability.
///
/// Injectable so that tests never block on a terminal; the real
/// implementation blocks indefinitely until the operator answers.
pub trait Confirmer {
    /// Ask a yes/no question.
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Asks on the controlling terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, question: &str) -> Result<bool> {
        Ok(inquire::Confirm::new(question).prompt()?)
    }
}

/// Run every selected category, failing fast on the first gating failure.
///
/// Categories always run in registry order, never in argv order. Every
/// category prints a marked ok or fail line; an advisory category reports
/// its failure but never gates the run.
pub fn run_selection(
    selection: &Selection,
    run: &RunContext,
    shell: &impl ShellCommander,
    confirm: &impl Confirmer,
) -> Result<()> {
    for category in Category::REGISTRY
        .into_iter()
        .filter(|c| selection.categories.contains(c))
    {
        info!("Running the {category} checks");

        let result = match category {
            Category::Style => checks::style(run, shell),
            Category::PylintErrors => checks::pylint_errors(run, shell),
            Category::PylintFull => checks::pylint_full(run, shell),
            Category::Licence => licence::run(run),
            Category::Doc => checks::doc(run, shell),
            Category::Unit => checks::unit(run, shell),
            Category::Cli => bats::run_cli(selection, run, shell, confirm),
        };

        match result {
            Ok(()) => print_ok(category.name()),
            Err(e) if category.advisory() => {
                print_fail(category.name());
                warn!("{category} is advisory, continuing: {}", e.root_cause());
            }
            Err(e) => {
                print_fail(category.name());
                return Err(e).with_context(ctx!(
                    "The {category} checks failed", ;
                    "",
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/driver.rs"]
mod tests;
