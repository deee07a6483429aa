use std::env;
use std::process::exit;

use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use colog::default_builder;
use colog::formatter;
use log::debug;
use log::LevelFilter;
use vet_lib::config::Config;
use vet_lib::constants::ERROR_STYLE;
use vet_lib::ctx;
use vet_lib::discovery::CliTestTree;
use vet_lib::shell::SystemShell;
use vet_lib::tokens::Selection;
use vet_lib::tokens::UnrecognisedToken;

use super::def::Cli;
use super::log::LogTokens;
use super::printing::get_styles;
use super::printing::print_usage;
use crate::runner::run_selection;
use crate::runner::RunContext;
use crate::runner::TerminalConfirmer;

/// This function parses the command that cumulo-vet was run with.
///
/// It owns the process exit status: 0 when every selected category
/// passed, 1 when one failed, 2 when an argument failed classification.
pub fn parse_command() {
    let styled = Cli::command().styles(get_styles()).get_matches();

    // This unwrap will print the error if the command is wrong.
    let command = Cli::from_arg_matches(&styled).unwrap();

    setup_logging(&command);

    // https://github.com/rust-lang/rust/blob/master/library/std/src/backtrace.rs
    let backtrace_enabled = match env::var("RUST_LIB_BACKTRACE") {
        Ok(s) => s != "0",
        Err(_) => match env::var("RUST_BACKTRACE") {
            Ok(s) => s != "0",
            Err(_) => false,
        },
    };

    match process_command(&command) {
        Ok(()) => {}
        Err(e) if e.is::<UnrecognisedToken>() => {
            eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
            print_usage();
            exit(2);
        }
        Err(e) if backtrace_enabled => {
            eprintln!("{e:?}");
            exit(1);
        }
        Err(e) => {
            eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
            eprint!("{e}");
            exit(1);
        }
    }
}

/// CLAP has parsed the command, now we classify the tokens and hand the
/// selection to the driver.
pub fn process_command(cmd: &Cli) -> Result<()> {
    let config = Config::from_env()?;

    let test_root = config.test_root();
    debug!("Discovering CLI test groups under {test_root:?}");

    let tree = CliTestTree::discover(&test_root)?;
    let selection = Selection::resolve(&cmd.tokens, &tree).map_err(anyhow::Error::new)?;

    debug!("Selected categories: {:?}", selection.categories);

    let context = RunContext {
        config,
        invocation_dir: env::current_dir().with_context(ctx!(
            "Could not determine the working directory", ;
            "",
        ))?,
        serial_runner: cmd.bats,
        debug: cmd.debug,
    };

    run_selection(&selection, &context, &SystemShell, &TerminalConfirmer)
}

/// Prepare the log levels for the application.
fn setup_logging(cmd: &Cli) {
    let mut log_build = default_builder();
    log_build.format(formatter(LogTokens));

    log_build.filter(
        None,
        if cmd.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
    );

    log_build.init();
}
