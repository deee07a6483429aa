use clap::Parser;

/// Structure of the main command (cumulo-vet).
#[derive(Parser, Debug)]
#[command(
    about = "cumulo-vet, the Cumulo test-suite orchestrator",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Run acceptance tests with plain bats, even when GNU parallel is
    /// installed.
    #[arg(long)]
    pub bats: bool,

    /// Debug mode, displays debug info and serializes acceptance tests.
    #[arg(long)]
    pub debug: bool,

    /// Category names, CLI subtest selectors, or test paths.
    #[arg(value_name = "TOKEN")]
    pub tokens: Vec<String>,
}
