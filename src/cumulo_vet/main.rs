//! `cumulo-vet` selects and runs the Cumulo test suite.

/// The command line interface and logging setup.
pub mod cli;

/// The execution driver and the individual test categories.
pub mod runner;

/// Convenience functions for unit tests.
#[cfg(test)]
pub mod test_utils;

/// The main CLI entry-point of the `cumulo-vet` utility.
///
/// This function parses command-line arguments and runs the selected
/// test categories.
fn main() {
    cli::process::parse_command();
}
