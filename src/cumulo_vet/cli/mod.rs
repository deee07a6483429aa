/// The definition of the command-line arguments.
pub mod def;

/// The log output styling.
pub mod log;

/// Usage and result printing helpers.
pub mod printing;

/// Processing of the parsed command line.
pub mod process;
