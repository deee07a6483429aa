//! The architecture of `cumulo-vet`, shared between the binary and its tests.

/// Constant values: directory conventions, tool names, output styling.
pub mod constants;

/// The error handling for `cumulo-vet`.
pub mod error;

/// The environment-derived configuration, captured once at startup.
pub mod config;

/// The fixed registry of test categories.
pub mod category;

/// Run-time discovery of the CLI acceptance-test tree.
pub mod discovery;

/// Classification of command-line tokens and selection resolution.
pub mod tokens;

/// Resolution of CLI subtest tokens to filesystem targets.
pub mod resolve;

/// Enumeration of the project source files subject to scanning checks.
pub mod sources;

/// The seam through which external tools are invoked.
pub mod shell;
