use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The environment variable pointing at the root of the project under test.
pub const PROJECT_DIR_ENV: &str = "CUMULO_DIR";

/// When set, CLI acceptance tests will regenerate their known-good output
/// under this path instead of comparing against it.
pub const RECREATE_KGO_ENV: &str = "RECREATE_KGO";

/// The bearer token for the coverage upload. Absent means the upload is
/// skipped silently.
pub const COVERAGE_TOKEN_ENV: &str = "CODACY_PROJECT_TOKEN";

/// The style checker, as an `(override variable, default command)` pair.
pub const PYCODESTYLE_TOOL: (&str, &str) = ("PYCODESTYLE", "pycodestyle");

/// The static-analysis tool.
pub const PYLINT_TOOL: (&str, &str) = ("PYLINT", "pylint");

/// The documentation builder.
pub const SPHINXBUILD_TOOL: (&str, &str) = ("SPHINXBUILD", "sphinx-build");

/// The coverage-report uploader.
pub const CODACY_TOOL: (&str, &str) = ("CODACY", "python-codacy-coverage");

/// The python interpreter used to run the unit tests.
pub const PYTHON: &str = "python";

/// The coverage tool, used for the unit tests when installed.
pub const COVERAGE_TOOL: &str = "coverage";

/// The serial acceptance-test runner.
pub const BATS_RUNNER: &str = "bats";

/// The parallel, TAP-aware runner, used when installed.
pub const PARALLEL_RUNNER: &str = "parallel";

/// Worker count handed to the parallel runner.
pub const DEFAULT_BATS_JOBS: usize = 4;

/// The subdirectory of the project root holding the acceptance tests.
pub const TESTS_DIR: &str = "tests";

/// Children of the test root that hold support code, never test groups.
pub const RESERVED_TEST_DIRS: [&str; 2] = ["bin", "lib"];

/// CLI test groups are directories named `cumulo-<short id>`.
pub const GROUP_PREFIX: &str = "cumulo-";

/// The project's command files in `bin/` all start with this.
pub const PROJECT_CMD_PREFIX: &str = "cumulo";

/// The extension of acceptance-test files.
pub const BATS_EXTENSION: &str = "bats";

/// This orchestrator's own entry point, excluded from the licence scan.
pub const ORCHESTRATOR_BIN: &str = "cumulo-vet";

/// Every non-empty project source file must contain this banner verbatim.
pub const LICENCE_BANNER: &str = "\
# This file is part of the Cumulo post-processing toolbox and is released
# under the BSD 3-Clause licence; see the LICENCE file shipped with Cumulo.";

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for passing categories and other primary output.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Green).bold();

/// The styling for error messages and failing categories.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold();

/// The styling for warnings.
pub const WARNING_STYLE: Style = style_from_fg(AnsiColor::Yellow).bold();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();
