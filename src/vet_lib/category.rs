use std::fmt;
use std::fmt::Display;

/// One named class of checks that the orchestrator can run.
///
/// The set is fixed at compile time; identity is the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// `pycodestyle` over the project sources.
    Style,

    /// `pylint` restricted to errors; this pass gates the run.
    PylintErrors,

    /// The full `pylint` scoring pass; advisory only.
    PylintFull,

    /// Presence of the licence banner in every source file.
    Licence,

    /// The documentation build.
    Doc,

    /// The python unit tests, with coverage when available.
    Unit,

    /// The `bats` acceptance tests of the command-line interface.
    Cli,
}

impl Category {
    /// Every category, in execution order.
    ///
    /// The driver always runs in this order, never in argv order.
    pub const REGISTRY: [Category; 7] = [
        Category::Style,
        Category::PylintErrors,
        Category::PylintFull,
        Category::Licence,
        Category::Doc,
        Category::Unit,
        Category::Cli,
    ];

    /// What runs when the invoker names no categories.
    ///
    /// The full scoring pass is excluded: it is advisory and only runs on
    /// explicit request.
    pub const DEFAULT: [Category; 6] = [
        Category::Style,
        Category::PylintErrors,
        Category::Licence,
        Category::Doc,
        Category::Unit,
        Category::Cli,
    ];

    /// The name as it appears on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Category::Style => "style",
            Category::PylintErrors => "pylintE",
            Category::PylintFull => "pylint",
            Category::Licence => "licence",
            Category::Doc => "doc",
            Category::Unit => "unit",
            Category::Cli => "cli",
        }
    }

    /// Look a category up by its command-line name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::REGISTRY.into_iter().find(|c| c.name() == name)
    }

    /// Advisory categories are reported but never gate the exit code,
    /// even when requested by name.
    pub fn advisory(self) -> bool {
        matches!(self, Category::PylintFull)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
#[path = "tests/category.rs"]
mod tests;
