use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::category::Category;
use crate::discovery::CliTestTree;

/// The class assigned to one positional command-line argument.
///
/// Option flags never reach classification, they are consumed by the
/// argument parser beforehand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenClass {
    /// A fixed category name from the registry.
    Category(Category),

    /// A selector for part of the CLI acceptance-test tree.
    CliSubtest(String),
}

/// A positional argument that matches none of the recognised forms.
///
/// This is a hard validation gate: the caller prints usage and terminates
/// with exit status 2 before anything runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnrecognisedToken(pub String);

impl Display for UnrecognisedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised argument: {}", self.0)
    }
}

impl Error for UnrecognisedToken {}

/// Classify one token.
///
/// Category names take priority over the discovery grammar, so a test
/// group can never shadow a category.
pub fn classify(token: &str, tree: &CliTestTree) -> Result<TokenClass, UnrecognisedToken> {
    if let Some(category) = Category::from_name(token) {
        return Ok(TokenClass::Category(category));
    }

    if tree.recognises(token) {
        return Ok(TokenClass::CliSubtest(token.to_string()));
    }

    Err(UnrecognisedToken(token.to_string()))
}

/// Which categories run and, possibly, which slice of the CLI tree.
///
/// Built once per invocation and immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// The selected categories, deduplicated, in first-seen order.
    pub categories: Vec<Category>,

    /// The raw CLI subtest selectors, in argv order.
    pub cli_subtests: Vec<String>,
}

impl Selection {
    /// Classify every token and fold the results into a selection.
    ///
    /// The first unrecognised token aborts resolution; an empty category
    /// list falls back to the registry default set.
    pub fn resolve(tokens: &[String], tree: &CliTestTree) -> Result<Self, UnrecognisedToken> {
        let mut categories = Vec::new();
        let mut cli_subtests = Vec::new();

        for token in tokens {
            match classify(token, tree)? {
                TokenClass::Category(category) => {
                    if !categories.contains(&category) {
                        categories.push(category);
                    }
                }
                TokenClass::CliSubtest(subtest) => cli_subtests.push(subtest),
            }
        }

        if categories.is_empty() {
            categories = Category::DEFAULT.to_vec();
        }

        Ok(Self {
            categories,
            cli_subtests,
        })
    }

    /// The subtests to restrict the CLI category to, if any.
    ///
    /// Subtest filtering applies only when the whole run is scoped to the
    /// CLI category; any other category mix runs the full test tree and
    /// ignores the selectors as filters.
    pub fn restricted_cli_subtests(&self) -> Option<&[String]> {
        if self.categories == [Category::Cli] && !self.cli_subtests.is_empty() {
            Some(&self.cli_subtests)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/tokens.rs"]
mod tests;
