use std::env;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;

use crate::bailc;
use crate::constants::CODACY_TOOL;
use crate::constants::COVERAGE_TOKEN_ENV;
use crate::constants::PROJECT_DIR_ENV;
use crate::constants::PYCODESTYLE_TOOL;
use crate::constants::PYLINT_TOOL;
use crate::constants::RECREATE_KGO_ENV;
use crate::constants::SPHINXBUILD_TOOL;
use crate::constants::TESTS_DIR;

/// Names of the delegated external tools, overridable from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tools {
    /// The style checker.
    pub pycodestyle: String,

    /// The static-analysis tool.
    pub pylint: String,

    /// The documentation builder.
    pub sphinx_build: String,

    /// The coverage-report uploader.
    pub codacy: String,
}

/// Everything `cumulo-vet` reads from the environment, captured once at
/// startup and immutable for the rest of the run.
#[derive(Clone, Debug)]
pub struct Config {
    /// The root of the project under test.
    pub project_dir: PathBuf,

    /// The external tools to delegate to.
    pub tools: Tools,

    /// When set, acceptance tests recreate known-good output here and the
    /// driver requires interactive confirmation first.
    pub recreate_kgo: Option<PathBuf>,

    /// The coverage upload token; absent means no upload.
    pub coverage_token: Option<String>,
}

impl Config {
    /// Capture the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Capture the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let project_dir = match lookup(PROJECT_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => {
                bailc!(
                    "{PROJECT_DIR_ENV} is not set", ;
                    "The location of the project under test is unknown", ;
                    "Export {PROJECT_DIR_ENV} pointing at the project root",
                );
            }
        };

        let tool = |(var, default): (&str, &str)| {
            lookup(var).unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            project_dir,
            tools: Tools {
                pycodestyle: tool(PYCODESTYLE_TOOL),
                pylint: tool(PYLINT_TOOL),
                sphinx_build: tool(SPHINXBUILD_TOOL),
                codacy: tool(CODACY_TOOL),
            },
            recreate_kgo: lookup(RECREATE_KGO_ENV).map(PathBuf::from),
            coverage_token: lookup(COVERAGE_TOKEN_ENV),
        })
    }

    /// The directory holding the CLI acceptance-test tree.
    pub fn test_root(&self) -> PathBuf {
        self.project_dir.join(TESTS_DIR)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
