use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;

use crate::constants::BATS_EXTENSION;
use crate::constants::GROUP_PREFIX;
use crate::constants::RESERVED_TEST_DIRS;
use crate::error::ctx;

/// A single CLI acceptance-test group found under the test root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliGroup {
    /// The short selector, the directory name minus the group prefix.
    pub short: String,

    /// The full directory name on disk.
    pub dir_name: String,

    /// The path of the group directory.
    pub path: PathBuf,
}

/// The discovered CLI test tree.
///
/// Rebuilt on every invocation since it mirrors the filesystem at that
/// moment; the token classifier relies on it as its recognition grammar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliTestTree {
    /// The test groups, sorted by short id.
    pub groups: Vec<CliGroup>,
}

impl CliTestTree {
    /// List the children of the test root, skipping the reserved support
    /// directories and anything that is not a directory.
    pub fn discover(test_root: &Path) -> Result<Self> {
        let entries = fs::read_dir(test_root).with_context(ctx!(
            "Could not list the test root {test_root:?}", ;
            "Ensure that the project contains a test directory",
        ))?;

        let mut groups = Vec::new();

        for entry in entries {
            let path = entry
                .with_context(ctx!(
                    "Could not read an entry of {test_root:?}", ;
                    "",
                ))?
                .path();

            if !path.is_dir() {
                continue;
            }

            let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if RESERVED_TEST_DIRS.contains(&dir_name) {
                continue;
            }

            groups.push(CliGroup {
                short: dir_name.strip_prefix(GROUP_PREFIX).unwrap_or(dir_name).to_string(),
                dir_name: dir_name.to_string(),
                path: path.clone(),
            });
        }

        // read_dir order is platform dependent
        groups.sort_by(|a, b| a.short.cmp(&b.short));

        Ok(Self { groups })
    }

    /// Whether `token` names something in this tree: a short group id, a
    /// path ending in a group directory (with or without a trailing
    /// slash), or any `.bats` file.
    pub fn recognises(&self, token: &str) -> bool {
        if Path::new(token)
            .extension()
            .is_some_and(|ext| ext == BATS_EXTENSION)
        {
            return true;
        }

        let trimmed = token.strip_suffix('/').unwrap_or(token);

        self.groups.iter().any(|group| {
            trimmed == group.short || trimmed.ends_with(&format!("/{}", group.dir_name))
        })
    }
}

#[cfg(test)]
#[path = "tests/discovery.rs"]
mod tests;
