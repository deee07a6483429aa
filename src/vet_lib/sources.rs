use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use glob::glob;

use crate::constants::ORCHESTRATOR_BIN;
use crate::constants::PROJECT_CMD_PREFIX;
use crate::error::ctx;

/// Files excluded from the scans: editor backups and this orchestrator's
/// own entry point.
fn excluded(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return true;
    };

    name.ends_with('~') || name == ORCHESTRATOR_BIN
}

/// Every python source under the project root, plus the project's command
/// files under `bin/`, minus the exclusion list.
///
/// This is the file set fed to both the style checks and the licence scan.
pub fn project_sources(project_dir: &Path) -> Result<Vec<PathBuf>> {
    let patterns = [
        project_dir.join("**").join("*.py"),
        project_dir.join("bin").join(format!("{PROJECT_CMD_PREFIX}*")),
    ];

    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = pattern.to_string_lossy().into_owned();

        let hits = glob(&pattern).with_context(ctx!(
            "Invalid source discovery pattern {pattern:?}", ;
            "",
        ))?;

        for hit in hits {
            let path = hit.with_context(ctx!(
                "Could not inspect a file matching {pattern:?}", ;
                "Ensure that you have permissions to read the project tree",
            ))?;

            if path.is_file() && !excluded(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
#[path = "tests/sources.rs"]
mod tests;
