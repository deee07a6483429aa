use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use log::error;
use vet_lib::bailc;
use vet_lib::constants::LICENCE_BANNER;
use vet_lib::ctx;
use vet_lib::sources::project_sources;

use super::RunContext;

/// Check that every project source file carries the licence banner.
///
/// Violations are collected across the whole scan and reported as one
/// batch; the category fails only after every file has been inspected.
pub fn run(run: &RunContext) -> Result<()> {
    let files = project_sources(&run.config.project_dir)?;
    let missing = scan(&run.config.project_dir, &files, LICENCE_BANNER)?;

    if missing.is_empty() {
        return Ok(());
    }

    for path in &missing {
        error!("Missing the licence banner: {}", path.display());
    }

    let count = missing.len();
    bailc!(
        "{count} files are missing the licence banner", ;
        "Every non-empty source file must contain the banner verbatim", ;
        "Add the banner to the files listed above",
    );
}

/// The relative paths of all non-empty files whose contents do not
/// contain `banner` as a contiguous substring.
pub fn scan(root: &Path, files: &[PathBuf], banner: &str) -> Result<Vec<PathBuf>> {
    let mut missing = Vec::new();

    for file in files {
        let contents = fs::read_to_string(file).with_context(ctx!(
            "Could not read {file:?}", ;
            "Ensure that the file is readable and valid utf-8",
        ))?;

        // empty files carry no banner and that is fine
        if contents.is_empty() {
            continue;
        }

        if !contents.contains(banner) {
            missing.push(file.strip_prefix(root).unwrap_or(file).to_path_buf());
        }
    }

    Ok(missing)
}

#[cfg(test)]
#[path = "tests/licence.rs"]
mod tests;
