use std::path::Path;
use std::path::PathBuf;

use crate::constants::GROUP_PREFIX;

/// Whether a resolved target is a file or a directory.
///
/// Targets taken literally (the third resolution rule) are never checked
/// for existence and come out as [TargetKind::Directory]; a dangling path
/// fails later, inside the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    /// A directory to discover acceptance tests under.
    Directory,

    /// A single acceptance-test file.
    File,
}

/// A CLI subtest token pinned to a concrete filesystem location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// File or directory, as found on disk.
    pub kind: TargetKind,

    /// Where the target lives.
    pub path: PathBuf,
}

impl ResolvedTarget {
    /// Wrap a path, probing the filesystem for its kind.
    pub fn of(path: PathBuf) -> Self {
        let kind = if path.is_file() {
            TargetKind::File
        } else {
            TargetKind::Directory
        };

        ResolvedTarget { kind, path }
    }
}

/// Map a subtest token to a location; the first rule that fires wins.
///
/// 1. The shorthand `<test root>/cumulo-<token>`, if it exists.
/// 2. The token relative to the invoker's working directory, if that
///    exists.
/// 3. The token taken literally, deliberately without an existence check.
///
/// The order is a tie-break and must be preserved: shorthand names are
/// checked before path interpretation so that the invoker never has to
/// disambiguate a group name from a like-named local file.
pub fn resolve_target(token: &str, test_root: &Path, invocation_dir: &Path) -> ResolvedTarget {
    let shorthand = test_root.join(format!("{GROUP_PREFIX}{token}"));
    if shorthand.exists() {
        return ResolvedTarget::of(shorthand);
    }

    let relative = invocation_dir.join(token);
    if relative.exists() {
        return ResolvedTarget::of(relative);
    }

    ResolvedTarget::of(PathBuf::from(token))
}

#[cfg(test)]
#[path = "tests/resolve.rs"]
mod tests;
