use std::fs;
use std::path::Path;

use tempdir::TempDir;

use crate::sources::project_sources;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "contents").unwrap();
}

#[test]
fn project_sources_test() {
    let tmp = TempDir::new("sources").unwrap();
    let root = tmp.path();

    touch(&root.join("setup.py"));
    touch(&root.join("lib/cumulo/nbhood.py"));
    touch(&root.join("bin/cumulo-nbhood"));
    touch(&root.join("bin/unrelated-tool"));

    let files = project_sources(root).unwrap();

    assert_eq!(
        files,
        vec![
            root.join("bin/cumulo-nbhood"),
            root.join("lib/cumulo/nbhood.py"),
            root.join("setup.py"),
        ]
    );
}

#[test]
fn project_sources_exclusions_test() {
    let tmp = TempDir::new("sources").unwrap();
    let root = tmp.path();

    touch(&root.join("kept.py"));
    touch(&root.join("bin/cumulo-nbhood~"));
    touch(&root.join("bin/cumulo-vet"));
    // directories never make the list, even with a matching name
    fs::create_dir_all(root.join("bin/cumulo-extras")).unwrap();

    let files = project_sources(root).unwrap();

    assert_eq!(files, vec![root.join("kept.py")]);
}
