use std::fs;

use vet_lib::category::Category;
use vet_lib::tokens::Selection;

use crate::runner::run_selection;
use crate::test_utils::sample_context;
use crate::test_utils::sample_project;
use crate::test_utils::StubConfirmer;
use crate::test_utils::StubShell;

fn selection_of(categories: &[Category]) -> Selection {
    Selection {
        categories: categories.to_vec(),
        cli_subtests: vec![],
    }
}

#[test]
fn fail_fast_skips_later_categories_test() {
    let project = sample_project(&["nbhood"]);
    let run = sample_context(&project);

    // no coverage tool installed, so `unit` runs the interpreter directly
    let shell = StubShell {
        fail_on: vec!["python".to_string()],
        ..StubShell::default()
    };

    let result = run_selection(
        &selection_of(&[Category::Unit, Category::Cli]),
        &run,
        &shell,
        &StubConfirmer(true),
    );

    assert!(result.is_err());
    // cli is ordered after unit and must never start
    assert_eq!(shell.programs_run(), vec!["python".to_string()]);
}

#[test]
fn registry_order_beats_argv_order_test() {
    let project = sample_project(&["nbhood"]);
    fs::write(project.path().join("setup.py"), "import cumulo\n").unwrap();
    let run = sample_context(&project);

    let shell = StubShell::default();

    // argv named cli before style; the driver must not care
    run_selection(
        &selection_of(&[Category::Cli, Category::Style]),
        &run,
        &shell,
        &StubConfirmer(true),
    )
    .unwrap();

    assert_eq!(
        shell.programs_run(),
        vec!["pycodestyle".to_string(), "bats".to_string()]
    );
}

#[test]
fn advisory_scoring_pass_never_gates_test() {
    let project = sample_project(&[]);
    let run = sample_context(&project);

    let shell = StubShell {
        fail_on: vec!["pylint".to_string()],
        ..StubShell::default()
    };

    // the full scoring pass fails, the run does not
    run_selection(
        &selection_of(&[Category::PylintFull]),
        &run,
        &shell,
        &StubConfirmer(true),
    )
    .unwrap();

    // the error-only pass with the same tool does gate
    let result = run_selection(
        &selection_of(&[Category::PylintErrors]),
        &run,
        &shell,
        &StubConfirmer(true),
    );

    assert!(result.is_err());
}

#[test]
fn unit_tests_without_coverage_tool_test() {
    let project = sample_project(&[]);
    let run = sample_context(&project);

    let shell = StubShell::default();

    run_selection(&selection_of(&[Category::Unit]), &run, &shell, &StubConfirmer(true)).unwrap();

    assert_eq!(shell.programs_run(), vec!["python".to_string()]);
}

#[test]
fn unit_tests_skip_upload_without_token_test() {
    let project = sample_project(&[]);
    let run = sample_context(&project);

    let shell = StubShell {
        installed: vec!["coverage".to_string()],
        ..StubShell::default()
    };

    run_selection(&selection_of(&[Category::Unit]), &run, &shell, &StubConfirmer(true)).unwrap();

    // coverage runs and reports, but nothing is uploaded
    assert_eq!(
        shell.programs_run(),
        vec!["coverage".to_string(), "coverage".to_string()]
    );
}

#[test]
fn unit_tests_upload_with_token_test() {
    let project = sample_project(&[]);
    let mut run = sample_context(&project);
    run.config.coverage_token = Some("sekrit".to_string());

    let shell = StubShell {
        installed: vec!["coverage".to_string()],
        ..StubShell::default()
    };

    run_selection(&selection_of(&[Category::Unit]), &run, &shell, &StubConfirmer(true)).unwrap();

    assert_eq!(
        shell.programs_run(),
        vec![
            "coverage".to_string(),
            "coverage".to_string(),
            "python-codacy-coverage".to_string()
        ]
    );
}
