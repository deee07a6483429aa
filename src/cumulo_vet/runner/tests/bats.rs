use std::fs;
use std::path::PathBuf;

use vet_lib::category::Category;
use vet_lib::tokens::Selection;

use crate::runner::bats::run_cli;
use crate::test_utils::sample_context;
use crate::test_utils::sample_project;
use crate::test_utils::StubConfirmer;
use crate::test_utils::StubShell;

fn cli_selection(subtests: &[&str]) -> Selection {
    Selection {
        categories: vec![Category::Cli],
        cli_subtests: subtests.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn directory_target_runs_discovered_set_test() {
    let project = sample_project(&["nbhood"]);
    let group = project.path().join("tests/cumulo-nbhood");
    fs::create_dir_all(group.join("deeper")).unwrap();
    fs::write(group.join("deeper/02-args.bats"), "").unwrap();

    let run = sample_context(&project);
    let shell = StubShell::default();

    run_cli(&cli_selection(&["nbhood"]), &run, &shell, &StubConfirmer(true)).unwrap();

    // no parallel installed: bats over the recursively discovered files
    let calls = shell.calls.borrow();
    assert_eq!(
        *calls,
        vec![vec![
            "bats".to_string(),
            group.join("01-help.bats").to_string_lossy().into_owned(),
            group
                .join("deeper/02-args.bats")
                .to_string_lossy()
                .into_owned(),
        ]]
    );
}

#[test]
fn single_file_target_runs_directly_test() {
    let project = sample_project(&["nbhood"]);
    let run = sample_context(&project);
    let shell = StubShell::default();

    // a relative path from the invocation directory, rule two
    run_cli(
        &cli_selection(&["tests/cumulo-nbhood/01-help.bats"]),
        &run,
        &shell,
        &StubConfirmer(true),
    )
    .unwrap();

    let expected = project.path().join("tests/cumulo-nbhood/01-help.bats");
    let calls = shell.calls.borrow();
    assert_eq!(
        *calls,
        vec![vec![
            "bats".to_string(),
            expected.to_string_lossy().into_owned(),
        ]]
    );
}

#[test]
fn parallel_runner_preferred_test() {
    let project = sample_project(&["nbhood"]);
    let run = sample_context(&project);

    let shell = StubShell {
        installed: vec!["parallel".to_string()],
        ..StubShell::default()
    };

    run_cli(&cli_selection(&["nbhood"]), &run, &shell, &StubConfirmer(true)).unwrap();

    let calls = shell.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0][..4],
        [
            "parallel".to_string(),
            "--jobs".to_string(),
            "4".to_string(),
            "bats".to_string(),
        ]
    );
    assert_eq!(calls[0][4], ":::");
}

#[test]
fn debug_serializes_the_parallel_runner_test() {
    let project = sample_project(&["nbhood"]);
    let mut run = sample_context(&project);
    run.debug = true;

    let shell = StubShell {
        installed: vec!["parallel".to_string()],
        ..StubShell::default()
    };

    run_cli(&cli_selection(&["nbhood"]), &run, &shell, &StubConfirmer(true)).unwrap();

    let calls = shell.calls.borrow();
    assert_eq!(calls[0][1..3], ["--jobs".to_string(), "1".to_string()]);
}

#[test]
fn bats_flag_forces_the_serial_runner_test() {
    let project = sample_project(&["nbhood"]);
    let mut run = sample_context(&project);
    run.serial_runner = true;

    let shell = StubShell {
        installed: vec!["parallel".to_string()],
        ..StubShell::default()
    };

    run_cli(&cli_selection(&["nbhood"]), &run, &shell, &StubConfirmer(true)).unwrap();

    assert_eq!(shell.programs_run(), vec!["bats".to_string()]);
}

#[test]
fn whole_tree_when_not_restricted_test() {
    let project = sample_project(&["nbhood", "threshold"]);
    let run = sample_context(&project);
    let shell = StubShell::default();

    // no selectors: the full test root is the single target
    run_cli(&cli_selection(&[]), &run, &shell, &StubConfirmer(true)).unwrap();

    let calls = shell.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0], "bats");
    // both groups' files were discovered under the one root target
    assert_eq!(calls[0].len(), 3);
}

#[test]
fn dangling_literal_target_fails_in_the_runner_test() {
    let project = sample_project(&["nbhood"]);
    let run = sample_context(&project);
    let shell = StubShell::default();

    let result = run_cli(&cli_selection(&["ghost"]), &run, &shell, &StubConfirmer(true));

    assert!(result.is_err_and(|e| e.to_string().contains("No acceptance tests")));
    assert!(shell.calls.borrow().is_empty());
}

#[test]
fn recreating_golden_output_needs_confirmation_test() {
    let project = sample_project(&["nbhood"]);
    let mut run = sample_context(&project);
    run.config.recreate_kgo = Some(PathBuf::from("/data/kgo"));

    let shell = StubShell::default();

    // declined: nothing may run
    let declined = run_cli(&cli_selection(&["nbhood"]), &run, &shell, &StubConfirmer(false));
    assert!(declined.is_err_and(|e| e.to_string().contains("not confirmed")));
    assert!(shell.calls.borrow().is_empty());

    // confirmed: the tests proceed
    run_cli(&cli_selection(&["nbhood"]), &run, &shell, &StubConfirmer(true)).unwrap();
    assert_eq!(shell.programs_run(), vec!["bats".to_string()]);
}
