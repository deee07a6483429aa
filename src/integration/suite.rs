use crate::count_markers;
use crate::fail_stub;
use crate::init;
use crate::vet;

#[test]
fn full_default_run_test() {
    let env = init();

    let output = vet!(env);

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    for category in ["style", "pylintE", "licence", "doc", "unit", "cli"] {
        assert!(stdout.contains(category), "{category} missing from output");
    }

    // six defaults pass, the advisory scoring pass is not among them
    assert_eq!(count_markers(&output, "ok:"), 6);
    assert_eq!(count_markers(&output, "fail:"), 0);
}

#[test]
fn failing_category_fails_fast_test() {
    let env = init();
    fail_stub(&env, "pycodestyle");

    let output = vet!(env);

    assert_eq!(output.status.code(), Some(1));
    // style is the first category, so nothing gets to pass
    assert_eq!(count_markers(&output, "ok:"), 0);
    assert_eq!(count_markers(&output, "fail:"), 1);
}

#[test]
fn later_category_failure_skips_the_rest_test() {
    let env = init();
    fail_stub(&env, "python");

    let output = vet!(env; "unit", "cli");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(count_markers(&output, "fail:"), 1);
    // cli is ordered after unit and never ran
    assert_eq!(count_markers(&output, "ok:"), 0);
}

#[test]
fn advisory_scoring_pass_never_gates_test() {
    let env = init();
    fail_stub(&env, "pylint");

    let output = vet!(env; "pylint");

    // reported as a failure, yet the run succeeds
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(count_markers(&output, "fail:"), 1);
}

#[test]
fn cli_subtest_selection_test() {
    let env = init();

    let output = vet!(env; "cli", "nbhood");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(count_markers(&output, "ok:"), 1);
}

#[test]
fn explicit_categories_only_test() {
    let env = init();

    let output = vet!(env; "licence", "doc");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(count_markers(&output, "ok:"), 2);
}
