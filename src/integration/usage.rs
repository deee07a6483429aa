use crate::count_markers;
use crate::init;
use crate::vet;

#[test]
fn help_exits_zero_test() {
    let env = init();

    let output = vet!(env; "--help");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("cumulo-vet"));
}

#[test]
fn unknown_token_exits_two_test() {
    let env = init();

    let output = vet!(env; "frobnicate");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).contains("usage:"));

    // the usage gate fires before anything runs
    assert_eq!(count_markers(&output, "ok:"), 0);
    assert_eq!(count_markers(&output, "fail:"), 0);
}

#[test]
fn unknown_token_after_valid_ones_exits_two_test() {
    let env = init();

    let output = vet!(env; "unit", "frobnicate", "cli");

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(count_markers(&output, "ok:"), 0);
}

#[test]
fn unknown_flag_exits_two_test() {
    let env = init();

    let output = vet!(env; "--frobnicate");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_project_dir_exits_one_test() {
    let env = init();

    let output = crate::vet_command(&env)
        .env_remove("CUMULO_DIR")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("CUMULO_DIR"));
}
