use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn help_lists_the_settings() {
    for bin in ["triangle", "lighting"] {
        Command::cargo_bin(bin)
            .expect("binary exists")
            .arg("--help")
            .assert()
            .success()
            .stdout(contains("--assets"))
            .stdout(contains("--width"))
            .stdout(contains("--no-grab"));
    }
}

#[test]
fn bad_size_is_rejected_before_opening_a_window() {
    Command::cargo_bin("lighting")
        .expect("binary exists")
        .args(["--height", "tall"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}
