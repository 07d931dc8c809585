extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn mandelcycle() -> Command {
    Command::cargo_bin("mandelcycle").unwrap()
}

#[test]
fn help_lists_the_options() {
    mandelcycle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--variant"))
        .stdout(predicate::str::contains("--mapping"))
        .stdout(predicate::str::contains("--still"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_AUTHORS")));
}

#[test]
fn version_comes_from_the_package() {
    mandelcycle()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_variant_is_rejected() {
    mandelcycle()
        .args(&["--variant", "plaid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field variant: plaid"));
}

#[test]
fn unknown_mapping_is_rejected() {
    mandelcycle()
        .args(&["--mapping", "polar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown mapping: polar"));
}

#[test]
fn stray_arguments_are_rejected() {
    mandelcycle().arg("extra").assert().failure();
}
