use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn parse_prints_json_by_default() {
    let mut cmd = cargo_bin_cmd!("zrxp");
    cmd.arg("parse").arg(fixture_path("single.zrx"));

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["blocks"][0]["metadata"][0]["key"], "SNAME");
    assert_eq!(value["blocks"][0]["metadata"][0]["value"], "station A");
    assert_eq!(value["blocks"][0]["records"]["records"][1][1], "1.45");
}

#[test]
fn parse_as_treeviz() {
    let mut cmd = cargo_bin_cmd!("zrxp");
    cmd.arg("parse")
        .arg(fixture_path("multi.zrx"))
        .arg("--format")
        .arg("treeviz");

    let output_pred = predicate::str::contains("├─ block: Greim")
        .and(predicate::str::contains("└─ block: empty"))
        .and(predicate::str::contains("metadata: FOOBAR custom"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn bulk_strategy_with_materialize() {
    let mut cmd = cargo_bin_cmd!("zrxp");
    cmd.arg("parse")
        .arg(fixture_path("single.zrx"))
        .args(["--strategy", "bulk", "--format", "tag", "--materialize"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<field>1.45</field>"));
}

#[test]
fn config_file_sets_delimiter() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        config,
        "[parser]\nstrategy = \"bulk\"\n[output]\nformat = \"yaml\"\nmaterialize = true\n[tabular]\ndelimiter = \"comma\""
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("zrxp");
    cmd.arg("parse")
        .arg(fixture_path("comma.zrx"))
        .arg("--config")
        .arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("- '200'").or(predicate::str::contains("- \"200\"")));
}

#[test]
fn malformed_input_fails_with_position() {
    let mut cmd = cargo_bin_cmd!("zrxp");
    cmd.arg("parse").arg(fixture_path("malformed.zrx"));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("syntax error at 1:1"));
}

#[test]
fn unknown_strategy_fails() {
    let mut cmd = cargo_bin_cmd!("zrxp");
    cmd.arg("parse")
        .arg(fixture_path("single.zrx"))
        .args(["--strategy", "pandas"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("zrxp");
    cmd.arg("parse").arg(fixture_path("does-not-exist.zrx"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn keys_lists_enumeration() {
    let mut cmd = cargo_bin_cmd!("zrxp");
    cmd.arg("keys");

    cmd.assert().success().stdout(
        predicate::str::contains("enumeration version 1")
            .and(predicate::str::contains("SANR"))
            .and(predicate::str::contains("TSPATH")),
    );
}

#[test]
fn key_without_value_fails() {
    let mut file = tempfile::Builder::new().suffix(".zrx").tempfile().unwrap();
    writeln!(file, "#SANR1|*|CUNIT|*|\n1 2").unwrap();

    let mut cmd = cargo_bin_cmd!("zrxp");
    cmd.arg("parse").arg(file.path());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("syntax error at 1:16"));
}
