use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn parse_normalizes_mixed_delimiters() {
    let mut cmd = cargo_bin_cmd!("attrlist");
    cmd.arg("parse").arg("1,2 3");

    cmd.assert().success().stdout("1 2 3\n");
}

#[test]
fn parse_with_precision_prints_fixed_decimals() {
    let mut cmd = cargo_bin_cmd!("attrlist");
    cmd.arg("parse").arg("-p").arg("2").arg("1");

    cmd.assert().success().stdout("1.00\n");
}

#[test]
fn parse_reads_stdin_for_dash() {
    let mut cmd = cargo_bin_cmd!("attrlist");
    cmd.arg("parse").arg("-").write_stdin("4, 5\n6");

    cmd.assert().success().stdout("4 5 6\n");
}

#[test]
fn parse_prints_json_sequence() {
    let mut cmd = cargo_bin_cmd!("attrlist");
    cmd.arg("parse").arg("-f").arg("json").arg("1 2.5");

    let output_pred = predicate::str::starts_with("[")
        .and(predicate::str::contains("1.0"))
        .and(predicate::str::contains("2.5"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn parse_rejects_malformed_literal() {
    let mut cmd = cargo_bin_cmd!("attrlist");
    cmd.arg("parse").arg("1 x");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Parse error:").and(predicate::str::contains("`x`")));
}

#[test]
fn missing_config_file_exits_with_error() {
    let mut cmd = cargo_bin_cmd!("attrlist");
    cmd.arg("parse")
        .arg("--config")
        .arg("/nonexistent/attrlist-settings.toml")
        .arg("1 2");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error:"));
}

#[test]
fn config_file_sets_precision() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(file, "[formatting]\nprecision = 1").unwrap();

    let mut cmd = cargo_bin_cmd!("attrlist");
    cmd.arg("parse").arg("--config").arg(file.path()).arg("2.5,3");

    cmd.assert().success().stdout("2.5 3.0\n");
}

#[test]
fn tokens_lists_byte_spans() {
    let mut cmd = cargo_bin_cmd!("attrlist");
    cmd.arg("tokens").arg("10, 2");

    let output_pred = predicate::str::contains("0..2")
        .and(predicate::str::contains("4..5"))
        .and(predicate::str::contains("10"));

    cmd.assert().success().stdout(output_pred);
}
