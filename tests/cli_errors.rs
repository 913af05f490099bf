#![cfg(feature = "cli")]

use predicates::prelude::*;

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input data"));
}

#[test]
fn cli_rejects_unknown_algorithm() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--algo").arg("12").arg("35");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown algorithm '12'"));
}

#[test]
fn cli_prints_value_with_unit() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--algo").arg("9").arg("35").arg("0").arg("0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1449.1").and(predicate::str::contains(" m/s")));
}

#[test]
fn cli_substitutes_zero_for_unparsable_values() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--algo").arg("freezing_point").arg("35").arg("oops");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("-1.92230 °C"));
}

#[test]
fn cli_reads_leading_number_and_labels_reference_pressure() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.args(["--algo", "potential_temperature", "--p-ref", "10000"])
        .args(["40", "40", "10000dbar"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("40.00000 °C (at reference pressure)"))
        .stdout(predicate::str::contains("(at Surface)").not());
}

#[test]
fn cli_works_with_sample_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    let sample = serde_json::json!({ "v1": 40.0, "v2": 40.0, "v3": 10000.0 }).to_string();

    cmd.arg("--json").arg("--algo").arg("density").arg("--sample-json").arg(sample);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"algorithm\": \"density\""))
        .stdout(predicate::str::contains("1059.82"));
}

#[test]
fn cli_reads_input_document_from_stdin() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");

    let doc = serde_json::json!({
        "algorithm": "potential_temperature",
        "sample": { "v1": 40.0, "v2": 40.0, "v3": 10000.0 }
    })
    .to_string();

    cmd.arg("--input").arg("-").write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("36.8907"))
        .stdout(predicate::str::contains("(at Surface)"));
}

#[test]
fn cli_summary_as_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--json").arg("--summary").arg("--latitude").arg("30").arg("35").arg("10").arg("1000");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"density_kg_per_m3\""))
        .stdout(predicate::str::contains("\"conductivity_converged\": true"));
}

#[test]
fn cli_reports_invalid_json_for_sample_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--algo").arg("3").arg("--sample-json").arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --sample-json"));
}

#[test]
fn cli_reports_missing_algorithm_in_document() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--input").arg("-").write_stdin(r#"{"sample": {"v1": 35.0}}"#);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing algorithm"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}

#[test]
fn cli_reports_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seawater_rs");
    cmd.arg("--input").arg(&missing);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}
