use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn satori_cli() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo_bin!("satori-cli"))
}

#[test]
fn cli_parse_matches_golden_tree() {
    let root = repo_root();
    let fixture = root
        .join("fixtures")
        .join("markup")
        .join("mention_and_style.satori");
    assert!(fixture.exists(), "fixture missing: {}", fixture.display());

    let exe = assert_cmd::cargo_bin!("satori-cli");
    let output = Command::new(exe)
        .current_dir(&root)
        .args(["parse", fixture.to_string_lossy().as_ref()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let actual: serde_json::Value = serde_json::from_slice(&output).expect("parse stdout");
    let golden = fs::read_to_string(fixture.with_extension("golden.json")).expect("read golden");
    let expected: serde_json::Value = serde_json::from_str(&golden).expect("parse golden");
    assert_eq!(actual, expected);
}

#[test]
fn cli_normalize_reads_stdin() {
    satori_cli()
        .arg("normalize")
        .write_stdin(r#"<at id="1"/> a &amp; b<strong>x</strong>"#)
        .assert()
        .success()
        .stdout(r#"<at id="1"/> a &amp; b<b>x</b>"#);
}

#[test]
fn cli_elements_prints_tagged_json() {
    let output = satori_cli()
        .args(["elements", "-"])
        .write_stdin("<br/>")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let actual: serde_json::Value = serde_json::from_slice(&output).expect("parse stdout");
    assert_eq!(actual, serde_json::json!([{ "element": "br" }]));
}

#[test]
fn cli_strict_missing_attribute_fails() {
    let assert = satori_cli()
        .arg("elements")
        .write_stdin("<sharp/>")
        .assert()
        .code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(
        stderr.contains("missing required attribute `id`"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn cli_lenient_missing_attribute_succeeds() {
    satori_cli()
        .args(["normalize", "--lenient"])
        .write_stdin("<sharp/>")
        .assert()
        .success()
        .stdout(r#"<sharp id=""/>"#);
}

#[test]
fn cli_normalize_reads_path_argument() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("note.satori");
    fs::write(&input, "<em>a</em><x:y k/>").expect("write input");

    satori_cli()
        .args(["normalize", input.to_string_lossy().as_ref()])
        .assert()
        .success()
        .stdout("<i>a</i><x:y k/>");
}

#[test]
fn cli_missing_input_file_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let missing = tmp.path().join("missing.satori");
    satori_cli()
        .args(["parse", missing.to_string_lossy().as_ref()])
        .assert()
        .code(1);
}

#[test]
fn cli_unknown_flag_is_usage_error() {
    satori_cli().arg("--bogus").assert().code(2);
}
