use assert_cmd::prelude::*;
use serde_json::Value;
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

fn fixture() -> PathBuf {
    let path = repo_root().join("fixtures").join("family").join("berg.json");
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn run_json(args: &[&str]) -> Value {
    let exe = assert_cmd::cargo_bin!("nimloth-cli");
    let output = Command::new(exe)
        .args(args)
        .output()
        .expect("run nimloth-cli");
    assert!(
        output.status.success(),
        "nimloth-cli failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn node_ids(json: &Value) -> Vec<String> {
    json["elements"]["nodes"]
        .as_array()
        .expect("nodes array")
        .iter()
        .map(|n| n["data"]["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn cli_layout_centres_on_the_current_user() {
    let input = fixture();
    let json = run_json(&[
        "layout",
        "--current-user",
        "1",
        input.to_string_lossy().as_ref(),
    ]);

    assert_eq!(json["focal"], 1);
    assert_eq!(
        node_ids(&json),
        vec![
            "person-1",
            "person-2",
            "person-3",
            "person-4",
            "person-5",
            "person-6",
            "marriage-2-3",
        ]
    );

    let nodes = json["elements"]["nodes"].as_array().unwrap();
    assert_eq!(nodes[0]["classes"], "current-user");
    assert_eq!(nodes[2]["data"]["label"], "Johan Erik Berg\n(1959 - 2019)");
    assert_eq!(nodes[3]["data"]["label"], "Greta Berg\n(? - 1999)");
    assert_eq!(nodes[3]["position"]["y"], -300.0);
    assert_eq!(nodes[6]["position"]["y"], -150.0);

    let edges: Vec<&str> = json["elements"]["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["data"]["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        edges,
        vec![
            "edge-mother-2-to-marriage-marriage-2-3",
            "edge-father-3-to-marriage-marriage-2-3",
            "edge-marriage-marriage-2-3-to-child-1",
            "edge-3-mother-4",
            "edge-marriage-marriage-2-3-to-child-5",
            "edge-6-mother-1",
        ]
    );
}

#[test]
fn cli_generations_reads_stdin() {
    let stdin = std::fs::read(fixture()).expect("read fixture");
    let exe = assert_cmd::cargo_bin!("nimloth-cli");
    let output = assert_cmd::Command::new(exe)
        .args(["generations", "--focal", "1", "-"])
        .write_stdin(stdin)
        .output()
        .expect("run nimloth-cli");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["1"], 0);
    assert_eq!(json["2"], 1);
    assert_eq!(json["3"], 1);
    assert_eq!(json["4"], 2);
    assert_eq!(json["5"], 0);
    assert_eq!(json["6"], -1);
    assert!(json.get("7").is_none());
}

#[test]
fn cli_positions_apply_config_and_flag_overrides() {
    let input = fixture();
    let config = repo_root().join("fixtures").join("layout-config.json");
    let json = run_json(&[
        "positions",
        "--focal",
        "1",
        "--config",
        config.to_string_lossy().as_ref(),
        "--vertical-spacing",
        "40",
        input.to_string_lossy().as_ref(),
    ]);

    assert_eq!(json["1"]["x"], -50.0);
    assert_eq!(json["5"]["x"], 50.0);
    assert_eq!(json["2"]["y"], -40.0);
    assert_eq!(json["4"]["y"], -80.0);
    assert_eq!(json["6"]["y"], 40.0);
}

#[test]
fn cli_unknown_focal_shows_everyone() {
    let input = fixture();
    let json = run_json(&["family", "--focal", "99", input.to_string_lossy().as_ref()]);
    assert_eq!(json.as_array().unwrap().len(), 7);
}

#[test]
fn cli_rejects_unknown_flags() {
    let exe = assert_cmd::cargo_bin!("nimloth-cli");
    Command::new(exe)
        .args(["--frobnicate"])
        .assert()
        .code(2);
}

#[test]
fn cli_reports_malformed_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("broken.json");
    std::fs::write(&input, "{ not json").expect("write input");

    let exe = assert_cmd::cargo_bin!("nimloth-cli");
    Command::new(exe)
        .args(["layout", input.to_string_lossy().as_ref()])
        .assert()
        .code(1);
}
