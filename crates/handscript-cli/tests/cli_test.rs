use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join("expressions").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn run_json(args: &[&str]) -> Value {
    let exe = assert_cmd::cargo_bin!("handscript-cli");
    let out = Command::new(exe).args(args).assert().success();
    serde_json::from_slice(&out.get_output().stdout).expect("stdout is JSON")
}

#[test]
fn cli_plan_for_fixture() {
    let path = fixture("quadratic.json");
    let plan = run_json(&["plan", "--seed", "3", path.to_string_lossy().as_ref()]);

    let instructions = plan["instructions"].as_array().expect("instructions");
    assert!(!instructions.is_empty());
    assert_eq!(instructions[0]["type"], "stroke");
    assert!(plan["total_duration_ms"].as_f64().unwrap() > 0.0);
    assert_eq!(plan["bounds"]["x"], 100.0);
}

#[test]
fn cli_layout_lists_positioned_symbols() {
    let path = fixture("integral.json");
    let layout = run_json(&["layout", "--jitter", "0", path.to_string_lossy().as_ref()]);

    let chars: String = layout["symbols"]
        .as_array()
        .expect("symbols")
        .iter()
        .map(|s| s["char"].as_str().unwrap())
        .collect();
    assert_eq!(chars, "∫01x2dx=13");
    assert_eq!(layout["decorations"].as_array().unwrap().len(), 1);
}

#[test]
fn cli_frames_end_with_the_full_drawing() {
    let path = fixture("nested.json");
    let path = path.to_string_lossy();
    let frames = run_json(&["frames", "--fps", "20", "--seed", "1", path.as_ref()]);
    let plan = run_json(&["plan", "--seed", "1", path.as_ref()]);

    let frames = frames.as_array().expect("frames");
    let last = frames.last().expect("at least one frame");
    assert_eq!(last["time_ms"], plan["total_duration_ms"]);
    let strokes = plan["instructions"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|i| i["type"] == "stroke")
        .count();
    assert_eq!(last["strokes"].as_array().unwrap().len(), strokes);
    assert!(frames[0]["strokes"].as_array().unwrap().is_empty());
}

#[test]
fn cli_reads_stdin_and_config_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = tmp.path().join("config.json");
    fs::write(&config, r#"{ "font_size": 20, "jitter": 0, "position": [0, 0] }"#)
        .expect("write config");

    let exe = assert_cmd::cargo_bin!("handscript-cli");
    let out = Command::new(exe)
        .args(["state", "--time", "0", "--config", config.to_string_lossy().as_ref()])
        .write_stdin(r#"{ "type": "text", "value": "1" }"#)
        .assert()
        .success();
    let state: Value = serde_json::from_slice(&out.get_output().stdout).unwrap();
    assert_eq!(state, Value::Array(vec![]));
}

#[test]
fn cli_state_defaults_to_the_complete_drawing() {
    let path = fixture("integral.json");
    let path = path.to_string_lossy();
    let state = run_json(&["state", "--jitter", "0", path.as_ref()]);
    let plan = run_json(&["plan", "--jitter", "0", path.as_ref()]);

    let strokes = plan["instructions"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|i| i["type"] == "stroke")
        .count();
    assert!(strokes > 0);
    assert_eq!(state.as_array().expect("state").len(), strokes);
}

#[test]
fn cli_loads_extra_glyphs() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let glyphs = tmp.path().join("glyphs.json");
    fs::write(
        &glyphs,
        r#"[{ "char": "ℓ", "strokes": [{ "points": [[0.5, 0.0], [0.5, 1.0]] }],
              "baseline": 0.85, "aspect_ratio": 0.4, "advance": 0.5 }]"#,
    )
    .expect("write glyphs");
    let tree = tmp.path().join("tree.json");
    fs::write(&tree, r#"{ "type": "text", "value": "ℓ" }"#).expect("write tree");

    let layout = run_json(&[
        "layout",
        "--glyphs",
        glyphs.to_string_lossy().as_ref(),
        tree.to_string_lossy().as_ref(),
    ]);
    assert_eq!(layout["symbols"][0]["char"], "ℓ");
    assert_eq!(layout["symbols"][0]["height"], 40.0);
}

#[test]
fn cli_exit_codes() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let empty = tmp.path().join("empty.json");
    fs::write(&empty, "  \n").expect("write empty");

    let exe = assert_cmd::cargo_bin!("handscript-cli");
    Command::new(exe)
        .arg(empty.to_string_lossy().as_ref())
        .assert()
        .code(3);

    let exe = assert_cmd::cargo_bin!("handscript-cli");
    Command::new(exe).arg("--bogus").assert().code(2);

    let exe = assert_cmd::cargo_bin!("handscript-cli");
    Command::new(exe)
        .args(["plan", "--speed", "-1"])
        .write_stdin(r#"{ "type": "text", "value": "x" }"#)
        .assert()
        .code(1);
}
