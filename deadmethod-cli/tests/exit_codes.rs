//! End-to-end exit code contract of the deadmethod binary:
//! 0 clean, 1 warnings found, failure on a bad explicit config.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

const UNUSED_UNIT: &str = r#"{
    "name": "box.cpp",
    "decls": [{
        "kind": "class",
        "name": "Box",
        "has_definition": true,
        "members": [
            { "name": "size", "access": "private", "body": [] },
            { "name": "grow", "access": "public", "body": [] }
        ]
    }]
}"#;

const CLEAN_UNIT: &str = r#"{
    "name": "point.cpp",
    "decls": [{
        "kind": "class",
        "name": "Point",
        "has_definition": true,
        "members": [
            { "name": "x", "access": "public", "body": [] }
        ]
    }]
}"#;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("deadmethod_exit_{}", tag));
    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn deadmethod() -> Command {
    Command::new(env!("CARGO_BIN_EXE_deadmethod"))
}

#[test]
fn test_clean_tree_exits_zero() {
    let dir = temp_dir("clean");
    fs::write(dir.join("point.json"), CLEAN_UNIT).unwrap();

    let status = deadmethod().arg(&dir).status().unwrap();
    assert_eq!(status.code(), Some(0));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_warnings_exit_one() {
    let dir = temp_dir("warnings");
    fs::write(dir.join("box.json"), UNUSED_UNIT).unwrap();

    let output = deadmethod().arg(&dir).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Box::size"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = temp_dir("badconfig");
    fs::write(dir.join("point.json"), CLEAN_UNIT).unwrap();

    let status = deadmethod()
        .arg("--config")
        .arg(dir.join("nope.toml"))
        .arg(&dir)
        .status()
        .unwrap();
    assert!(!status.success());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_explicit_config_enables_templates() {
    let dir = temp_dir("tplconfig");
    fs::write(
        dir.join("pair.json"),
        r#"{
            "name": "pair.cpp",
            "decls": [{
                "kind": "class",
                "name": "Pair",
                "has_definition": true,
                "members": [
                    { "name": "swap", "access": "private", "is_template": true, "body": [] }
                ]
            }]
        }"#,
    )
    .unwrap();
    let cfg = dir.join("custom.toml");
    fs::write(&cfg, "[analysis]\ninclude_templates = true\n").unwrap();

    // Templates are skipped without the config
    let off = deadmethod().arg(&dir).status().unwrap();
    assert_eq!(off.code(), Some(0));

    let on = deadmethod()
        .arg("--config")
        .arg(&cfg)
        .arg(&dir)
        .status()
        .unwrap();
    assert_eq!(on.code(), Some(1));

    fs::remove_dir_all(&dir).ok();
}
