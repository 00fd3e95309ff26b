use std::process::Command;
use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_lcsdelta").to_string()
}

#[test]
fn cli_diff_restore_roundtrip() {
    let dir = tempdir().unwrap();
    let old = dir.path().join("old.bin");
    let new = dir.path().join("new.bin");
    let diff = dir.path().join("delta.diff");
    let output = dir.path().join("output.bin");

    std::fs::write(&old, b"abcde-12345-abcde-XYZ").unwrap();
    std::fs::write(&new, b"abcde-qrs-abcde-XYZ").unwrap();

    let st = Command::new(bin())
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .arg(&diff)
        .status()
        .unwrap();
    assert!(st.success());

    let st = Command::new(bin())
        .arg("restore")
        .arg(&old)
        .arg(&diff)
        .arg(&output)
        .status()
        .unwrap();
    assert!(st.success());
    assert_eq!(
        std::fs::read(&output).unwrap(),
        std::fs::read(&new).unwrap()
    );
}

#[test]
fn cli_refuses_to_overwrite_without_force() {
    let dir = tempdir().unwrap();
    let old = dir.path().join("old.bin");
    let new = dir.path().join("new.bin");
    let diff = dir.path().join("delta.diff");
    std::fs::write(&old, b"aXbYc").unwrap();
    std::fs::write(&new, b"aPbQQc").unwrap();
    std::fs::write(&diff, b"keep me").unwrap();

    let st = Command::new(bin())
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .arg(&diff)
        .status()
        .unwrap();
    assert!(!st.success());
    assert_eq!(std::fs::read(&diff).unwrap(), b"keep me");

    let st = Command::new(bin())
        .arg("--force")
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .arg(&diff)
        .status()
        .unwrap();
    assert!(st.success());
    assert_eq!(std::fs::read(&diff).unwrap(), b"1 1 1P 3 1 2QQ");
}

#[test]
fn cli_restore_rejects_malformed_diff() {
    let dir = tempdir().unwrap();
    let old = dir.path().join("old.bin");
    let diff = dir.path().join("bad.diff");
    let output = dir.path().join("out.bin");
    std::fs::write(&old, b"abcdef").unwrap();
    std::fs::write(&diff, b"-1 0 0").unwrap();

    let out = Command::new(bin())
        .arg("restore")
        .arg(&old)
        .arg(&diff)
        .arg(&output)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("malformed"));
    assert!(!output.exists());
}

#[test]
fn cli_json_stats() {
    let dir = tempdir().unwrap();
    let old = dir.path().join("old.bin");
    let new = dir.path().join("new.bin");
    let diff = dir.path().join("delta.diff");
    std::fs::write(&old, b"The quick brown fox").unwrap();
    std::fs::write(&new, b"The quick red fox").unwrap();

    let out = Command::new(bin())
        .arg("--json")
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .arg(&diff)
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    let json: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(json["command"], "diff");
    assert_eq!(json["records"], 2);
    assert_eq!(json["common"], 15);
}

#[test]
fn cli_records_lists_records() {
    let dir = tempdir().unwrap();
    let diff = dir.path().join("delta.diff");
    std::fs::write(&diff, b"1 1 1P 3 1 2QQ").unwrap();

    let out = Command::new(bin()).arg("records").arg(&diff).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("records: 2"));
    assert!(stdout.contains("\"QQ\""));
}

#[test]
fn cli_config_works() {
    let out = Command::new(bin()).arg("config").output().unwrap();
    assert!(out.status.success());
}
