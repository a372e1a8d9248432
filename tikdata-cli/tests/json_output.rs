// Runs the provisioning binary and checks what lands on each stream

use std::process::Command;

use tempfile::TempDir;

fn provision(temp: &TempDir, extra: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tikdata-provision"))
        .current_dir(temp.path())
        .arg("--database")
        .arg(temp.path().join("tikData.db"))
        .args(extra)
        .env("RUST_LOG", "tikdata_db=info")
        .env_remove("TIKDATA_DATABASE_PATH")
        .env_remove("TIKDATA_JOURNAL_MODE")
        .env_remove("TIKDATA_EXPORT_DIR")
        .output()
        .expect("Failed to run tikdata-provision")
}

#[test]
fn test_json_report_is_the_only_stdout() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let output = provision(&temp, &["--json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is one JSON document");
    assert_eq!(report["missing"], serde_json::json!([]));
    assert_eq!(report["inventory"]["views"].as_array().map(Vec::len), Some(12));

    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    assert!(stderr.contains("Creating database"));
    assert!(!stderr.contains('\x1b'), "log colours written to a pipe");
}

#[test]
fn test_text_summary_keeps_logs_on_stdout() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let output = provision(&temp, &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert!(stdout.contains("Creating database"));
    assert!(stdout.contains("SUCCESS: Database created"));
    assert!(!stdout.contains('\x1b'));
}
