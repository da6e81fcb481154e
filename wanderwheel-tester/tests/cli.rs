use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "wanderwheel-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_wanderwheel-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("uniformity"));
    assert!(content.contains("sub-threshold"));
}

#[test]
fn cli_end_to_end_json_report() {
    let exe = env!("CARGO_BIN_EXE_wanderwheel-tester");
    let output_path = temp_path("json");
    let output = Command::new(exe)
        .args([
            "--scenarios",
            "end-to-end,sub-threshold",
            "--seeds",
            "1,lisbon",
            "--rounds",
            "50",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wanderwheel Logic Tester"));

    let content = std::fs::read_to_string(output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(report["total"], 4);
    assert_eq!(report["passed"], 4);
}

#[test]
fn cli_rejects_bad_seed() {
    let exe = env!("CARGO_BIN_EXE_wanderwheel-tester");
    let output = Command::new(exe)
        .args(["--scenarios", "end-to-end", "--seeds", "1.5"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("neither a number nor a word"));
}
