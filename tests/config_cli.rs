use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use assert_cmd::Command;
use predicates::str::contains;

fn gate_sim() -> Command {
    Command::cargo_bin("gate-sim").expect("binary should build")
}

fn write_temp_config(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time should be available")
        .as_nanos();
    path.push(format!("gate-sim-config-{}.{}", nanos, extension));
    fs::write(&path, contents).expect("config write should succeed");
    path
}

#[test]
fn config_file_toml_runs() {
    let config = r#"
num_gates = 2
total_fans = 50
season_ticket_percent = 0.0
seed = 9

[distribution]
kind = "uniform"
start = -30.0
end = 0.0
"#;
    let path = write_temp_config(config, "toml");

    let mut cmd = gate_sim();
    cmd.args(["--config", path.to_str().unwrap(), "--format", "summary"]);
    cmd.assert()
        .success()
        .stdout(contains("total fans: 50\n"))
        .stdout(contains("lane changes: 0\n"));
}

#[test]
fn config_file_json_runs() {
    let config = r#"{
  "num_gates": 2,
  "total_fans": 40,
  "season_ticket_percent": 0.0,
  "seed": 3,
  "distribution": {"kind": "uniform", "start": -30.0, "end": 0.0}
}"#;
    let path = write_temp_config(config, "json");

    let mut cmd = gate_sim();
    cmd.args(["--config", path.to_str().unwrap(), "--format", "summary"]);
    cmd.assert().success().stdout(contains("total fans: 40\n"));
}

#[test]
fn flags_override_the_config_file() {
    let config = r#"
num_gates = 2
total_fans = 50

[distribution]
kind = "uniform"
start = -30.0
end = 0.0
"#;
    let path = write_temp_config(config, "toml");

    let mut cmd = gate_sim();
    cmd.args([
        "--config",
        path.to_str().unwrap(),
        "--fans",
        "75",
        "--format",
        "summary",
    ]);
    cmd.assert().success().stdout(contains("total fans: 75\n"));
}

#[test]
fn unsupported_extension_fails() {
    let path = write_temp_config("num_gates: 2", "yaml");

    let mut cmd = gate_sim();
    cmd.args(["--config", path.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: unsupported config format 'yaml'"));
}

#[test]
fn malformed_toml_reports_a_parse_error() {
    let path = write_temp_config("num_gates = \"two\"", "toml");

    let mut cmd = gate_sim();
    cmd.args(["--config", path.to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: failed to parse TOML"));
}
