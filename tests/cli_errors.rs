use assert_cmd::Command;
use predicates::str::contains;

fn gate_sim() -> Command {
    Command::cargo_bin("gate-sim").expect("binary should build")
}

#[test]
fn zero_gates_fails() {
    let mut cmd = gate_sim();
    cmd.args(["--gates", "0", "--fans", "100"]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: gates must be greater than 0"));
}

#[test]
fn zero_fans_fails() {
    let mut cmd = gate_sim();
    cmd.args(["--fans", "0"]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: total fans must be greater than 0"));
}

#[test]
fn priority_gates_beyond_total_fail() {
    let mut cmd = gate_sim();
    cmd.args(["--gates", "3", "--priority-gates", "4", "--fans", "100"]);
    cmd.assert().failure().stderr(contains(
        "Error: priority gates must not exceed total gates (4 > 3)",
    ));
}

#[test]
fn season_percent_out_of_range_fails() {
    let mut cmd = gate_sim();
    cmd.args(["--season-percent", "140", "--fans", "100"]);
    cmd.assert().failure().stderr(contains(
        "Error: season ticket percent must be between 0 and 100 (got 140)",
    ));
}

#[test]
fn zero_std_dev_fails() {
    let mut cmd = gate_sim();
    cmd.args(["--std-dev", "0", "--fans", "100"]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: standard deviation must be > 0 (got 0)"));
}

#[test]
fn inverted_uniform_window_fails() {
    let mut cmd = gate_sim();
    cmd.args([
        "--dist", "uniform", "--start", "0", "--end", "-10", "--fans", "100",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: uniform window start must not exceed end"));
}

#[test]
fn non_positive_beta_shape_fails() {
    let mut cmd = gate_sim();
    cmd.args(["--dist", "beta", "--alpha", "0", "--fans", "100"]);
    cmd.assert().failure().stderr(contains(
        "Error: beta shape parameters must be > 0 (got alpha=0, beta=2)",
    ));
}

#[test]
fn missing_config_file_fails() {
    let mut cmd = gate_sim();
    cmd.args(["--config", "definitely-missing.toml"]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: failed to read config"));
}

#[test]
fn unknown_format_fails() {
    let mut cmd = gate_sim();
    cmd.args(["--format", "yaml"]);
    cmd.assert().failure().stderr(contains("Error: "));
}
