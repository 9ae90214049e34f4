use assert_cmd::Command;
use predicates::str::contains;

fn gate_sim() -> Command {
    Command::cargo_bin("gate-sim").expect("binary should build")
}

#[test]
fn summary_run_reports_the_headline_metrics() {
    let mut cmd = gate_sim();
    cmd.args([
        "--gates",
        "4",
        "--fans",
        "500",
        "--dist",
        "uniform",
        "--start",
        "-60",
        "--end",
        "0",
        "--seed",
        "42",
        "--format",
        "summary",
    ]);
    cmd.assert()
        .success()
        .stdout(contains("Summary:\n"))
        .stdout(contains("total fans: 500\n"))
        .stdout(contains("inside by kickoff: "))
        .stdout(contains("missed kickoff: "))
        .stdout(contains("last entry: "))
        .stdout(contains("lane changes: 0\n"))
        .stdout(contains("avg wait: "));
}

#[test]
fn human_format_includes_the_wait_breakdown() {
    let mut cmd = gate_sim();
    cmd.args(["--fans", "800", "--impatient", "--seed", "3"]);
    cmd.assert()
        .success()
        .stdout(contains("Timeline:\n"))
        .stdout(contains("frames: 181\n"))
        .stdout(contains("peak arrivals: "))
        .stdout(contains("Waits:\n"))
        .stdout(contains("patient: "))
        .stdout(contains("impatient: "))
        .stdout(contains("switched: "))
        .stdout(contains("season ticket: "))
        .stdout(contains("Summary:\n"));
}

#[test]
fn ultras_and_overload_grow_the_crowd() {
    let mut cmd = gate_sim();
    cmd.args([
        "--fans", "1000", "--ultras", "--overload", "--seed", "1", "--format", "summary",
    ]);
    cmd.assert()
        .success()
        .stdout(contains("total fans: 3500\n"));
}

#[test]
fn identical_seeds_produce_identical_output() {
    let run = |seed: &str| {
        let mut cmd = gate_sim();
        cmd.args([
            "--gates",
            "3",
            "--fans",
            "400",
            "--impatient",
            "--seed",
            seed,
            "--format",
            "json",
        ]);
        cmd.output().expect("binary should run")
    };

    let first = run("7");
    let second = run("7");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let third = run("8");
    assert_ne!(first.stdout, third.stdout);
}

#[test]
fn json_format_emits_the_full_result() {
    let mut cmd = gate_sim();
    cmd.args(["--fans", "400", "--seed", "5", "--format", "json"]);
    let output = cmd.output().expect("binary should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let frames = value["timelineData"].as_array().expect("timeline array");
    assert_eq!(frames.len(), 181);
    assert_eq!(frames[0]["time"], -120);
    assert_eq!(frames[180]["time"], 60);
    assert_eq!(value["stats"]["totalFans"], 400);
    assert!(value["stats"]["insideByKickoff"].is_number());
    assert!(frames[0]["gates"].is_array());
}
