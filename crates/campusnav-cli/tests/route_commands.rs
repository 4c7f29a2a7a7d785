use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/campus")
        .canonicalize()
        .expect("fixture campus present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("campusnav-cli");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(fixture_path());
    cmd
}

#[test]
fn text_route_lists_numbered_directions() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "library", "--to", "entrance"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Main Library -> Main Entrance (730m, 9 min, 3 hops)",
        ))
        .stdout(predicate::str::contains("1. Start at Main Library"))
        .stdout(predicate::str::contains("2. Head south toward Clock Tower"))
        .stdout(predicate::str::contains("4. Arrive at Main Entrance"));
}

#[test]
fn accessible_flag_takes_the_long_way() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "Main Library",
        "--to",
        "North Parking",
        "--accessible",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("765m, 10 min, 3 hops, accessible paths only"))
        .stdout(predicate::str::contains("Head north toward Science Building"));
}

#[test]
fn scan_algorithm_is_supported() {
    let mut cmd = prepare_command();
    cmd.args([
        "--format",
        "rich",
        "route",
        "--from",
        "library",
        "--to",
        "science",
        "--algorithm",
        "scan",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("algorithm: `scan`"))
        .stdout(predicate::str::contains("Path: Main Library (`main-library`)"));
}

#[test]
fn compact_format_outputs_location_names() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "compact", "route", "--from", "library", "--to", "tower"]);

    cmd.assert()
        .success()
        .stdout(predicate::eq(
            "Main Library -> Clock Tower: 160m / 2 min\nMain Library\nClock Tower\n",
        ));
}

#[test]
fn json_format_is_machine_readable() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "route", "--from", "library", "--to", "entrance"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["distance_m"], 730.0);
    assert_eq!(value["duration_min"], 9);
    assert_eq!(value["hops"], 3);
    assert_eq!(value["goal"]["id"], "main-entrance");
    assert_eq!(value["directions"][0], "Start at Main Library");
}

#[test]
fn unknown_location_error_is_friendly() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Main Libary", "--to", "tower"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown location 'Main Libary'."))
        .stderr(predicate::str::contains("Did you mean"))
        .stderr(predicate::str::contains("'Main Library'"));
}

#[test]
fn route_not_found_error_suggests_next_steps() {
    let mut cmd = prepare_command();
    cmd.args([
        "route",
        "--from",
        "library",
        "--to",
        "boathouse",
        "--accessible",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "No route found between Main Library and Boathouse.",
        ))
        .stderr(predicate::str::contains("without --accessible"));
}

#[test]
fn same_start_and_destination_fails() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "clock tower", "--to", "Clock Tower"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "'Clock Tower' is both the start and the destination",
        ));
}

#[test]
fn logs_stay_off_stdout() {
    let mut cmd = cargo_bin_cmd!("campusnav-cli");
    cmd.env("RUST_LOG", "info")
        .args(["--format", "json", "--data-dir"])
        .arg(fixture_path())
        .args(["route", "--from", "library", "--to", "tower"]);

    let output = cmd.assert().success().get_output().clone();
    serde_json::from_slice::<serde_json::Value>(&output.stdout).expect("stdout is pure json");
    assert!(String::from_utf8_lossy(&output.stderr).contains("route planned"));
}
