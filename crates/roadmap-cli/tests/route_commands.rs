use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Chain 1 - 2 - 3 along the equator, plus an unconnected waypoint 4.
const KEY_POINTS: &str = "1 0.0 0.0\n2 0.0 0.001\n3 0.0 0.002\n4 1.0 1.0\n";
const ROADS: &str = "way 10\noneway 0\nname Main Street\nid 1\nid 2\nid 3\n";

fn write_fixture(dir: &Path, key_points: &str, roads: &str) {
    fs::write(dir.join("keyPoints.txt"), key_points).expect("write key points");
    fs::write(dir.join("roads.txt"), roads).expect("write roads");
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("roadmap-cli");
    cmd.env_remove("ROADMAP_KEY_POINTS")
        .env_remove("ROADMAP_ROADS")
        .env_remove("ROADMAP_DATA_DIR")
        .env("RUST_LOG", "warn");
    cmd
}

fn prepare_command() -> (Command, TempDir) {
    let temp_dir = tempdir().expect("create temp dir");
    write_fixture(temp_dir.path(), KEY_POINTS, ROADS);
    let mut cmd = cli();
    cmd.arg("--data-dir").arg(temp_dir.path());
    (cmd, temp_dir)
}

#[test]
fn prints_route_between_waypoints() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["1", "3"]);

    cmd.assert()
        .success()
        .stdout("Road from 1 to 3:\n\n1 2 3\n");
}

#[test]
fn builds_graph_without_query() {
    let (mut cmd, _temp) = prepare_command();

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn source_without_destination_is_a_usage_error() {
    let (mut cmd, _temp) = prepare_command();
    cmd.arg("1");

    cmd.assert().failure().code(2);
}

#[test]
fn unreachable_destination_fails_cleanly() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["1", "4"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no route found between 1 and 4"));
}

#[test]
fn unknown_waypoint_is_reported() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["1", "99"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown waypoint: 99"));
}

#[test]
fn missing_input_file_is_fatal() {
    let temp_dir = tempdir().expect("create temp dir");
    let mut cmd = cli();
    cmd.arg("--data-dir").arg(temp_dir.path()).args(["1", "2"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load road map"))
        .stderr(predicate::str::contains("could not be opened"));
}

#[test]
fn explicit_file_flags_override_data_dir() {
    let temp_dir = tempdir().expect("create temp dir");
    let points = temp_dir.path().join("points.dat");
    let roads = temp_dir.path().join("ways.dat");
    fs::write(&points, KEY_POINTS).expect("write key points");
    fs::write(&roads, ROADS).expect("write roads");

    let mut cmd = cli();
    cmd.arg("--key-points")
        .arg(&points)
        .arg("--roads")
        .arg(&roads)
        .args(["3", "1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 2 1"));
}

#[test]
fn environment_variables_locate_files() {
    let temp_dir = tempdir().expect("create temp dir");
    write_fixture(temp_dir.path(), KEY_POINTS, ROADS);

    let mut cmd = cli();
    cmd.env("ROADMAP_DATA_DIR", temp_dir.path()).args(["2", "3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 3"));
}

#[test]
fn json_format_outputs_summary() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["--format", "json", "--algorithm", "a-star", "1", "3"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["algorithm"], "a-star");
    assert_eq!(value["hops"], 2);
    assert_eq!(value["steps"][2]["id"], 3);
    assert_eq!(value["steps"][1]["street"], "Main Street");
}

#[test]
fn detailed_format_names_streets() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["--format", "detailed", "--algorithm", "fifo", "1", "2"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("algorithm: fifo"))
        .stdout(predicate::str::contains("via Main Street"));
}

#[test]
fn truncated_input_warns_but_still_routes() {
    let temp_dir = tempdir().expect("create temp dir");
    write_fixture(
        temp_dir.path(),
        "1 0.0 0.0\n2 0.0 0.001\n3 0.0 bogus\n",
        "way 10\nid 1\nid 2\n",
    );

    let mut cmd = cli();
    cmd.arg("--data-dir").arg(temp_dir.path()).args(["1", "2"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 2"))
        .stderr(predicate::str::contains("parse truncated early at line 3"));
}
