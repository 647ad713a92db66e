use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_reports_summary_and_comms() {
    Command::cargo_bin("main")
        .unwrap()
        .args(["--duration", "60", "--log-level", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Mission Summary ---"))
        .stdout(predicate::str::contains("Phase launch reached at"))
        .stdout(predicate::str::contains("[Houston]: Apollo 11, do you read? Over."));
}

#[test]
fn cli_applies_operator_settings_at_liftoff() {
    Command::cargo_bin("main")
        .unwrap()
        .args([
            "--duration",
            "30",
            "--thrust",
            "100",
            "--disable",
            "navigation",
            "--message",
            "Smooth ride so far",
            "--log-level",
            "off",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Apollo 11]: Smooth ride so far"))
        .stdout(predicate::str::contains("Fuel: 40%"));
}

#[test]
fn cli_rejects_unknown_subsystem() {
    Command::cargo_bin("main")
        .unwrap()
        .args(["--disable", "warp-drive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown subsystem"));
}

#[test]
fn cli_reads_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[flight]\norbit_altitude = 5.0").unwrap();

    Command::cargo_bin("main")
        .unwrap()
        .args(["--duration", "20", "--log-level", "off", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Phase orbit reached at"));
}

#[test]
fn cli_reports_bad_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[flight]\ntick_secs = -1.0").unwrap();

    Command::cargo_bin("main")
        .unwrap()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("tick_secs must be a positive number"));
}

#[test]
fn cli_rejects_unrepresentable_duration() {
    Command::cargo_bin("main")
        .unwrap()
        .args(["--duration", "1e300", "--log-level", "off"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration must be a non-negative number"));
}

#[test]
fn cli_parses_log_level_names() {
    Command::cargo_bin("main")
        .unwrap()
        .args(["--duration", "1", "--log-level", "warn"])
        .assert()
        .success();

    Command::cargo_bin("main")
        .unwrap()
        .args(["--log-level", "chatty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'chatty'"));
}

#[test]
fn cli_reports_overflowing_config_period() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[countdown]\nunit_secs = 1e30").unwrap();

    Command::cargo_bin("main")
        .unwrap()
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("countdown.unit_secs"));
}
