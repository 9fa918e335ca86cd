//! End-to-end tests running the `tsheet` binary.
//!
//! Each test runs with an isolated HOME so no user config is picked up.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn tsheet_binary() -> String {
    env!("CARGO_BIN_EXE_tsheet").to_string()
}

fn tsheet(home: &Path) -> Command {
    let mut cmd = Command::new(tsheet_binary());
    cmd.env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_duration_of_valid_range() {
    let temp = TempDir::new().unwrap();
    let output = tsheet(temp.path())
        .args(["duration", "09:00", "17:00"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "09:00-17:00  08:00 (480 min)\n");
}

#[test]
fn test_duration_rejects_equal_bounds() {
    let temp = TempDir::new().unwrap();
    let output = tsheet(temp.path())
        .args(["duration", "09:00", "09:00"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("End time must be after start time"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_overlap_adjacent_and_partial() {
    let temp = TempDir::new().unwrap();
    let adjacent = tsheet(temp.path())
        .args(["overlap", "09:00-12:00", "12:00-17:00"])
        .output()
        .unwrap();
    assert_eq!(stdout(&adjacent), "no overlaps\n");

    let partial = tsheet(temp.path())
        .args(["overlap", "09:00-14:00", "12:00-18:00"])
        .output()
        .unwrap();
    assert_eq!(stdout(&partial), "overlap: 09:00-14:00 and 12:00-18:00\n");
}

#[test]
fn test_shift_accepts_negative_minutes() {
    let temp = TempDir::new().unwrap();
    let output = tsheet(temp.path())
        .args(["shift", "00:05", "-10"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "23:55\n");
}

#[test]
fn test_shift_by_largest_delta_wraps() {
    let temp = TempDir::new().unwrap();
    let output = tsheet(temp.path())
        .args(["shift", "10:00", "9223372036854775807"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "04:07\n");
}

#[test]
fn test_round_reads_interval_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("custom.toml");
    std::fs::write(&config_path, "round_interval_minutes = 30\n").unwrap();

    let output = tsheet(temp.path())
        .arg("--config")
        .arg(&config_path)
        .args(["round", "23:45"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "00:00\n");
}

#[test]
fn test_round_reads_interval_from_env() {
    let temp = TempDir::new().unwrap();
    let output = tsheet(temp.path())
        .env("TSHEET_ROUND_INTERVAL_MINUTES", "60")
        .args(["round", "10:29"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "10:00\n");
}

#[test]
fn test_progress_from_stdin() {
    let temp = TempDir::new().unwrap();
    let mut child = tsheet(temp.path())
        .args(["progress", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(
            br#"[{"type":"duration","durationMinutes":240},{"type":"range","start":"09:00","end":"12:00"}]"#,
        )
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Total:    07:00\nTarget:   08:00\nProgress: 88%\nMissing:  01:00\n"
    );
}

#[test]
fn test_days_counts_inclusive_span() {
    let temp = TempDir::new().unwrap();
    let output = tsheet(temp.path())
        .args(["days", "2025-03-10", "2025-03-10"])
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "1\n");
}

#[test]
fn test_report_uses_configured_weekend() {
    let temp = TempDir::new().unwrap();
    let records = temp.path().join("records.json");
    std::fs::write(&records, "{}").unwrap();
    let config_dir = temp.path().join(".config/tsheet");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "weekend_days = [\"Sat\", \"Sun\"]\n",
    )
    .unwrap();

    // Mar 14, 2025 is a Friday; Mar 15 a Saturday.
    let output = tsheet(temp.path())
        .arg("report")
        .arg(&records)
        .args(["--from", "2025-03-14", "--to", "2025-03-15"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("2025-03-14  missing"), "got: {text}");
    assert!(lines[1].starts_with("2025-03-15  weekend"), "got: {text}");
}
