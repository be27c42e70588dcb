use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const SAMPLE: &str = "cookie,timestamp
AtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00
SAZuXPGUrfbcn5UA,2018-12-09T10:13:00+00:00
5UAVanZf6UtGyKVS,2018-12-09T07:25:00+00:00
AtY0laUfhglK3lC7,2018-12-09T06:19:00+00:00
SAZuXPGUrfbcn5UA,2018-12-08T22:03:00+00:00
4sMM2LxV07bPJzwf,2018-12-08T21:30:00+00:00
fbcn5UAVanZf6UtG,2018-12-08T09:30:00+00:00
4sMM2LxV07bPJzwf,2018-12-07T23:30:00+00:00
";

fn cookiee(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cookiee"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("COOKIEE_FILE")
        .env_remove("COOKIEE_DATE")
        .output()
        .unwrap()
}

fn sample_file(dir: &TempDir) -> String {
    let path = dir.path().join("cookie_log.csv");
    fs::write(&path, SAMPLE).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn prints_winner() {
    let dir = TempDir::new().unwrap();
    let file = sample_file(&dir);
    let out = cookiee(&["-f", &file, "-d", "2018-12-09"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "AtY0laUfhglK3lC7\n");
}

#[test]
fn prints_ties_one_per_line() {
    let dir = TempDir::new().unwrap();
    let file = sample_file(&dir);
    let out = cookiee(&["--file", &file, "--date", "2018-12-08"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "4sMM2LxV07bPJzwf\nSAZuXPGUrfbcn5UA\nfbcn5UAVanZf6UtG\n"
    );
}

#[test]
fn no_match_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let file = sample_file(&dir);
    let out = cookiee(&["-f", &file, "-d", "2018-12-10"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let file = sample_file(&dir);
    let out = cookiee(&["-f", &file, "-d", "2018-12-09", "--format", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["cookies"], serde_json::json!(["AtY0laUfhglK3lC7"]));
    assert_eq!(value["count"], 2);
}

#[test]
fn summary_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    let file = sample_file(&dir);
    let out = cookiee(&["-f", &file, "-d", "2018-12-09", "--summary"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "AtY0laUfhglK3lC7\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("stopped early at line 6"));
}

#[test]
fn missing_options_are_usage_errors() {
    let out = cookiee(&["-d", "2018-12-09"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(!out.stderr.is_empty());
}

#[test]
fn bad_date_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let file = sample_file(&dir);
    let out = cookiee(&["-f", &file, "-d", "2018/12/09"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn missing_file_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.csv");
    let out = cookiee(&["-f", &missing.to_string_lossy(), "-d", "2018-12-09"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("File does not exist"));
}

#[test]
fn unreadable_content_is_runtime_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.csv");
    fs::write(&path, b"A,2018-12-09T10:00:00Z\n\xff\xfe\n").unwrap();
    let out = cookiee(&["-f", &path.to_string_lossy(), "-d", "2018-12-09"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error processing file"));
}
