use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_tape(dir: &TempDir, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join("tape.bin");
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_help_lists_flags() {
    cargo_bin_cmd!("punchtape")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--export"))
        .stdout(predicate::str::contains("--info"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("punchtape")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("punchtape"));
}

#[test]
fn test_no_arguments_prints_usage() {
    cargo_bin_cmd!("punchtape")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_positional_is_usage_error() {
    cargo_bin_cmd!("punchtape")
        .args(["a.bin", "b.bin"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_export_and_info_conflict() {
    cargo_bin_cmd!("punchtape")
        .args(["--info", "--export", "out.png", "tape.bin"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.bin");

    cargo_bin_cmd!("punchtape")
        .arg("--info")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_empty_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_tape(&dir, &[]);

    cargo_bin_cmd!("punchtape")
        .arg("--info")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_info_reports_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = write_tape(&dir, &[0xFF, 0x00, 0x80]);

    cargo_bin_cmd!("punchtape")
        .arg("--info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("bytes: 3"))
        .stdout(predicate::str::contains("hole pitch: 15 px"))
        .stdout(predicate::str::contains("tape width: 145 px"))
        .stdout(predicate::str::contains("tape height: 170 px"));
}

#[test]
fn test_config_overrides_geometry() {
    let dir = TempDir::new().unwrap();
    let path = write_tape(&dir, &[0xFF, 0x00, 0x80]);
    let config = dir.path().join("punchtape.toml");
    fs::write(&config, "[geometry]\nmargin = 10\n").unwrap();

    cargo_bin_cmd!("punchtape")
        .arg("--config")
        .arg(&config)
        .arg("--info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("tape width: 65 px"));
}

#[test]
fn test_bad_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_tape(&dir, &[0x01]);
    let config = dir.path().join("punchtape.toml");
    fs::write(&config, "[viewer]\npixels_per_dot = 0\n").unwrap();

    cargo_bin_cmd!("punchtape")
        .arg("--config")
        .arg(&config)
        .arg("--info")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("pixels_per_dot"));
}

#[test]
fn test_oversized_geometry_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_tape(&dir, &[0x01]);
    let config = dir.path().join("punchtape.toml");
    fs::write(&config, "[geometry]\nhole_diameter = 9223372036854775807\n").unwrap();

    cargo_bin_cmd!("punchtape")
        .arg("--config")
        .arg(&config)
        .arg("--info")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("hole_diameter"));
}

#[test]
fn test_print_config_needs_no_file() {
    cargo_bin_cmd!("punchtape")
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[geometry]"))
        .stdout(predicate::str::contains("hole_diameter = 12"))
        .stdout(predicate::str::contains("#00cdff"));
}

#[test]
fn test_export_writes_png() {
    let dir = TempDir::new().unwrap();
    let path = write_tape(&dir, &[0xFF, 0x00, 0x80]);
    let png = dir.path().join("tape.png");

    cargo_bin_cmd!("punchtape")
        .arg("--export")
        .arg(&png)
        .arg(&path)
        .assert()
        .success();

    let image = image::open(&png).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (145, 170));
    // Paper color in the corner, a punched 0x80 hole at the first column.
    assert_eq!(image.get_pixel(0, 0).0, [0x00, 0xcd, 0xff]);
    assert_eq!(image.get_pixel(50, 50).0, [0, 0, 0]);
    // Column 1 (0x00) has no punched holes, so its centers stay paper colored.
    assert_eq!(image.get_pixel(65, 50).0, [0x00, 0xcd, 0xff]);
}

#[test]
fn test_viewer_requires_terminal() {
    let dir = TempDir::new().unwrap();
    let path = write_tape(&dir, &[0x01]);

    cargo_bin_cmd!("punchtape")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requires a terminal"));
}

#[test]
fn test_log_file_is_written() {
    let dir = TempDir::new().unwrap();
    let path = write_tape(&dir, &[0x01]);
    let log = dir.path().join("punchtape.log");

    cargo_bin_cmd!("punchtape")
        .arg("--log-file")
        .arg(&log)
        .args(["--log-level", "info", "--info"])
        .arg(&path)
        .assert()
        .success();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("tape loaded"));
}
