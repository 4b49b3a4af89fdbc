mod common;

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("webp-squeeze").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--on-existing overwrite"));
}

#[test]
fn test_cli_short_help() {
    cmd().arg("-h").assert().success();
}

#[test]
fn test_no_arguments_prints_usage_and_touches_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("photo.png").write_binary(b"unchanged").unwrap();

    cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("Starting conversion").not());

    let entries = std::fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(entries, 1);
    temp.child("photo.png").assert("unchanged");
}

#[test]
fn test_nonexistent_path_fails_cleanly() {
    let temp = assert_fs::TempDir::new().unwrap();

    cmd()
        .arg(temp.child("missing.jpg").path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_single_png_is_converted() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_png(temp.path(), "photo.png", 128, 96);

    cmd()
        .arg(temp.child("photo.png").path())
        .arg("75")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting conversion with quality 75%"))
        .stdout(predicate::str::contains("Successful conversion"))
        .stdout(predicate::str::contains("Size reduction:"))
        .stdout(predicate::str::contains("Conversion process completed."));

    temp.child("photo.webp").assert(predicate::path::exists());
    temp.child("photo.png").assert(predicate::path::exists());
}

#[test]
fn test_non_numeric_quality_falls_back_to_default() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_png(temp.path(), "photo.png", 32, 32);

    cmd()
        .arg(temp.path())
        .arg("best")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting conversion with quality 80%"));
}

#[test]
fn test_out_of_range_quality_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_png(temp.path(), "photo.png", 32, 32);

    cmd()
        .arg(temp.child("photo.png").path())
        .arg("150")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid quality value: 150"));

    temp.child("photo.webp").assert(predicate::path::missing());
}

#[test]
fn test_ineligible_file_is_skipped() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("anim.gif").write_binary(b"GIF89a").unwrap();

    cmd()
        .arg(temp.child("anim.gif").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected file is not a JPG or PNG image."));

    temp.child("anim.webp").assert(predicate::path::missing());
}

#[test]
fn test_fake_image_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_fake_image(temp.path(), "test.jpg");

    cmd()
        .arg(temp.child("test.jpg").path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_extra_positionals_are_ignored() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_nested_directory_structure(temp.path());

    let stdout = stdout_of(cmd().arg(temp.path()).args(["80", "false", "extra", "-x"]));

    assert_eq!(stdout.matches("Conversion results in directory").count(), 1);
    temp.child("one.webp").assert(predicate::path::exists());
    temp.child("nested/three.webp").assert(predicate::path::missing());
}

#[test]
fn test_unknown_flag_exits_with_one() {
    let temp = assert_fs::TempDir::new().unwrap();

    cmd()
        .arg(temp.path())
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_directory_error_prints_no_summary_for_aborted_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_png(temp.path(), "good.png", 32, 32);
    common::create_fake_image(temp.path(), "broken.jpg");

    let output = cmd().arg(temp.path()).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout.contains("Conversion results"));
    assert!(!stdout.contains("Conversion process completed."));
    assert!(stderr.contains("broken.jpg"));
    // The walker reports the failure once, not once per level it unwinds.
    assert_eq!(stderr.matches("Error processing directory").count(), 1);
    temp.child("broken.webp").assert(predicate::path::missing());
}

#[test]
fn test_directory_non_recursive() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_nested_directory_structure(temp.path());

    let stdout = stdout_of(cmd().arg(temp.path()).arg("80").arg("false"));

    assert_eq!(stdout.matches("Conversion results in directory").count(), 1);
    assert!(stdout.contains("Number of converted files: 2"));
    temp.child("one.webp").assert(predicate::path::exists());
    temp.child("nested/three.webp").assert(predicate::path::missing());
}

#[test]
fn test_directory_recursive_prints_one_summary_per_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_nested_directory_structure(temp.path());

    let stdout = stdout_of(cmd().arg(temp.path()));

    // Nested totals are not folded into the root's count.
    assert_eq!(stdout.matches("Conversion results in directory").count(), 2);
    assert!(stdout.contains("Number of converted files: 2"));
    assert!(stdout.contains("Number of converted files: 1"));
    assert!(!stdout.contains("Number of converted files: 3"));
    temp.child("nested/three.webp").assert(predicate::path::exists());
}

#[test]
fn test_directory_tree_summary() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_nested_directory_structure(temp.path());

    let stdout = stdout_of(cmd().arg(temp.path()).args(["--summary", "tree"]));

    assert_eq!(stdout.matches("Conversion results in directory").count(), 1);
    assert!(stdout.contains("Number of converted files: 3"));
}

#[test]
fn test_empty_directory_prints_no_summary() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("readme.txt").write_str("hello").unwrap();

    cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion results").not());
}

#[test]
fn test_existing_webp_is_not_overwritten_by_default() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_png(temp.path(), "photo.png", 32, 32);
    temp.child("photo.webp").write_binary(b"keep me").unwrap();

    cmd()
        .arg(temp.child("photo.png").path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    temp.child("photo.webp").assert("keep me");
}

#[test]
fn test_existing_webp_overwrite_and_rename() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_png(temp.path(), "photo.png", 64, 64);
    temp.child("photo.webp").write_binary(b"old").unwrap();

    cmd()
        .arg(temp.child("photo.png").path())
        .args(["--on-existing", "rename"])
        .assert()
        .success();
    temp.child("photo.webp").assert("old");
    temp.child("photo-1.webp").assert(predicate::path::exists());

    cmd()
        .arg(temp.child("photo.png").path())
        .args(["--on-existing", "overwrite"])
        .assert()
        .success();
    let bytes = std::fs::read(temp.child("photo.webp").path()).unwrap();
    assert_eq!(&bytes[8..12], b"WEBP");
}

#[test]
fn test_quiet_suppresses_progress_output() {
    let temp = assert_fs::TempDir::new().unwrap();
    common::create_png(temp.path(), "photo.png", 32, 32);

    cmd()
        .arg(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
