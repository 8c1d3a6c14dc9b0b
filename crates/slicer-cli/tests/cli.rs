//! Exit codes and messages of the `slicer` binary.
//!
//! Run: cargo test -p slicer-cli --test cli

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn slicer(workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slicer"))
        .current_dir(workdir)
        .arg("--config-dir")
        .arg(workdir.join("config"))
        .args(args)
        .output()
        .unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_path_exits_one() {
    let tmp = TempDir::new().unwrap();
    let output = slicer(tmp.path(), &["CUT"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unknown_keyword_exits_one() {
    let tmp = TempDir::new().unwrap();
    let output = slicer(tmp.path(), &["SPLIT", "x"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn help_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let output = slicer(tmp.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn collect_empty_folder_exits_zero() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("result")).unwrap();

    let output = slicer(tmp.path(), &["COLLECT", "result"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("No subfiles found"));
}

#[test]
fn cut_missing_input_exits_zero() {
    let tmp = TempDir::new().unwrap();

    let output = slicer(tmp.path(), &["CUT", "missing.bin"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("Error opening input file"));
    assert!(!tmp.path().join("result").exists());
}

#[test]
fn cut_then_collect_through_binary() {
    let tmp = TempDir::new().unwrap();
    let data: Vec<u8> = (0..1000u32).map(|i| (i * 7 % 256) as u8).collect();
    std::fs::write(tmp.path().join("photo.raw"), &data).unwrap();

    let cut = slicer(tmp.path(), &["CUT", "photo.raw", "--block-size", "300"]);
    assert_eq!(cut.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&cut.stdout).contains("File cut into 4 parts"));

    let collect = slicer(tmp.path(), &["COLLECT", "result", "--dest", "restored"]);
    assert_eq!(collect.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&collect.stdout).contains("Original file rebuilt as"));
    assert_eq!(
        std::fs::read(tmp.path().join("restored").join("photo.raw")).unwrap(),
        data
    );
}
