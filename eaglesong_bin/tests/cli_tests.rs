use assert_cmd::Command;
use eaglesong_vectors::{eaglesong, Digest, HEX_LEN, MAX_INPUT_LEN};
use std::io::prelude::*;
use std::process::Output;
use tempfile::NamedTempFile;

// Eaglesong of the empty input, as published with CKB RFC 0010.
const EMPTY_HASH: &str = "9e4452fc7aed93d7240b7b55263792befd1be09252b456401122ba71a56f62a0";
const A_HASH: &str = "34d81e6aa4551c99edba23e65b69af25b478f5e8233461a7a8c0eb3f40407c97";

fn run_with_stdin(args: &[&str], input: impl Into<Vec<u8>>) -> Output {
    Command::cargo_bin("eaglesong")
        .expect("binary not built")
        .args(args)
        .write_stdin(input)
        .output()
        .expect("spawn failed")
}

fn expected_line(input: &[u8]) -> String {
    format!("{}\n", eaglesong(input).to_hex())
}

#[test]
fn test_empty_stdin() {
    let output = run_with_stdin(&[], Vec::new());
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}\n", EMPTY_HASH)
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_single_byte() {
    let output = run_with_stdin(&[], "a");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("{}\n", A_HASH));
    assert_eq!(stdout.len(), HEX_LEN + 1);
    assert_ne!(stdout, format!("{}\n", EMPTY_HASH));
    // The printed line parses back to the same digest.
    assert_eq!(Digest::from_hex(stdout.trim_end()).unwrap(), eaglesong(b"a"));
}

#[test]
fn test_newlines_are_hashed() {
    let output = run_with_stdin(&[], "a\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_line(b"a\n"));
}

#[test]
fn test_arguments_ignored() {
    let plain = run_with_stdin(&[], "abc");
    for args in [&["--help"][..], &["-s", "--length", "16"][..], &["somefile"][..]] {
        let output = run_with_stdin(args, "abc");
        assert!(output.status.success(), "args {:?}", args);
        assert_eq!(output.stdout, plain.stdout, "args {:?}", args);
    }
}

#[test]
fn test_max_input_accepted() {
    let input = vec![0xa5; MAX_INPUT_LEN];
    let output = run_with_stdin(&[], input.clone());
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected_line(&input));
}

#[test]
fn test_one_past_max_rejected() {
    let output = run_with_stdin(&[], vec![0xa5; MAX_INPUT_LEN + 1]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stderr,
        format!(
            "eaglesong: input too large (limit is {} bytes)\n",
            MAX_INPUT_LEN
        )
    );
}

#[test]
fn test_stdin_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"abcdef").unwrap();
    file.flush().unwrap();
    let exe = assert_cmd::cargo::cargo_bin("eaglesong");
    let output = duct::cmd!(exe)
        .stdin_path(file.path())
        .read()
        .expect("eaglesong failed");
    // read() strips the trailing newline.
    assert_eq!(output, eaglesong(b"abcdef").to_hex().as_str());
}
