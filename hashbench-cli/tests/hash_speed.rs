// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use assert_cmd::Command;
use regex::Regex;

const NAMES: [&str; 7] = [
    "MD5", "SHA1", "SHA256", "SHA3-256", "SHAKE128", "BLAKE2b", "BLAKE2s",
];

fn timing_lines(output: &str) -> Vec<(String, f64)> {
    let pattern = Regex::new(r"^(\S+) took ([0-9.eE+-]+)ms$").unwrap();
    output
        .lines()
        .map(|line| {
            let captures = pattern.captures(line).unwrap();
            (
                captures.get(1).unwrap().as_str().to_string(),
                captures.get(2).unwrap().as_str().parse::<f64>().unwrap(),
            )
        })
        .collect()
}

#[test]
fn integration_test_run() {
    let result = Command::cargo_bin("hash-speed-cli")
        .unwrap()
        .arg("run")
        .arg("--samples")
        .arg("100")
        .ok();
    assert!(result.is_ok());
    let output = String::from_utf8(result.unwrap().stdout).unwrap();

    let timings = timing_lines(&output);
    assert_eq!(timings.len(), NAMES.len());
    for ((name, millis), expected) in timings.iter().zip(NAMES.iter()) {
        assert_eq!(name, expected);
        assert!(millis.is_finite());
        assert!(*millis >= 0.0);
    }
}

#[test]
fn integration_test_run_only() {
    let result = Command::cargo_bin("hash-speed-cli")
        .unwrap()
        .arg("run")
        .arg("--samples")
        .arg("1")
        .arg("--only")
        .arg("blake2s")
        .ok();
    assert!(result.is_ok());
    let output = String::from_utf8(result.unwrap().stdout).unwrap();
    let timings = timing_lines(&output);
    assert_eq!(timings.len(), 1);
    assert_eq!(timings[0].0, "BLAKE2s");
}

#[test]
fn integration_test_digest() {
    let result = Command::cargo_bin("hash-speed-cli")
        .unwrap()
        .arg("digest")
        .arg("--text")
        .arg("abc")
        .arg("--only")
        .arg("SHA1")
        .ok();
    assert!(result.is_ok());
    let output = String::from_utf8(result.unwrap().stdout).unwrap();
    assert_eq!(output, "SHA1: a9993e364706816aba3e25717850c26c9cd0d89d\n");
}

#[test]
fn integration_test_list() {
    let result = Command::cargo_bin("hash-speed-cli")
        .unwrap()
        .arg("list")
        .ok();
    assert!(result.is_ok());
    let output = String::from_utf8(result.unwrap().stdout).unwrap();
    assert_eq!(output, format!("{}\n", NAMES.join("\n")));
}

#[test]
fn integration_test_unknown_hash_function() {
    Command::cargo_bin("hash-speed-cli")
        .unwrap()
        .arg("run")
        .arg("--only")
        .arg("whirlpool")
        .env_remove("RUST_LOG")
        .assert()
        .failure()
        .code(exitcode::DATAERR)
        .stdout("")
        .stderr("Error: Unknown hash function: whirlpool\n");
}

#[test]
fn integration_test_zero_samples() {
    Command::cargo_bin("hash-speed-cli")
        .unwrap()
        .arg("run")
        .arg("--samples")
        .arg("0")
        .assert()
        .failure()
        .code(exitcode::DATAERR)
        .stdout("");
}
