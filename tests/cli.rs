// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line contract: flags, exit codes, and on-disk round trips.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

fn write_sample(path: &Path, width: u32, height: u32) {
    let mut image = image::RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 23 + y * 11) % 256) as u8;
            image.put_pixel(x, y, image::Rgb([value, 128, 255 - value]));
        }
    }
    image.save(path).unwrap();
}

fn carver() -> Command {
    Command::cargo_bin("carver").unwrap()
}

#[test]
fn help_exits_cleanly() {
    carver().arg("-h").assert().success();
}

#[test]
fn missing_mode_is_rejected() {
    carver()
        .args(&["-o", "out.png", "in.png"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn unknown_mode_is_rejected() {
    carver()
        .args(&["-m", "diagonal", "-o", "out.png", "in.png"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn proportion_and_count_are_mutually_exclusive() {
    carver()
        .args(&["-m", "vertical", "-p", "0.5", "-c", "3", "-o", "out.png", "in.png"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn unreadable_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");
    carver()
        .args(&["-m", "vertical", "-o"])
        .arg(&output)
        .arg(dir.path().join("missing.png"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not read"));
    assert!(!output.exists());
}

#[test]
fn carves_an_image_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_sample(&input, 12, 10);

    carver()
        .args(&["-m", "vertical", "-c", "3", "-v", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let carved = image::open(&output).unwrap().to_rgb();
    assert_eq!(carved.dimensions(), (9, 10));
}

#[test]
fn oversized_count_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_sample(&input, 10, 10);

    carver()
        .args(&["-m", "horizontal", "-c", "10", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("carve count"));
    assert!(!output.exists());
}
