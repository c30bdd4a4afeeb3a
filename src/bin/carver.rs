// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use carver::{carve_file, CarveAmount, CarveConfig, CarveMode};
use clap::{App, Arg};
use std::path::Path;
use std::process;

fn main() {
    let matches = App::new("carver")
        .version("0.1.0")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("mode")
                .short("m")
                .value_name("MODE")
                .possible_values(&["vertical", "horizontal", "both"])
                .required(true)
                .takes_value(true)
                .help("Carve mode"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .value_name("PATH")
                .required(true)
                .takes_value(true)
                .help("Output path"),
        )
        .arg(
            Arg::with_name("proportion")
                .short("p")
                .value_name("AMOUNT")
                .takes_value(true)
                .conflicts_with("count")
                .help("Carve amount as a proportion of the side length (0-1)"),
        )
        .arg(
            Arg::with_name("count")
                .short("c")
                .value_name("PIXELS")
                .takes_value(true)
                .help("Carve amount as an absolute number of pixels"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .help("Print progress information"),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .required(true)
                .index(1)
                .help("The image to carve"),
        )
        .get_matches();

    let mode = match matches.value_of("mode").unwrap() {
        "vertical" => CarveMode::Vertical,
        "horizontal" => CarveMode::Horizontal,
        _ => CarveMode::Both,
    };

    let amount = if let Some(raw) = matches.value_of("proportion") {
        match raw.parse::<f64>() {
            Ok(proportion) => CarveAmount::Proportion(proportion),
            Err(_) => fail("invalid carve proportion"),
        }
    } else if let Some(raw) = matches.value_of("count") {
        match raw.parse::<u32>() {
            Ok(count) if count > 0 => CarveAmount::Count(count),
            _ => fail("invalid carve count"),
        }
    } else {
        CarveAmount::default()
    };

    let mut config = CarveConfig::new(mode, amount);
    config.verbose = matches.is_present("verbose");

    let input = Path::new(matches.value_of("input").unwrap());
    let output = Path::new(matches.value_of("output").unwrap());
    if let Err(error) = carve_file(input, output, config) {
        fail(&error.to_string());
    }
}

fn fail(message: &str) -> ! {
    eprintln!("carver: {}", message);
    process::exit(1);
}
