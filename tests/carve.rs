// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! End-to-end carving through the library interface.

use carver::{CarveAmount, CarveConfig, CarveError, CarveMode, Carver};
use image::{Rgb, RgbImage};

const FILL: Rgb<u8> = Rgb([120, 80, 40]);

fn uniform(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, FILL)
}

fn gradient(width: u32, height: u32) -> RgbImage {
    let mut image = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 19 + y * 7) % 256) as u8;
            image.put_pixel(x, y, Rgb([value, value / 2, 255 - value]));
        }
    }
    image
}

#[test]
fn vertical_proportion_on_a_uniform_image() {
    let config = CarveConfig::new(CarveMode::Vertical, CarveAmount::Proportion(0.3));
    let carved = Carver::new(uniform(10, 10), config).carve().unwrap();
    assert_eq!(carved.dimensions(), (7, 10));
    // Uniform energy means any seam is valid, but no surviving pixel
    // may change value.
    assert!(carved.pixels().all(|p| *p == FILL));
}

#[test]
fn both_mode_with_an_absolute_count() {
    let config = CarveConfig::new(CarveMode::Both, CarveAmount::Count(2));
    let carved = Carver::new(uniform(10, 10), config).carve().unwrap();
    assert_eq!(carved.dimensions(), (8, 8));
}

#[test]
fn horizontal_mode_shrinks_only_the_height() {
    let config = CarveConfig::new(CarveMode::Horizontal, CarveAmount::Count(3));
    let carved = Carver::new(gradient(12, 10), config).carve().unwrap();
    assert_eq!(carved.dimensions(), (12, 7));
}

#[test]
fn default_amount_is_fifteen_percent() {
    let config = CarveConfig::new(CarveMode::Vertical, CarveAmount::default());
    let carved = Carver::new(gradient(20, 10), config).carve().unwrap();
    assert_eq!(carved.dimensions(), (17, 10));
}

#[test]
fn oversized_count_aborts_before_carving() {
    let config = CarveConfig::new(CarveMode::Horizontal, CarveAmount::Count(10));
    match Carver::new(uniform(10, 10), config).carve() {
        Err(CarveError::Count { count: 10, .. }) => {}
        other => panic!("expected a count error, got {:?}", other.map(|i| i.dimensions())),
    }
}

#[test]
fn out_of_range_proportion_aborts_before_carving() {
    let config = CarveConfig::new(CarveMode::Vertical, CarveAmount::Proportion(1.5));
    match Carver::new(uniform(10, 10), config).carve() {
        Err(CarveError::Proportion { .. }) => {}
        other => panic!("expected a proportion error, got {:?}", other.map(|i| i.dimensions())),
    }
}
