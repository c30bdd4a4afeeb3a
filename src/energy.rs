// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Gradient-magnitude energy estimation.
//!
//! The energy of a pixel is how much the image changes around it;
//! seams are routed through the regions where it changes least.  The
//! map is built from the luma plane: an optional 5x5 smoothing pass
//! to keep noise from creating false seams, crossed 3x3 Sobel
//! filters, then an equally-weighted combination of the absolute
//! gradients, normalized to [0, 1].

use crate::cq;
use crate::gridmap::Grid;
use image::{GenericImageView, Pixel, Primitive};
use itertools::izip;
use num_traits::NumCast;

// Binomial [1 4 6 4 1] / 16; applied along each axis in turn this is
// the fixed 5x5 smoothing kernel.
const SMOOTHING_KERNEL: [f64; 5] = [1.0, 4.0, 6.0, 4.0, 1.0];

// Sobel kernel for the x direction; the y kernel is its transpose.
const SOBEL: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

// Extract the luma plane as 0-255 scalars.  Generic over the pixel
// type the way the rest of the crate's image handling is; to_luma is
// the identity for greyscale sources.
fn luma_plane<I, P, S>(image: &I) -> Grid<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut plane = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let luma = image.get_pixel(x, y).to_luma();
            let value: f64 = NumCast::from(luma.channels()[0]).unwrap();
            plane[(x, y)] = value;
        }
    }
    plane
}

// One pass of the separable smoothing kernel.  Borders are clamped,
// so a uniform plane passes through unchanged.
fn smooth_axis(source: &Grid<f64>, horizontal: bool) -> Grid<f64> {
    let (width, height) = (source.width(), source.height());
    let (max_x, max_y) = (<i64 as From<u32>>::from(width) - 1, <i64 as From<u32>>::from(height) - 1);
    let mut target = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for (k, weight) in SMOOTHING_KERNEL.iter().enumerate() {
                let offset = k as i64 - 2;
                let sx = cq!(horizontal, <i64 as From<u32>>::from(x) + offset, <i64 as From<u32>>::from(x));
                let sy = cq!(horizontal, <i64 as From<u32>>::from(y), <i64 as From<u32>>::from(y) + offset);
                let sx = sx.max(0).min(max_x) as u32;
                let sy = sy.max(0).min(max_y) as u32;
                acc += weight * source[(sx, sy)];
            }
            target[(x, y)] = acc / 16.0;
        }
    }
    target
}

fn smooth(source: &Grid<f64>) -> Grid<f64> {
    smooth_axis(&smooth_axis(source, true), false)
}

// 3x3 Sobel in one direction, borders clamped.  Output is signed.
fn gradient(source: &Grid<f64>, horizontal: bool) -> Grid<f64> {
    let (width, height) = (source.width(), source.height());
    let (max_x, max_y) = (<i64 as From<u32>>::from(width) - 1, <i64 as From<u32>>::from(height) - 1);
    let mut target = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for ky in 0..3 {
                for kx in 0..3 {
                    let weight = cq!(horizontal, SOBEL[ky][kx], SOBEL[kx][ky]);
                    let sx = (<i64 as From<u32>>::from(x) + kx as i64 - 1).max(0).min(max_x) as u32;
                    let sy = (<i64 as From<u32>>::from(y) + ky as i64 - 1).max(0).min(max_y) as u32;
                    acc += weight * source[(sx, sy)];
                }
            }
            target[(x, y)] = acc;
        }
    }
    target
}

/// Compute the energy map of an image.  `smooth_first` runs the 5x5
/// smoothing pass before the gradients are taken; carving wants this
/// on, but tests and callers that pre-condition their input can skip
/// it.
pub fn estimate<I, P, S>(image: &I, smooth_first: bool) -> Grid<f64>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let plane = luma_plane(image);
    let plane = cq!(smooth_first, smooth(&plane), plane);
    let x_gradient = gradient(&plane, true);
    let y_gradient = gradient(&plane, false);

    let mut target = Grid::new(plane.width(), plane.height());
    for (cell, gx, gy) in izip!(target.cells_mut(), x_gradient.cells(), y_gradient.cells()) {
        // Each absolute gradient saturates at 255 before the average,
        // so the result stays an 8-bit magnitude scaled to [0, 1].
        let ax = gx.abs().min(255.0);
        let ay = gy.abs().min(255.0);
        *cell = (0.5 * ax + 0.5 * ay) / 255.0;
    }
    target
}
