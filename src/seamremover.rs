// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Removing a located seam from a raster.
//!
//! Vertical removal drops one cell per row and closes the gap.
//! Horizontal removal is rotate, remove, rotate back, mirroring the
//! rotation the seam finder used to locate the seam in the first
//! place.

use crate::cq;
use image::{imageops, GenericImageView, ImageBuffer, Pixel, Primitive};

/// Remove a vertical seam; the result is one column narrower.
///
/// The seam may be longer than the image is tall: when both seams of
/// an iteration were located against the same energy map, the
/// vertical cut has already narrowed the raster by one column before
/// the horizontal seam is applied, and the horizontal seam's final
/// entry goes unused.  Anything shorter, or an out-of-range column,
/// is a caller bug.
pub fn remove_vertical<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    assert!(width > 1, "cannot carve a single-column image");
    assert!(
        seam.len() >= height as usize,
        "seam is shorter than the image"
    );

    let mut target = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        assert!(cut < width, "seam index outside the image");
        for x in 0..width {
            if x == cut {
                continue;
            }
            target.put_pixel(cq!(x < cut, x, x - 1), y, image.get_pixel(x, y));
        }
    }
    target
}

/// Remove a horizontal seam (given in rotated coordinates); the
/// result is one row shorter.
pub fn remove_horizontal<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let rotated = imageops::rotate90(image);
    imageops::rotate270(&remove_vertical(&rotated, seam))
}

/// Remove one seam of each direction, both located against the same
/// energy map; vertical first, then horizontal.
pub fn remove_both<I, P, S>(
    image: &I,
    vertical_seam: &[u32],
    horizontal_seam: &[u32],
) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    remove_horizontal(&remove_vertical(image, vertical_seam), horizontal_seam)
}
