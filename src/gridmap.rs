// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Single-channel two-dimensional maps.
//!
//! The energy and cumulative-energy planes are plain grids of scalars
//! rather than images, so they get their own type.  A `Grid` is
//! row-major, addressable by `(x, y)`, and knows how to hand out
//! whole rows as slices, which is what the cumulative-energy dynamic
//! program works in terms of.

use std::ops::{Index, IndexMut};

/// A row-major single-channel map.  The content type must implement
/// the Default trait so a fresh grid can be zeroed.
#[derive(Debug, Clone)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// Allocate a new grid filled with the default value.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a grid from an existing row-major cell vector.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "cell count does not match the grid dimensions"
        );
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Keep the index math in one place and never touch it anywhere
    // else.  Same layout image.rs uses.
    fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// One full row as a slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.index_of(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// One full row as a mutable slice.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let start = self.index_of(0, y);
        let width = self.width as usize;
        &mut self.cells[start..start + width]
    }

    /// Split borrow for the dynamic program: row `y - 1` immutably
    /// and row `y` mutably, at the same time.  Requires `y >= 1`.
    pub fn split_row_mut(&mut self, y: u32) -> (&[P], &mut [P]) {
        assert!(y > 0, "row 0 has no predecessor");
        let width = self.width as usize;
        let start = y as usize * width;
        let (head, tail) = self.cells.split_at_mut(start);
        (&head[start - width..], &mut tail[..width])
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> &[P] {
        &self.cells
    }

    /// Every cell, row-major, mutable.
    pub fn cells_mut(&mut self) -> &mut [P] {
        &mut self.cells
    }

    /// Rotate 90 degrees clockwise.  Follows the same orientation as
    /// `imageops::rotate90`, so a rotated grid and a rotated raster
    /// stay aligned cell for cell.
    pub fn rotate_cw(&self) -> Self {
        let mut target = Grid::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                target[(self.height - 1 - y, x)] = self[(x, y)];
            }
        }
        target
    }

    /// Rotate 90 degrees counterclockwise.  Inverse of `rotate_cw`.
    pub fn rotate_ccw(&self) -> Self {
        let mut target = Grid::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                target[(y, self.width - 1 - x)] = self[(x, y)];
            }
        }
        target
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.index_of(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.index_of(x, y);
        &mut self.cells[index]
    }
}
