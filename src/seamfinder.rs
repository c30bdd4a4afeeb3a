// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Locating the cheapest seam in either direction.
//!
//! Only the vertical pipeline exists.  A horizontal request rotates
//! the energy map 90 degrees clockwise so that original columns
//! become rows, runs the vertical solver and backtracker, and leaves
//! the result in rotated coordinates; the remover applies the same
//! rotation to the raster before cutting, so the two stay aligned.

use crate::cumulative;
use crate::gridmap::Grid;
use crate::seampath;

/// Seam orientation against the unrotated image.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Find the minimum-energy seam of an energy map along the given
/// axis.  The map is read-only; two locates against the same map are
/// free to run concurrently.
pub fn locate(energy: &Grid<f64>, axis: Axis) -> Vec<u32> {
    let cumulative = match axis {
        Axis::Horizontal => cumulative::solve(&energy.rotate_cw()),
        Axis::Vertical => cumulative::solve(energy),
    };
    seampath::backtrack(&cumulative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_seam_finds_the_cheap_column() {
        let mut energy = Grid::from_raw(3, 4, vec![1.0; 12]);
        for y in 0..4 {
            energy[(2, y)] = 0.0;
        }
        assert_eq!(locate(&energy, Axis::Vertical), vec![2, 2, 2, 2]);
    }

    #[test]
    fn horizontal_seam_finds_the_cheap_row() {
        // 4 wide, 3 tall; row 1 is free.  In rotated coordinates that
        // row lands in column (height - 1 - 1) = 1, one entry per
        // original column.
        let mut energy = Grid::from_raw(4, 3, vec![1.0; 12]);
        for x in 0..4 {
            energy[(x, 1)] = 0.0;
        }
        assert_eq!(locate(&energy, Axis::Horizontal), vec![1, 1, 1, 1]);
    }

    #[test]
    fn seam_length_matches_the_axis() {
        let energy = Grid::from_raw(
            5,
            7,
            (0..35).map(|i| f64::from((i * 13 + 7) % 23)).collect(),
        );
        assert_eq!(locate(&energy, Axis::Vertical).len(), 7);
        assert_eq!(locate(&energy, Axis::Horizontal).len(), 5);
    }
}
