// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Backtracking a cumulative-energy map into a seam.
//!
//! The cheapest cell of the last row is where the best seam ends.
//! From there the path walks upward one row at a time, always moving
//! to the cheapest of the three reachable cells above, so consecutive
//! entries never differ by more than one column.

use crate::cq;
use crate::gridmap::Grid;

/// Extract the minimum-cost top-to-bottom path from a cumulative
/// energy map.  One column index per row.  An empty map is a caller
/// bug.
pub fn backtrack(cumulative: &Grid<f64>) -> Vec<u32> {
    let (width, height) = (cumulative.width(), cumulative.height());
    assert!(width > 0 && height > 0, "cannot backtrack an empty map");
    let max_x = (width - 1) as usize;

    let mut path = vec![0u32; height as usize];
    let mut x = min_index(cumulative.row(height - 1));
    path[height as usize - 1] = x as u32;

    for y in (0..height - 1).rev() {
        let row = cumulative.row(y);
        let hops = [
            row[cq!(x == 0, 0, x - 1)],
            row[x],
            row[cq!(x == max_x, max_x, x + 1)],
        ];
        let offset = min_offset(&hops);
        // Step to the discovered minimum without crossing the map
        // boundary.
        x = (x as i64 + offset).max(0).min(max_x as i64) as usize;
        path[y as usize] = x as u32;
    }

    path
}

// First occurrence wins on ties.
fn min_index(row: &[f64]) -> usize {
    let mut best = 0;
    for (i, value) in row.iter().enumerate() {
        if *value < row[best] {
            best = i;
        }
    }
    best
}

// Candidates arrive ordered left, up, right; ties resolve to the
// first candidate, the same rule min_index applies to the last row.
fn min_offset(hops: &[f64; 3]) -> i64 {
    let mut best = 0;
    for i in 1..3 {
        if hops[i] < hops[best] {
            best = i;
        }
    }
    best as i64 - 1
}
