// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The cumulative-energy dynamic program.
//!
//! For every cell, the minimum total energy of any top-to-bottom path
//! ending there: row 0 is the energy map's row 0, and each later cell
//! adds its own energy to the cheapest of its three upper neighbours,
//! with the columns clamped at both edges.
//!
//! Row `r` depends only on row `r - 1`, so rows are strictly
//! sequential, but every column within a row is independent.  That is
//! the one concurrency boundary this crate exploits: the parallel
//! solver splits each row into disjoint column spans, and the
//! previous row is always complete before any worker starts, so
//! there is no cross-span hazard to synchronize away.

use crate::cq;
use crate::gridmap::Grid;

// Below this width the per-row thread scope costs more than it buys.
const PARALLEL_MIN_WIDTH: u32 = 512;

// Never more workers than this; the spans get too small to matter.
const MAX_WORKERS: usize = 8;

/// Solve the cumulative-energy map for an energy map, picking the
/// parallel path for wide maps on multicore hosts.  Both paths
/// produce identical results.
pub fn solve(energy: &Grid<f64>) -> Grid<f64> {
    let workers = num_cpus::get().min(MAX_WORKERS);
    if energy.width() >= PARALLEL_MIN_WIDTH && workers > 1 {
        solve_parallel(energy, workers)
    } else {
        solve_sequential(energy)
    }
}

/// The plain single-threaded solver.
pub fn solve_sequential(energy: &Grid<f64>) -> Grid<f64> {
    let height = energy.height();
    let mut target = Grid::new(energy.width(), height);
    target.row_mut(0).copy_from_slice(energy.row(0));
    for y in 1..height {
        let (previous, row) = target.split_row_mut(y);
        fill_span(energy.row(y), previous, row, 0);
    }
    target
}

/// The column-parallel solver.  Rows stay strictly sequential; only
/// the cells of the current row are divided between workers.
pub fn solve_parallel(energy: &Grid<f64>, workers: usize) -> Grid<f64> {
    assert!(workers > 0, "need at least one worker");
    let (width, height) = (energy.width(), energy.height());
    let span = (width as usize + workers - 1) / workers;
    let mut target = Grid::new(width, height);
    target.row_mut(0).copy_from_slice(energy.row(0));
    for y in 1..height {
        let (previous, row) = target.split_row_mut(y);
        let energy_row = energy.row(y);
        crossbeam::thread::scope(|scope| {
            for (i, chunk) in row.chunks_mut(span).enumerate() {
                scope.spawn(move |_| fill_span(energy_row, previous, chunk, i * span));
            }
        })
        .unwrap();
    }
    target
}

// One contiguous span of a single output row.  `base` is the column
// of the span's first cell; all reads go to the completed previous
// row, clamped at the map edges.
fn fill_span(energy_row: &[f64], previous: &[f64], span: &mut [f64], base: usize) {
    let max_x = previous.len() - 1;
    for (i, cell) in span.iter_mut().enumerate() {
        let x = base + i;
        let left = previous[cq!(x == 0, 0, x - 1)];
        let up = previous[x];
        let right = previous[cq!(x == max_x, max_x, x + 1)];
        *cell = energy_row[x] + left.min(up).min(right);
    }
}
