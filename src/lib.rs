// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.

mod ternary;

pub mod carver;
pub mod cumulative;
pub mod energy;
pub mod error;
pub mod gridmap;
pub mod seamfinder;
pub mod seampath;
pub mod seamremover;

pub use crate::carver::{carve_file, CarveAmount, CarveConfig, CarveMode, Carver};
pub use crate::error::CarveError;
pub use crate::seamfinder::Axis;
