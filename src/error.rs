// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The errors a carve can surface to a user: bad configuration and
//! failed image I/O.  Contract violations between internal stages
//! (seam lengths, empty maps) are programming errors and assert
//! instead.

use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// A proportional carve amount outside [0, 1].
    #[fail(display = "carve proportion {} is outside the range 0-1", proportion)]
    Proportion { proportion: f64 },

    /// An absolute carve count that is not strictly smaller than the
    /// side it removes from.
    #[fail(
        display = "carve count {} does not fit the image {} of {} pixels",
        count, side, length
    )]
    Count {
        count: u32,
        side: &'static str,
        length: u32,
    },

    /// The input image could not be read or decoded.
    #[fail(display = "could not read {}: {}", path, cause)]
    Decode { path: String, cause: String },

    /// The result image could not be encoded or written.
    #[fail(display = "could not write {}: {}", path, cause)]
    Encode { path: String, cause: String },
}
