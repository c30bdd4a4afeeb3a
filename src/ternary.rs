// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A ternary expression macro.  Border clamping shows up in almost
/// every loop in this crate, and `cq!(x == 0, 0, x - 1)` reads far
/// better inside an index expression than the equivalent if/else
/// block does.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
