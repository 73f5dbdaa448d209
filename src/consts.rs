/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::fixed::*;

/// Distance stored for pixels that are not edge pixels: larger than any real
/// edge estimate, so a propagation pass always replaces it
pub const FAR_DISTANCE: F16D16 = F16D16(400 * 65536);

/// Displacement stored for pixels that are not edge pixels
pub const FAR_NEAR: F16D16Vec2 = F16D16Vec2 {
    x: F16D16(200 * 65536),
    y: F16D16(200 * 65536),
};

/// The smallest spread a caller may request
pub const MIN_SPREAD: usize = 2;

/// The largest spread a caller may request
pub const MAX_SPREAD: usize = 32;

/// The spread used by `SdfParams::default()`
pub const DEFAULT_SPREAD: usize = 8;
