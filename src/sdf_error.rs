/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Errors that can occur while generating distance field seeds
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SdfError {
    /// The worker's grids or parameters are inconsistent: the coverage and
    /// distance map dimensions disagree, a sample buffer has the wrong length,
    /// or the spread is outside of `MIN_SPREAD..=MAX_SPREAD`
    InvalidArguments,
}
