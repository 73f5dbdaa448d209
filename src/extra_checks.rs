/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Assertions for caller contracts that are too expensive to police in release
// builds: enabled for this crate's own tests and for anyone who turns on the
// `extra_checks` feature.

#[cfg(any(test, feature = "extra_checks"))]
macro_rules! extra_check {
    ($cond:expr, $($arg:tt)+) => {
        assert!($cond, $($arg)*);
    };
}

#[cfg(not(any(test, feature = "extra_checks")))]
macro_rules! extra_check {
    ($cond:expr, $($arg:tt)+) => {{}};
}
