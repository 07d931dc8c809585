// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong between parsing the startup options
//! and putting the first frame on the screen.  The field computation
//! itself cannot fail.

use failure::Fail;

/// The crate-wide error type.
#[derive(Debug, Fail, PartialEq)]
pub enum Error {
    /// The integral plane has no pixels in it.
    #[fail(display = "The integral plane {}x{} is empty.", width, height)]
    EmptyPlane {
        /// Requested width, in pixels.
        width: usize,
        /// Requested height, in pixels.
        height: usize,
    },

    /// The complex rectangle collapses to a line or a point.
    #[fail(display = "The complex plane has no area.")]
    DegeneratePlane,

    /// A field variant name we don't know.
    #[fail(display = "Unknown field variant: {}", _0)]
    UnknownVariant(String),

    /// A seed mapping name we don't know.
    #[fail(display = "Unknown mapping: {}", _0)]
    UnknownMapping(String),

    /// The windowing layer refused us.
    #[fail(display = "Window failure: {}", _0)]
    Window(String),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
