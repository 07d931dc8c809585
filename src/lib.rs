#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Palette-cycling Mandelbrot viewer
//!
//! The Mandelbrot set is the set of points c on the complex plane for
//! which repeatedly squaring z and adding c, starting from zero, never
//! runs off to infinity.  For the points that do run off, the number
//! of steps it takes them to leave the radius-2 disk is their escape
//! time, and coloring the plane by escape time gives the familiar
//! banded picture.
//!
//! This crate computes that escape-time field exactly once, for a
//! fixed 800x600 grid, and then draws it over and over through a
//! six-color palette whose starting point rotates with every tick of a
//! timer.  Nothing is recomputed while the animation runs; the bands
//! appear to flow only because the colors move underneath them.
//!
//! There are two ways to fill the field.  The `classes` generator
//! stores each escape count modulo the palette length.  The
//! `grayscale` generator stores the count scaled to a gray RGB triple.
//! Either way, zero means "never escaped."

extern crate failure;
extern crate itertools;
extern crate minifb;
extern crate num;

pub mod classes;
pub mod cycle;
pub mod errors;
pub mod field;
pub mod grayscale;
pub mod palette;
pub mod planes;
pub mod render;
pub mod window;

pub use errors::{Error, Result};
pub use field::{Field, FieldGenerator, Mapping, Variant};
pub use render::Scene;

/// Width of the grid and of the window, in pixels.
pub const WIDTH: usize = 800;

/// Height of the grid and of the window, in pixels.
pub const HEIGHT: usize = 600;

/// Iteration cap for both escape-time loops.
pub const MAX_ITERATIONS: usize = 1000;

/// Time between palette steps, in milliseconds.
pub const TICK_MILLIS: u64 = 10;
