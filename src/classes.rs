// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The iteration-class field.  Every pixel is mapped onto the complex
//! plane and iterated with the classic z = z^2 + c until it either
//! leaves the radius-2 disk or runs out of iterations.  Points that
//! never leave are assumed to be inside the Mandelbrot set and get a
//! zero; everything else gets its escape count folded down to one of
//! the palette's six slots.  Because the palette is cycled, the bands
//! appear to crawl inward toward the set.

use num::Complex;

use crate::errors::Result;
use crate::field::{Field, FieldGenerator, Mapping};
use crate::palette::PALETTE_LEN;
use crate::planes::PlaneMapper;
use crate::MAX_ITERATIONS;

const LEFT: f64 = -2.0;
const RIGHT: f64 = 1.0;
const TOP: f64 = 1.0;
const BOTTOM: f64 = -1.0;

// Integer-typed bounds.  These values happen to survive the
// truncation intact.
const LEGACY_LEFT: i32 = -2;
const LEGACY_RIGHT: i32 = 1;
const LEGACY_TOP: i32 = 1;
const LEGACY_BOTTOM: i32 = -1;

/// Generates the iteration-class field.  Row zero of the pixel grid
/// is the top edge of the view.
pub struct ClassGenerator {
    plane: PlaneMapper,
    limit: usize,
}

impl ClassGenerator {
    /// Requires the width and height of the grid, and which flavor of
    /// view rectangle to use.
    pub fn new(width: usize, height: usize, mapping: Mapping) -> Result<Self> {
        let (origin, opposite) = match mapping {
            Mapping::Linear => (Complex::new(LEFT, TOP), Complex::new(RIGHT, BOTTOM)),
            Mapping::Legacy => (
                Complex::new(f64::from(LEGACY_LEFT), f64::from(LEGACY_TOP)),
                Complex::new(f64::from(LEGACY_RIGHT), f64::from(LEGACY_BOTTOM)),
            ),
        };
        let plane = PlaneMapper::new(width, height, origin, opposite)?;
        Ok(ClassGenerator {
            plane,
            limit: MAX_ITERATIONS,
        })
    }
}

impl FieldGenerator for ClassGenerator {
    fn generate(&self) -> Field {
        let (width, height) = (self.plane.integral_plane.0, self.plane.integral_plane.1);
        Field::from_fn(width, height, |pixel| {
            let c = self.plane.pixel_to_point(&pixel);
            classify(escape_time(c, self.limit), self.limit)
        })
    }
}

/// The number of z = z^2 + c steps taken before |z| reaches 2, capped
/// at `limit`.  Always in 0..=limit.
pub fn escape_time(c: Complex<f64>, limit: usize) -> usize {
    let mut z = Complex::new(0.0_f64, 0.0_f64);
    let mut iterations = 0;
    while iterations < limit && z.norm_sqr() < 4.0 {
        z = z * z + c;
        iterations += 1;
    }
    iterations
}

/// Folds an escape count into a palette slot.  Capped counts are
/// treated as members of the set.
pub fn classify(iterations: usize, limit: usize) -> u32 {
    if iterations >= limit {
        0
    } else {
        (iterations % PALETTE_LEN) as u32
    }
}
