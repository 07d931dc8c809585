// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The grayscale-intensity field.  Same recurrence as the class field,
//! written out over real and imaginary parts, but the escape count is
//! scaled to an 8-bit intensity and packed into all three channels of
//! an RGB triple.  Points that never escape are zero.

use num::Complex;

use crate::errors::Result;
use crate::field::{Field, FieldGenerator, Mapping};
use crate::planes::{IntegralPlane, Pixel, PlaneMapper};
use crate::MAX_ITERATIONS;

const VIEW_LEFT: f64 = -2.5;
const VIEW_RIGHT: f64 = 1.0;
const VIEW_BOTTOM: f64 = -1.0;
const VIEW_TOP: f64 = 1.0;

// Where pixel coordinates come from.  The legacy form multiplies the
// pixel index by the whole extent of the grid instead of by a
// per-pixel step, so almost every seed lands far outside the disk.
enum Seeds {
    Plane(PlaneMapper),
    Legacy,
}

/// Generates the grayscale field.  Row zero is the bottom of the view.
pub struct GrayscaleGenerator {
    seeds: Seeds,
    grid: IntegralPlane,
    limit: usize,
}

impl GrayscaleGenerator {
    /// Requires the width and height of the grid and the seed mapping.
    pub fn new(width: usize, height: usize, mapping: Mapping) -> Result<Self> {
        let grid = IntegralPlane::new(width, height)?;
        let seeds = match mapping {
            Mapping::Linear => Seeds::Plane(PlaneMapper::new(
                width,
                height,
                Complex::new(VIEW_LEFT, VIEW_BOTTOM),
                Complex::new(VIEW_RIGHT, VIEW_TOP),
            )?),
            Mapping::Legacy => Seeds::Legacy,
        };
        Ok(GrayscaleGenerator {
            seeds,
            grid,
            limit: MAX_ITERATIONS,
        })
    }

    fn seed(&self, pixel: &Pixel) -> (f64, f64) {
        match &self.seeds {
            Seeds::Plane(plane) => {
                let c = plane.pixel_to_point(pixel);
                (c.re, c.im)
            }
            Seeds::Legacy => (
                (self.grid.0 as f64) * (pixel.0 as f64) - 2.5,
                (self.grid.1 as f64) * (pixel.1 as f64) - 1.0,
            ),
        }
    }
}

impl FieldGenerator for GrayscaleGenerator {
    fn generate(&self) -> Field {
        Field::from_fn(self.grid.0, self.grid.1, |pixel| {
            let (x0, y0) = self.seed(&pixel);
            match escape(x0, y0, self.limit) {
                None => 0,
                Some(iterations) => gray(intensity(iterations, self.limit)),
            }
        })
    }
}

/// Iterates x, y = x^2 - y^2 + x0, 2xy + y0 from the origin.  Returns
/// the step count on which x^2 + y^2 reached 4, or None if it never
/// did within `limit` steps.
pub fn escape(x0: f64, y0: f64, limit: usize) -> Option<usize> {
    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    let mut iterations = 0;
    while x * x + y * y < 4.0 && iterations < limit {
        let xtemp = x * x - y * y + x0;
        y = 2.0 * x * y + y0;
        x = xtemp;
        iterations += 1;
    }
    if x * x + y * y < 4.0 {
        None
    } else {
        Some(iterations)
    }
}

/// Scales an escape count to 0..=255, rounding to nearest.
pub fn intensity(iterations: usize, limit: usize) -> u8 {
    (255.0 * (iterations as f64) / (limit as f64)).round() as u8
}

/// Packs an intensity into equal R, G and B bytes.
pub fn gray(intensity: u8) -> u32 {
    let i = u32::from(intensity);
    (i << 16) | (i << 8) | i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn is_gray(v: u32) -> bool {
        let (r, g, b) = ((v >> 16) & 0xFF, (v >> 8) & 0xFF, v & 0xFF);
        v >> 24 == 0 && r == g && g == b
    }

    #[test]
    fn first_step_escape_is_black() {
        assert_eq!(escape(3.0, 3.0, MAX_ITERATIONS), Some(1));
        assert_eq!(intensity(1, MAX_ITERATIONS), 0);
        assert_eq!(gray(intensity(1, MAX_ITERATIONS)), 0x000000);
    }

    #[test]
    fn members_never_escape() {
        assert_eq!(escape(0.0, 0.0, MAX_ITERATIONS), None);
        assert_eq!(escape(-1.0, 0.0, MAX_ITERATIONS), None);
    }

    #[test]
    fn slow_escape_counts_steps() {
        assert_eq!(escape(0.5, 0.0, MAX_ITERATIONS), Some(5));
        assert_eq!(intensity(5, MAX_ITERATIONS), 1);
        assert_eq!(gray(1), 0x010101);
    }

    #[test]
    fn intensity_spans_a_byte() {
        assert_eq!(intensity(0, MAX_ITERATIONS), 0);
        assert_eq!(intensity(500, MAX_ITERATIONS), 128);
        assert_eq!(intensity(MAX_ITERATIONS, MAX_ITERATIONS), 255);
        assert_eq!(gray(255), 0xFFFFFF);
    }

    #[test]
    fn linear_field_is_all_gray() {
        let field = GrayscaleGenerator::new(35, 20, Mapping::Linear)
            .unwrap()
            .generate();
        assert_eq!(field.values().len(), 35 * 20);
        assert!(field.values().iter().all(|v| is_gray(*v)));
        // -0.5 + 0i, inside the main cardioid.
        assert_eq!(field.get(20, 10), Some(0));
    }

    #[test]
    fn legacy_field_is_nearly_black() {
        let field = GrayscaleGenerator::new(800, 600, Mapping::Legacy)
            .unwrap()
            .generate();
        assert!(field.values().iter().all(|v| is_gray(*v)));
        assert_eq!(field.get(0, 0), Some(0));
        assert_eq!(field.get(1, 1), Some(0));
        assert_eq!(field.get(799, 599), Some(0));
    }

    #[test]
    fn empty_grid_is_refused_by_both_mappings() {
        for &mapping in &[Mapping::Linear, Mapping::Legacy] {
            assert_eq!(
                GrayscaleGenerator::new(0, 0, mapping).err(),
                Some(Error::EmptyPlane {
                    width: 0,
                    height: 0
                })
            );
        }
    }

    #[test]
    fn legacy_seeds_use_full_extent() {
        let gen = GrayscaleGenerator::new(800, 600, Mapping::Legacy).unwrap();
        assert_eq!(gen.seed(&Pixel(0, 0)), (-2.5, -1.0));
        assert_eq!(gen.seed(&Pixel(1, 2)), (797.5, 1199.0));
    }
}
