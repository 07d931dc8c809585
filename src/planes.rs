// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane.  Pixel 0,0 lands on the
//! `origin` corner of the complex rectangle and pixel width,height on
//! the `opposite` corner, so either axis may run "backwards."
use crate::errors::{Error, Result};
use num::Complex;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

impl IntegralPlane {
    /// A plane of width x height pixels.  Refuses a plane with no
    /// pixels in it.
    pub fn new(width: usize, height: usize) -> Result<IntegralPlane> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyPlane { width, height });
        }
        Ok(IntegralPlane(width, height))
    }

    /// The total number of points in the integral grid.
    pub fn pixels(&self) -> usize {
        self.0 * self.1
    }

    /// The row-major offset of a pixel into a buffer the size of the
    /// plane, or None if the pixel is off the plane.
    pub fn offset(&self, pixel: &Pixel) -> Option<usize> {
        if pixel.0 >= self.0 || pixel.1 >= self.1 {
            return None;
        }
        Some(pixel.1 * self.0 + pixel.0)
    }
}

/// The two corners of the complex rectangle: the one pixel 0,0 maps
/// to, and the one diagonally across from it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the x, y of a point in a region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps pixels from one to points in
/// the other.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The far corner of the integral cartesian plane.  The near
    /// corner is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The complex rectangle, origin corner first.
    pub complex_plane: ComplexPlane,
    // The size of one pixel, measured on the complex plane.  Negative
    // when an axis runs backwards.
    step: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane, and two
    /// points describing the complex plane.
    pub fn new(
        width: usize,
        height: usize,
        origin: Complex<f64>,
        opposite: Complex<f64>,
    ) -> Result<PlaneMapper> {
        let integral_plane = IntegralPlane::new(width, height)?;

        let region_width = opposite.re - origin.re;
        let region_height = opposite.im - origin.im;
        if region_width == 0.0 || region_height == 0.0 {
            return Err(Error::DegeneratePlane);
        }

        Ok(PlaneMapper {
            integral_plane,
            complex_plane: ComplexPlane(origin, opposite),
            step: (region_width / (width as f64), region_height / (height as f64)),
        })
    }

    /// Given a pixel on the integral cartesian plane, map it to the
    /// corresponding point on the complex cartesian plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.complex_plane.0.re + (pixel.0 as f64) * self.step.0,
            self.complex_plane.0.im + (pixel.1 as f64) * self.step.1,
        )
    }
}
