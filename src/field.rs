// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Field is the grid of per-pixel values produced once at startup
//! and read by the renderer on every frame afterward.  Which of the two
//! generators fills it, and how each maps pixels onto the complex
//! plane, is chosen here.

use itertools::iproduct;
use log::info;
use std::fmt;
use std::str::FromStr;

use crate::classes::ClassGenerator;
use crate::errors::{Error, Result};
use crate::grayscale::GrayscaleGenerator;
use crate::planes::{IntegralPlane, Pixel};
use crate::{HEIGHT, WIDTH};

/// An immutable width x height grid of values, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    plane: IntegralPlane,
    values: Vec<u32>,
}

impl Field {
    /// Builds a field by asking `f` for the value of every pixel,
    /// exactly once each, rows first.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Field
    where
        F: FnMut(Pixel) -> u32,
    {
        let plane = IntegralPlane(width, height);
        let values: Vec<u32> = iproduct!(0..height, 0..width)
            .map(|(row, column)| f(Pixel(column, row)))
            .collect();
        debug_assert_eq!(values.len(), plane.pixels());
        Field { plane, values }
    }

    /// Runs the selected generator over the full-size grid.
    pub fn build(variant: Variant, mapping: Mapping) -> Result<Field> {
        let field = match variant {
            Variant::Classes => ClassGenerator::new(WIDTH, HEIGHT, mapping)?.generate(),
            Variant::Grayscale => GrayscaleGenerator::new(WIDTH, HEIGHT, mapping)?.generate(),
        };
        info!(
            "{} field ready ({} mapping): {}x{}, {} nonzero entries",
            variant,
            mapping,
            field.width(),
            field.height(),
            field.values.iter().filter(|v| **v != 0).count()
        );
        Ok(field)
    }

    /// Width of the grid, in pixels.
    pub fn width(&self) -> usize {
        self.plane.0
    }

    /// Height of the grid, in pixels.
    pub fn height(&self) -> usize {
        self.plane.1
    }

    /// The value stored for x, y, if that pixel is on the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        self.plane
            .offset(&Pixel(x, y))
            .map(|offset| self.values[offset])
    }

    /// All values, row-major.
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

/// Anything that can fill a Field.
pub trait FieldGenerator {
    /// Compute the whole field.  Pure and deterministic.
    fn generate(&self) -> Field;
}

/// Which escape-time formulation fills the field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Variant {
    /// Escape count modulo the palette length; zero inside the set.
    Classes,
    /// Escape count scaled to a packed gray triple; zero inside the set.
    Grayscale,
}

/// How pixel coordinates become complex seeds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Mapping {
    /// Even linear interpolation over the generator's view rectangle.
    Linear,
    /// The old integer-bounds and unnormalized seed arithmetic, warts
    /// included.
    Legacy,
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Variant> {
        match s {
            "classes" => Ok(Variant::Classes),
            "grayscale" => Ok(Variant::Grayscale),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Variant::Classes => write!(f, "classes"),
            Variant::Grayscale => write!(f, "grayscale"),
        }
    }
}

impl FromStr for Mapping {
    type Err = Error;

    fn from_str(s: &str) -> Result<Mapping> {
        match s {
            "linear" => Ok(Mapping::Linear),
            "legacy" => Ok(Mapping::Legacy),
            _ => Err(Error::UnknownMapping(s.to_string())),
        }
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mapping::Linear => write!(f, "linear"),
            Mapping::Legacy => write!(f, "legacy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn from_fn_visits_every_pixel_once() {
        let mut seen = HashSet::new();
        let mut calls = 0;
        let field = Field::from_fn(7, 5, |p| {
            calls += 1;
            seen.insert((p.0, p.1));
            (p.1 * 7 + p.0) as u32
        });
        assert_eq!(calls, 35);
        assert_eq!(seen.len(), 35);
        assert_eq!(field.values().len(), 35);
        assert_eq!(field.get(3, 2), Some(17));
        assert_eq!(field.get(6, 4), Some(34));
    }

    #[test]
    fn get_is_bounded() {
        let field = Field::from_fn(2, 2, |_| 1);
        assert_eq!(field.get(2, 0), None);
        assert_eq!(field.get(0, 2), None);
    }

    #[test]
    fn variants_and_mappings_parse() {
        assert_eq!("classes".parse::<Variant>(), Ok(Variant::Classes));
        assert_eq!("grayscale".parse::<Variant>(), Ok(Variant::Grayscale));
        assert_eq!("linear".parse::<Mapping>(), Ok(Mapping::Linear));
        assert_eq!("legacy".parse::<Mapping>(), Ok(Mapping::Legacy));
        assert_eq!(
            "plaid".parse::<Variant>(),
            Err(Error::UnknownVariant("plaid".to_string()))
        );
        assert_eq!(
            "polar".parse::<Mapping>(),
            Err(Error::UnknownMapping("polar".to_string()))
        );
    }

    #[test]
    fn names_round_trip_through_display() {
        for v in &[Variant::Classes, Variant::Grayscale] {
            assert_eq!(v.to_string().parse::<Variant>(), Ok(*v));
        }
        for m in &[Mapping::Linear, Mapping::Legacy] {
            assert_eq!(m.to_string().parse::<Mapping>(), Ok(*m));
        }
    }
}
