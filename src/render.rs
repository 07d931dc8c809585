// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drawing the field.  The renderer knows nothing about windows: it
//! walks the field, looks every value up in the palette at the current
//! animation offset, and plots one point per pixel onto a `Canvas`.
//! Canvas coordinates put 0,0 at the bottom left, y growing upward.

use crate::cycle::Cycle;
use crate::errors::Result;
use crate::field::Field;
use crate::palette::{Palette, Rgb};

/// Somewhere points can be plotted and then shown all at once.
pub trait Canvas {
    /// Color the point at x, y.  Points off the canvas are dropped.
    fn point(&mut self, x: usize, y: usize, color: Rgb);

    /// Show everything plotted since the last present.
    fn present(&mut self) -> Result<()>;
}

/// An in-memory canvas of 0x00RRGGBB pixels, stored top row first the
/// way framebuffers usually are.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    presented: usize,
}

impl FrameBuffer {
    /// A black buffer.
    pub fn new(width: usize, height: usize) -> FrameBuffer {
        FrameBuffer {
            width,
            height,
            pixels: vec![0; width * height],
            presented: 0,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixels, top row first.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The pixel plotted at canvas coordinates x, y.
    pub fn at(&self, x: usize, y: usize) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// How many frames have been presented.
    pub fn presented(&self) -> usize {
        self.presented
    }

    // Canvas row y lives at framebuffer row height - 1 - y.
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((self.height - 1 - y) * self.width + x)
    }
}

impl Canvas for FrameBuffer {
    fn point(&mut self, x: usize, y: usize, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.to_packed();
        }
    }

    fn present(&mut self) -> Result<()> {
        self.presented += 1;
        Ok(())
    }
}

/// Everything needed to draw a frame: the precomputed field, the
/// palette, and the animation offset.  Built once at startup.
#[derive(Debug)]
pub struct Scene {
    field: Field,
    palette: Palette,
    cycle: Cycle,
}

impl Scene {
    /// Wraps a field with the default palette, offset zero.
    pub fn new(field: Field) -> Scene {
        let palette = Palette::default();
        let cycle = Cycle::new(palette.len());
        Scene {
            field,
            palette,
            cycle,
        }
    }

    /// The field being drawn.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The animation offset, for the driver to advance.
    pub fn cycle_mut(&mut self) -> &mut Cycle {
        &mut self.cycle
    }

    /// The current animation offset.
    pub fn offset(&self) -> usize {
        self.cycle.offset()
    }

    /// Plot every field value through the palette, then present.
    pub fn render<C: Canvas>(&self, canvas: &mut C) -> Result<()> {
        let offset = self.cycle.offset();
        for y in 0..self.field.height() {
            for x in 0..self.field.width() {
                if let Some(value) = self.field.get(x, y) {
                    canvas.point(x, y, self.palette.color(value, offset));
                }
            }
        }
        canvas.present()
    }
}
