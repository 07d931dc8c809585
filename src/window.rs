// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The on-screen half.  A `WindowCanvas` is a `FrameBuffer` that
//! pushes itself to a minifb window on every present.  `run` is the
//! event loop: it polls the animation driver, redraws when asked to,
//! and otherwise just keeps the window pumping until it is closed or
//! Escape is pressed.

use log::{debug, info};
use minifb::{Key, Scale, ScaleMode, Window, WindowOptions};
use std::time::{Duration, Instant};

use crate::cycle::Driver;
use crate::errors::{Error, Result};
use crate::palette::Rgb;
use crate::render::{Canvas, FrameBuffer, Scene};

/// Title of the window.
pub const TITLE: &str = "Mandelbrot";

// Roughly sixty frames a second.
const FRAME_INTERVAL: Duration = Duration::from_micros(16600);

/// A framebuffer bound to a window.
pub struct WindowCanvas {
    window: Window,
    buffer: FrameBuffer,
}

impl WindowCanvas {
    /// Opens a resizable window whose logical size is fixed at
    /// width x height; resizing stretches the picture.
    pub fn open(title: &str, width: usize, height: usize) -> Result<WindowCanvas> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                scale: Scale::X1,
                scale_mode: ScaleMode::Stretch,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| Error::Window(e.to_string()))?;
        window.limit_update_rate(Some(FRAME_INTERVAL));
        Ok(WindowCanvas {
            window,
            buffer: FrameBuffer::new(width, height),
        })
    }

    fn is_running(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }
}

impl Canvas for WindowCanvas {
    fn point(&mut self, x: usize, y: usize, color: Rgb) {
        self.buffer.point(x, y, color);
    }

    fn present(&mut self) -> Result<()> {
        self.buffer.present()?;
        self.window
            .update_with_buffer(
                self.buffer.pixels(),
                self.buffer.width(),
                self.buffer.height(),
            )
            .map_err(|e| Error::Window(e.to_string()))
    }
}

/// Shows the scene until the window goes away.  With an `interval`,
/// the palette advances one step per interval; without one it holds
/// still.
pub fn run(scene: &mut Scene, interval: Option<Duration>) -> Result<()> {
    let (width, height) = (scene.field().width(), scene.field().height());
    let mut canvas = WindowCanvas::open(TITLE, width, height)?;
    let mut driver = Driver::new(interval, Instant::now());
    let mut size = canvas.window.get_size();
    info!("window open at {}x{}", size.0, size.1);

    while canvas.is_running() {
        driver.update(Instant::now(), scene.cycle_mut());

        let current = canvas.window.get_size();
        if current != size {
            debug!(
                "reshape {}x{} -> {}x{}, view stays {}x{}",
                size.0, size.1, current.0, current.1, width, height
            );
            size = current;
            driver.request_redraw();
        }

        if driver.take_redraw() {
            scene.render(&mut canvas)?;
        } else {
            canvas.window.update();
        }
    }

    info!("window closed");
    Ok(())
}
