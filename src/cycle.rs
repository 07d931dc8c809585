// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Palette cycling.  A `Cycle` is the rotating offset the renderer adds
//! to every field value; a `Ticker` turns wall time into whole ticks;
//! and a `Driver` ties the two together and remembers whether the
//! current frame is stale.

use log::debug;
use std::time::{Duration, Instant};

/// The animation offset, always in 0..len.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cycle {
    offset: usize,
    len: usize,
}

impl Cycle {
    /// A cycle of the given period, starting at zero.
    pub fn new(len: usize) -> Cycle {
        assert!(len > 0, "a cycle needs at least one step");
        Cycle { offset: 0, len }
    }

    /// The current offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Step forward by one, wrapping at the period.
    pub fn advance(&mut self) {
        self.offset = (self.offset + 1) % self.len;
    }
}

/// Fires once per fixed interval of elapsed time.  Time left over
/// after the last whole tick carries into the next poll.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    accumulator: Duration,
    last: Instant,
}

impl Ticker {
    /// Create a ticker that starts counting at `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        assert!(interval > Duration::from_millis(0));
        Self {
            interval,
            accumulator: Duration::from_millis(0),
            last: now,
        }
    }

    /// Number of whole intervals that have passed since the last poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if now > self.last {
            self.accumulator += now - self.last;
            self.last = now;
        }
        let mut ticks = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            ticks += 1;
        }
        ticks
    }
}

/// The timer half of the animation: advances the cycle on every tick
/// and asks for a redraw.  A driver without a ticker never advances.
#[derive(Debug)]
pub struct Driver {
    ticker: Option<Ticker>,
    redraw: bool,
}

impl Driver {
    /// `interval` of None holds the palette still.  The first frame
    /// always needs drawing.
    pub fn new(interval: Option<Duration>, now: Instant) -> Driver {
        Driver {
            ticker: interval.map(|i| Ticker::new(i, now)),
            redraw: true,
        }
    }

    /// Applies any ticks that are due to `cycle`.
    pub fn update(&mut self, now: Instant, cycle: &mut Cycle) {
        let ticks = match self.ticker.as_mut() {
            Some(ticker) => ticker.poll(now),
            None => return,
        };
        if ticks == 0 {
            return;
        }
        for _ in 0..ticks {
            cycle.advance();
        }
        debug!("{} tick(s), offset now {}", ticks, cycle.offset());
        self.redraw = true;
    }

    /// Ask for the next frame to be drawn even if no tick is due.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Whether a redraw was requested since the last call.  Clears the
    /// request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.redraw, false)
    }
}
