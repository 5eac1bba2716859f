//! Charge Gauge
//!
//! This module implements the 6-step charge gauge driven by how long the
//! player holds the action key. While charging, the gauge indicator steps
//! through its frames every 100 ms, wrapping around; releasing captures the
//! current step as the launch multiplier.
//!
//! The tick loop is an explicit repeating task ticked from the scene's
//! `update(dt)` rather than a self-rescheduling callback: `update()` checks
//! `charging` before consuming any accumulated time, so release cancels
//! future ticks deterministically and a stale update is a benign no-op.

/// Number of discrete gauge steps (and frames in the gauge sprite sheet)
pub const GAUGE_STEPS: u32 = 6;

/// Seconds between gauge ticks while charging
pub const TICK_SECONDS: f32 = 0.1;

/// Charge-timing state for one round of the action scene.
///
/// Invariant: `index` is only advanced while `charging` is true, and wraps
/// modulo [`GAUGE_STEPS`].
#[derive(Debug, Clone)]
pub struct Gauge {
    charging: bool,
    index: u32,
    displayed_frame: u32,
    tick_accumulator: f32,
}

impl Gauge {
    /// Creates an idle gauge at step 0
    pub fn new() -> Self {
        Gauge {
            charging: false,
            index: 0,
            displayed_frame: 0,
            tick_accumulator: 0.0,
        }
    }

    /// Begin charging. No-op if already charging.
    ///
    /// The first tick fires immediately: frame 0 is displayed and the
    /// internal step advances to 1, matching a 100 ms tick cadence that
    /// starts at hold time zero.
    pub fn start(&mut self) {
        if self.charging {
            return;
        }

        self.charging = true;
        self.index = 0;
        self.tick_accumulator = 0.0;
        self.tick();
    }

    /// Advance the tick loop by the frame delta time.
    ///
    /// Does nothing once charging has stopped, no matter how much stale
    /// time is passed in.
    pub fn update(&mut self, delta_time: f32) {
        if !self.charging {
            return;
        }

        self.tick_accumulator += delta_time;
        while self.tick_accumulator >= TICK_SECONDS {
            self.tick_accumulator -= TICK_SECONDS;
            self.tick();
        }
    }

    /// Stop charging and capture the launch multiplier.
    ///
    /// There is no precondition: releasing without charging yields the
    /// current step, which is 0 for a fresh gauge. The indicator resets to
    /// frame 0 either way.
    pub fn release(&mut self) -> u32 {
        let multiplier = self.index;

        self.charging = false;
        self.index = 0;
        self.displayed_frame = 0;
        self.tick_accumulator = 0.0;

        multiplier
    }

    /// One gauge tick: show the current step, then advance it (wrapping)
    fn tick(&mut self) {
        self.displayed_frame = self.index;
        self.index = (self.index + 1) % GAUGE_STEPS;
    }

    /// Frame of the gauge sprite sheet to display this frame
    pub fn displayed_frame(&self) -> u32 {
        self.displayed_frame
    }

    /// Whether the action key is currently held
    pub fn is_charging(&self) -> bool {
        self.charging
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::new()
    }
}
