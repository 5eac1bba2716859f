//! Delta-Time Countdown Timers
//!
//! This module provides the one-shot countdown used for deferred actions
//! (attack animation revert, post-landing hold before the score screen).
//! Everything runs on the single game loop, so a countdown is just an
//! accumulator that is ticked with the frame delta time.

/// A one-shot countdown timer driven by delta time.
///
/// The countdown starts idle. `arm()` starts it, `update()` ticks it down
/// each frame and returns `true` exactly once, on the frame the timer
/// expires. After expiring (or after `cancel()`) the countdown is idle
/// again and further updates are no-ops.
///
/// # Example
///
/// ```rust
/// let mut revert = Countdown::new();
/// revert.arm(0.5);
///
/// // In the game loop
/// if revert.update(delta_time) {
///     character.set_state(AnimationState::Idle);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: f32,
    armed: bool,
}

impl Countdown {
    /// Creates an idle countdown
    pub fn new() -> Self {
        Countdown {
            remaining: 0.0,
            armed: false,
        }
    }

    /// Start (or restart) the countdown with the given duration in seconds
    pub fn arm(&mut self, seconds: f32) {
        self.remaining = seconds;
        self.armed = true;
    }

    /// Stop the countdown without firing
    #[allow(dead_code)] // Used by tests; kept for symmetry with arm()
    pub fn cancel(&mut self) {
        self.armed = false;
        self.remaining = 0.0;
    }

    /// Whether the countdown is currently running
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Tick the countdown. Returns `true` on the frame it expires.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if !self.armed {
            return false;
        }

        self.remaining -= delta_time;
        if self.remaining <= 0.0 {
            self.armed = false;
            self.remaining = 0.0;
            true
        } else {
            false
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_countdown_never_fires() {
        let mut countdown = Countdown::new();
        assert!(!countdown.is_armed());
        assert!(!countdown.update(10.0));
    }

    #[test]
    fn test_fires_exactly_once() {
        let mut countdown = Countdown::new();
        countdown.arm(0.5);

        assert!(!countdown.update(0.3)); // 0.2 remaining
        assert!(countdown.update(0.3)); // expired
        assert!(!countdown.update(0.3)); // idle, no refire
        assert!(!countdown.is_armed());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut countdown = Countdown::new();
        countdown.arm(0.5);
        countdown.cancel();

        assert!(!countdown.update(1.0));
    }

    #[test]
    fn test_rearm_restarts_duration() {
        let mut countdown = Countdown::new();
        countdown.arm(0.5);
        countdown.update(0.4);

        // Re-arming resets the remaining time
        countdown.arm(0.5);
        assert!(!countdown.update(0.4));
        assert!(countdown.update(0.2));
    }

    #[test]
    fn test_shorter_delay_fires_first() {
        // Two countdowns armed together fire in duration order
        let mut short = Countdown::new();
        let mut long = Countdown::new();
        short.arm(0.5);
        long.arm(1.0);

        assert!(short.update(0.6));
        assert!(!long.update(0.6));
        assert!(long.update(0.6));
    }
}
