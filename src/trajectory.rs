//! Sphere Trajectory Simulation
//!
//! This module computes the parabolic flight of the launched sphere. The
//! horizontal distance is proportional to the charge multiplier; the flight
//! always takes one second regardless of distance, so stronger throws move
//! faster.
//!
//! The path is a downward parabola fitted through the start point with its
//! vertex at the peak, then linearly blended toward the landing height as
//! progress completes. On completion the position snaps exactly to the end
//! point so the landing spot never depends on frame timing.

/// Horizontal distance gained per gauge step, in pixels
pub const DISTANCE_PER_STEP: f32 = 100.0;

/// Minimum carry: even a zero-charge release hops this far
pub const BASE_CARRY: f32 = 30.0;

/// Horizontal drop from start height to landing height
pub const LANDING_DROP: f32 = 50.0;

/// Height of the flight peak above the start point
pub const PEAK_RISE: f32 = 150.0;

/// Total flight duration in seconds
pub const FLIGHT_SECONDS: f32 = 1.0;

/// A 2D position sample along the flight path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// A time-parameterized parabolic flight.
///
/// Progress runs linearly from 0 to the total horizontal span over
/// [`FLIGHT_SECONDS`]; the vertical position is the fitted parabola plus a
/// linear blend toward the landing height.
#[derive(Debug, Clone)]
pub struct Trajectory {
    start: Point,
    end: Point,
    /// Parabola vertex: x midway between start and end, y at the peak
    vertex_x: f32,
    vertex_y: f32,
    /// Quadratic coefficient; negative (opens downward)
    coefficient: f32,
    /// Total horizontal span (distance + base carry)
    total: f32,
    elapsed: f32,
}

impl Trajectory {
    /// Launch a sphere from `start` with the given charge multiplier.
    ///
    /// A multiplier of 0 degenerates to a short 30-pixel hop; the parabola
    /// stays well defined because the span never drops below [`BASE_CARRY`].
    pub fn launch(multiplier: u32, start: Point) -> Self {
        let distance = multiplier as f32 * DISTANCE_PER_STEP;
        let total = distance + BASE_CARRY;
        let end = Point::new(start.x + total, start.y + LANDING_DROP);

        let vertex_x = (start.x + end.x) / 2.0;
        let vertex_y = start.y - PEAK_RISE;
        // Fit through the start point: at x = start.x the parabola equals start.y
        let coefficient = -4.0 * (vertex_y - start.y) / (total * total);

        Trajectory {
            start,
            end,
            vertex_x,
            vertex_y,
            coefficient,
            total,
            elapsed: 0.0,
        }
    }

    /// Advance the flight clock by the frame delta time
    pub fn advance(&mut self, delta_time: f32) {
        self.elapsed = (self.elapsed + delta_time).min(FLIGHT_SECONDS);
    }

    /// Whether the full flight duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.elapsed >= FLIGHT_SECONDS
    }

    /// Horizontal progress in pixels, 0 to `total`
    pub fn progress(&self) -> f32 {
        self.total * (self.elapsed / FLIGHT_SECONDS)
    }

    /// Raw parabola height at horizontal position `x`, before the landing
    /// blend is applied
    pub fn parabola_height(&self, x: f32) -> f32 {
        let offset = x - self.vertex_x;
        self.coefficient * offset * offset + self.vertex_y
    }

    /// Current sphere position.
    ///
    /// Snaps exactly to the end point once the flight is complete.
    pub fn position(&self) -> Point {
        if self.is_complete() {
            return self.end;
        }

        let progress = self.progress();
        let x = self.start.x + progress;
        let blend = (self.end.y - self.start.y) * (progress / self.total);
        Point::new(x, self.parabola_height(x) + blend)
    }

    #[allow(dead_code)] // Used by tests
    pub fn start_point(&self) -> Point {
        self.start
    }

    #[allow(dead_code)] // Used by tests
    pub fn end_point(&self) -> Point {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_zero_charge_is_a_short_hop() {
        let flight = Trajectory::launch(0, Point::new(150.0, 450.0));

        let end = flight.end_point();
        assert_close(end.x - flight.start_point().x, 30.0);
        assert_close(end.y - flight.start_point().y, 50.0);
    }

    #[test]
    fn test_zero_charge_lands_exactly() {
        let mut flight = Trajectory::launch(0, Point::new(150.0, 450.0));
        flight.advance(FLIGHT_SECONDS);

        assert!(flight.is_complete());
        let landed = flight.position();
        assert_eq!(landed, Point::new(180.0, 500.0));
    }

    #[test]
    fn test_full_charge_geometry() {
        // Multiplier 3: distance 300, span 330
        let flight = Trajectory::launch(3, Point::new(150.0, 450.0));

        assert_close(flight.end_point().x, 480.0);
        assert_close(flight.end_point().y, 500.0);
        assert_close(flight.vertex_y, 300.0);
        assert_close(flight.coefficient, 600.0 / 108900.0);
    }

    #[test]
    fn test_parabola_passes_through_start_height() {
        let flight = Trajectory::launch(3, Point::new(150.0, 450.0));
        assert_close(flight.parabola_height(150.0), 450.0);
    }

    #[test]
    fn test_midpoint_reaches_peak_before_blend() {
        // At progress 165 (midpoint of the 330 span) the raw parabola
        // height equals the vertex height; the landing blend is applied
        // on top of this.
        let flight = Trajectory::launch(3, Point::new(150.0, 450.0));
        assert_close(flight.parabola_height(150.0 + 165.0), 300.0);
    }

    #[test]
    fn test_midflight_position_blends_toward_landing() {
        let mut flight = Trajectory::launch(3, Point::new(150.0, 450.0));
        flight.advance(0.5);

        let sample = flight.position();
        assert_close(sample.x, 150.0 + 165.0);
        // Parabola peak (300) plus half the 50-pixel landing drop
        assert_close(sample.y, 300.0 + 25.0);
    }

    #[test]
    fn test_progress_is_linear_in_time() {
        let mut flight = Trajectory::launch(3, Point::new(0.0, 0.0));
        flight.advance(0.25);
        assert_close(flight.progress(), 82.5);

        flight.advance(0.25);
        assert_close(flight.progress(), 165.0);
    }

    #[test]
    fn test_completion_snaps_to_end_point() {
        let mut flight = Trajectory::launch(5, Point::new(150.0, 450.0));

        // Overshoot the duration; elapsed clamps and position snaps
        flight.advance(3.0);
        assert!(flight.is_complete());
        assert_eq!(flight.position(), Point::new(680.0, 500.0));
    }

    #[test]
    fn test_position_starts_at_launch_point() {
        let flight = Trajectory::launch(2, Point::new(150.0, 450.0));
        let sample = flight.position();

        assert_close(sample.x, 150.0);
        assert_close(sample.y, 450.0);
    }
}
