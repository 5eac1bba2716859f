//! Action Scene
//!
//! The charge-and-release screen. Holding SPACE charges the 6-step gauge;
//! releasing plays the attack animation, resets the gauge display, and
//! launches a sphere whose flight distance comes from the captured gauge
//! step. When a flight lands and its hold delay expires, the scene asks to
//! transition to the score screen.
//!
//! Releasing again while a sphere is still in the air launches another one;
//! each flight carries its own hold countdown and the first to expire wins
//! the transition.

use super::{centered_rect, LaunchResult, SceneChange};
use crate::animation::{AnimationConfig, AnimationController, AnimationState};
use crate::assets::TextureStore;
use crate::gauge::{Gauge, GAUGE_STEPS};
use crate::sprite::{horizontal_strip, PlayMode, SpriteSheet};
use crate::text::draw_text_centered;
use crate::timing::Countdown;
use crate::trajectory::{Point, Trajectory};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Character anchor (sprite center), matching the launch origin
const CHARACTER_X: i32 = 150;
const CHARACTER_Y: i32 = 450;
const CHARACTER_SIZE: u32 = 150;

/// Gauge indicator placement and frame size
const GAUGE_X: i32 = 50;
const GAUGE_Y: i32 = 150;
const GAUGE_FRAME_WIDTH: u32 = 53;
const GAUGE_FRAME_HEIGHT: u32 = 233;

const SPHERE_SIZE: u32 = 25;

/// Seconds the attack clip plays before reverting to idle
const ATTACK_REVERT_SECONDS: f32 = 0.5;

/// Seconds the landed sphere rests before the score screen
const LANDING_HOLD_SECONDS: f32 = 1.0;

/// One launched sphere: its trajectory plus the post-landing hold
struct Flight {
    trajectory: Trajectory,
    multiplier: u32,
    hold: Countdown,
}

impl Flight {
    fn new(multiplier: u32, start: Point) -> Self {
        Flight {
            trajectory: Trajectory::launch(multiplier, start),
            multiplier,
            hold: Countdown::new(),
        }
    }

    /// Advance the flight; returns the multiplier once, when the hold after
    /// landing expires.
    fn update(&mut self, delta_time: f32) -> Option<u32> {
        if !self.trajectory.is_complete() {
            self.trajectory.advance(delta_time);
            if self.trajectory.is_complete() {
                self.hold.arm(LANDING_HOLD_SECONDS);
            }
            None
        } else if self.hold.update(delta_time) {
            Some(self.multiplier)
        } else {
            None
        }
    }
}

pub struct ActionScene<'a> {
    gauge: Gauge,
    gauge_sheet: SpriteSheet<'a>,
    character: AnimationController<'a>,
    attack_revert: Countdown,
    flights: Vec<Flight>,
    sphere_texture: &'a Texture<'a>,
}

impl<'a> ActionScene<'a> {
    pub fn new(
        textures: &'a TextureStore<'a>,
        animation_config: &AnimationConfig,
    ) -> Result<Self, String> {
        // Gauge frames are a horizontal strip; the sheet is paused and
        // framed manually from the gauge state every frame.
        let mut gauge_sheet = SpriteSheet::new(
            textures.get("gauge")?,
            horizontal_strip(
                GAUGE_STEPS as usize,
                GAUGE_FRAME_WIDTH,
                GAUGE_FRAME_HEIGHT,
                100,
            ),
            PlayMode::Loop,
        );
        gauge_sheet.pause();

        let mut character = AnimationController::new();
        character.add_clip(
            AnimationState::Idle,
            animation_config.create_clip(textures.get("character_idle")?, AnimationState::Idle)?,
        );
        character.add_clip(
            AnimationState::Attack,
            animation_config
                .create_clip(textures.get("character_attack")?, AnimationState::Attack)?,
        );

        Ok(ActionScene {
            gauge: Gauge::new(),
            gauge_sheet,
            character,
            attack_revert: Countdown::new(),
            flights: Vec::new(),
            sphere_texture: textures.get("sphere")?,
        })
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::KeyDown {
                keycode: Some(Keycode::Space),
                ..
            } => {
                // Key repeat also lands here; Gauge::start() ignores it
                self.gauge.start();
            }
            Event::KeyUp {
                keycode: Some(Keycode::Space),
                ..
            } => {
                self.release();
            }
            _ => {}
        }
    }

    /// Release path: capture the multiplier, swing, and launch
    fn release(&mut self) {
        let multiplier = self.gauge.release();

        self.character.set_state(AnimationState::Attack);
        self.attack_revert.arm(ATTACK_REVERT_SECONDS);

        let start = Point::new(CHARACTER_X as f32, CHARACTER_Y as f32);
        self.flights.push(Flight::new(multiplier, start));
    }

    pub fn update(&mut self, delta_time: f32) -> Option<SceneChange> {
        self.gauge.update(delta_time);
        self.gauge_sheet.set_frame(self.gauge.displayed_frame() as usize);

        self.character.update(delta_time);
        if self.attack_revert.update(delta_time) {
            self.character.set_state(AnimationState::Idle);
        }

        let mut landed = None;
        for flight in &mut self.flights {
            if let Some(multiplier) = flight.update(delta_time) {
                landed.get_or_insert(multiplier);
            }
        }

        landed.map(|multiplier| SceneChange::ShowScore(LaunchResult { multiplier }))
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: &TextureStore,
    ) -> Result<(), String> {
        canvas.copy(textures.get("game_bg")?, None, None)?;

        self.gauge_sheet.render(
            canvas,
            centered_rect(GAUGE_X, GAUGE_Y, GAUGE_FRAME_WIDTH, GAUGE_FRAME_HEIGHT),
        )?;

        if let Some(sheet) = self.character.current_sheet() {
            sheet.render(
                canvas,
                centered_rect(CHARACTER_X, CHARACTER_Y, CHARACTER_SIZE, CHARACTER_SIZE),
            )?;
        }

        for flight in &self.flights {
            let position = flight.trajectory.position();
            canvas.copy(
                self.sphere_texture,
                None,
                Some(centered_rect(
                    position.x.round() as i32,
                    position.y.round() as i32,
                    SPHERE_SIZE,
                    SPHERE_SIZE,
                )),
            )?;
        }

        if !self.gauge.is_charging() && self.flights.is_empty() {
            draw_text_centered(
                canvas,
                "HOLD SPACE TO CHARGE",
                400,
                40,
                Color::RGB(240, 240, 250),
                2,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Scene construction needs SDL2 textures, so the tests drive Flight,
    // which carries the launch-to-score sequencing.

    #[test]
    fn test_flight_lands_then_holds_then_reports() {
        let mut flight = Flight::new(3, Point::new(150.0, 450.0));

        // Full flight duration: lands but the hold is still running
        assert_eq!(flight.update(1.0), None);
        assert!(flight.trajectory.is_complete());

        assert_eq!(flight.update(0.5), None);
        assert_eq!(flight.update(0.6), Some(3));

        // Reports exactly once
        assert_eq!(flight.update(10.0), None);
    }

    #[test]
    fn test_flight_reports_its_own_multiplier() {
        let mut early = Flight::new(5, Point::new(150.0, 450.0));
        let mut late = Flight::new(1, Point::new(150.0, 450.0));

        // The earlier launch is further along and lands first
        early.update(1.0);
        early.update(0.4);

        assert_eq!(late.update(0.6), None);
        assert_eq!(early.update(0.6), Some(5));
    }

    #[test]
    fn test_landed_sphere_rests_at_end_point() {
        let mut flight = Flight::new(0, Point::new(150.0, 450.0));
        flight.update(2.0);

        let resting = flight.trajectory.position();
        assert_eq!(resting, Point::new(180.0, 500.0));
    }
}
