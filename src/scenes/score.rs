//! Score Scene
//!
//! Renders the numeric result of a launch, tracks the best score, and
//! offers a retry button that re-enters the action scene.

use super::{LaunchResult, SceneChange};
use crate::assets::TextureStore;
use crate::highscore::ScoreBoard;
use crate::text::draw_text_centered;
use sdl2::event::Event;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BUTTON_WIDTH: u32 = 200;
const BUTTON_HEIGHT: u32 = 80;

/// Bottom-right anchor of the retry button
const RETRY_ANCHOR_X: i32 = 750;
const RETRY_ANCHOR_Y: i32 = 550;

/// Maps the launch multiplier to the displayed score.
///
/// The 0-step release scores below zero on purpose: a botched throw reads
/// as a penalty, not a freebie.
pub fn display_score(multiplier: u32) -> i32 {
    multiplier as i32 * 20 - 10
}

pub struct ScoreScene {
    displayed: i32,
    best: Option<i32>,
    new_best: bool,
    retry_button: Rect,
}

impl ScoreScene {
    /// Computes the displayed score once and records it against the best
    /// score. A score-file write failure is reported and ignored; the round
    /// still displays.
    pub fn new(result: LaunchResult, board: &mut ScoreBoard) -> Self {
        let displayed = display_score(result.multiplier);

        let new_best = match board.submit(displayed) {
            Ok(improved) => improved,
            Err(e) => {
                eprintln!("Failed to record score: {}", e);
                false
            }
        };

        ScoreScene {
            displayed,
            best: board.best().map(|b| b.score),
            new_best,
            retry_button: Rect::new(
                RETRY_ANCHOR_X - BUTTON_WIDTH as i32,
                RETRY_ANCHOR_Y - BUTTON_HEIGHT as i32,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<SceneChange> {
        match event {
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } if self.retry_button.contains_point((*x, *y)) => Some(SceneChange::Play),
            _ => None,
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: &TextureStore,
    ) -> Result<(), String> {
        canvas.copy(textures.get("score_bg")?, None, None)?;

        draw_text_centered(canvas, "SCORE", 400, 230, Color::RGB(40, 40, 50), 3)?;
        draw_text_centered(
            canvas,
            &self.displayed.to_string(),
            400,
            290,
            Color::RGB(0, 0, 0),
            9,
        )?;

        if let Some(best) = self.best {
            let line = if self.new_best {
                "NEW BEST".to_string()
            } else {
                format!("BEST {}", best)
            };
            draw_text_centered(canvas, &line, 400, 400, Color::RGB(60, 60, 80), 2)?;
        }

        canvas.copy(textures.get("button")?, None, Some(self.retry_button))?;
        draw_text_centered(
            canvas,
            "RETRY",
            self.retry_button.center().x(),
            self.retry_button.center().y() - 10,
            Color::RGB(20, 20, 30),
            3,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_score_mapping() {
        assert_eq!(display_score(0), -10);
        assert_eq!(display_score(1), 10);
        assert_eq!(display_score(3), 50);
        assert_eq!(display_score(5), 90);
    }

    #[test]
    fn test_retry_button_is_anchored_bottom_right() {
        let rect = Rect::new(
            RETRY_ANCHOR_X - BUTTON_WIDTH as i32,
            RETRY_ANCHOR_Y - BUTTON_HEIGHT as i32,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );
        assert_eq!(rect.right(), RETRY_ANCHOR_X);
        assert_eq!(rect.bottom(), RETRY_ANCHOR_Y);
    }
}
