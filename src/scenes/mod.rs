//! Scene System
//!
//! The three screens of the game, dispatched from a tagged `Screen` enum in
//! the main loop rather than through scene inheritance. Each scene gets
//! events and delta time pushed into it and asks for a transition by
//! returning a [`SceneChange`]; the main loop owns the switch and rebuilds
//! the next scene from scratch, so no state leaks between rounds.

mod action;
mod menu;
mod score;

pub use action::ActionScene;
pub use menu::MenuScene;
pub use score::{display_score, ScoreScene};

use sdl2::rect::Rect;

/// Outcome of one charge/release cycle, handed to the score scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchResult {
    pub multiplier: u32,
}

/// Transition requested by the active scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneChange {
    /// Enter a fresh action scene (from menu start or score retry)
    Play,
    /// Show the score screen for a finished launch
    ShowScore(LaunchResult),
}

/// Destination rect for a sprite centered on (cx, cy)
pub(crate) fn centered_rect(cx: i32, cy: i32, width: u32, height: u32) -> Rect {
    Rect::new(cx - width as i32 / 2, cy - height as i32 / 2, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_math() {
        let rect = centered_rect(400, 530, 200, 80);
        assert_eq!(rect.x(), 300);
        assert_eq!(rect.y(), 490);
        assert_eq!(rect.center().x(), 400);
        assert_eq!(rect.center().y(), 530);
    }
}
