use crate::sprite::{Frame, PlayMode, SpriteSheet};
use sdl2::render::Texture;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named animation clips for the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Attack,
}

/// Animation clip definitions loaded from JSON.
///
/// The config is keyed by [`AnimationState`] and carries the frame geometry
/// for each clip, so adding or retiming a clip is a data change, not a code
/// change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    pub animations: HashMap<AnimationState, ClipData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipData {
    pub frames: Vec<FrameData>,
    pub loop_animation: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameData {
    pub x: i32,
    pub y: i32,
    pub duration_ms: u64,
}

impl AnimationConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: AnimationConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Builds the sprite sheet for one clip.
    ///
    /// The idle and attack clips live on separate textures, so each clip
    /// gets its own texture argument.
    pub fn create_clip<'a>(
        &self,
        texture: &'a Texture<'a>,
        state: AnimationState,
    ) -> Result<SpriteSheet<'a>, String> {
        let clip = self
            .animations
            .get(&state)
            .ok_or_else(|| format!("No animation data for state {:?}", state))?;

        let frames: Vec<Frame> = clip
            .frames
            .iter()
            .map(|f| Frame::new(f.x, f.y, self.frame_width, self.frame_height, f.duration_ms))
            .collect();

        let mode = if clip.loop_animation {
            PlayMode::Loop
        } else {
            PlayMode::Once
        };

        Ok(SpriteSheet::new(texture, frames, mode))
    }
}

/// Plays one clip at a time, keyed by [`AnimationState`].
///
/// Switching state restarts the new clip from its first frame; setting the
/// same state again is a no-op so a held key doesn't stutter the animation.
pub struct AnimationController<'a> {
    current_state: AnimationState,
    clips: HashMap<AnimationState, SpriteSheet<'a>>,
}

impl<'a> AnimationController<'a> {
    pub fn new() -> Self {
        AnimationController {
            current_state: AnimationState::default(),
            clips: HashMap::new(),
        }
    }

    pub fn add_clip(&mut self, state: AnimationState, sheet: SpriteSheet<'a>) {
        self.clips.insert(state, sheet);
    }

    pub fn set_state(&mut self, new_state: AnimationState) {
        if new_state == self.current_state {
            return;
        }

        self.current_state = new_state;
        if let Some(sheet) = self.clips.get_mut(&self.current_state) {
            sheet.restart();
        }
    }

    #[allow(dead_code)] // Used by tests
    pub fn current_state(&self) -> AnimationState {
        self.current_state
    }

    pub fn update(&mut self, delta_time: f32) {
        if let Some(sheet) = self.clips.get_mut(&self.current_state) {
            sheet.update(delta_time);
        }
    }

    pub fn current_sheet(&self) -> Option<&SpriteSheet<'a>> {
        self.clips.get(&self.current_state)
    }
}

impl Default for AnimationController<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses_from_json() {
        let json = r#"{
            "frame_width": 128,
            "frame_height": 128,
            "animations": {
                "Idle": {
                    "frames": [
                        { "x": 0, "y": 0, "duration_ms": 100 },
                        { "x": 128, "y": 0, "duration_ms": 100 }
                    ],
                    "loop_animation": true
                },
                "Attack": {
                    "frames": [
                        { "x": 0, "y": 0, "duration_ms": 100 }
                    ],
                    "loop_animation": false
                }
            }
        }"#;

        let config: AnimationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.frame_width, 128);
        assert_eq!(config.animations[&AnimationState::Idle].frames.len(), 2);
        assert!(config.animations[&AnimationState::Idle].loop_animation);
        assert!(!config.animations[&AnimationState::Attack].loop_animation);
    }

    #[test]
    fn test_default_state_is_idle() {
        let controller = AnimationController::new();
        assert_eq!(controller.current_state(), AnimationState::Idle);
    }

    #[test]
    fn test_state_switch_is_tracked() {
        let mut controller = AnimationController::new();
        controller.set_state(AnimationState::Attack);
        assert_eq!(controller.current_state(), AnimationState::Attack);

        controller.set_state(AnimationState::Idle);
        assert_eq!(controller.current_state(), AnimationState::Idle);
    }
}
