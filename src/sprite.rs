use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// How a sprite sheet behaves when it reaches its last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Wrap back to the first frame (idle animation)
    Loop,
    /// Stop on the last frame (attack animation)
    Once,
}

/// One frame of a sprite sheet: source rectangle plus display duration
#[derive(Debug, Clone)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub duration_seconds: f32,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: u32, height: u32, duration_ms: u64) -> Self {
        Frame {
            x,
            y,
            width,
            height,
            duration_seconds: duration_ms as f32 / 1000.0,
        }
    }
}

/// A playable strip of frames sharing one texture.
///
/// Playback is driven by delta time from the game loop. Sheets can also be
/// paused and framed manually with `set_frame()`, which is how the gauge
/// indicator is controlled.
pub struct SpriteSheet<'a> {
    texture: &'a Texture<'a>,
    frames: Vec<Frame>,
    current_frame: usize,
    frame_elapsed: f32,
    playing: bool,
    mode: PlayMode,
}

impl<'a> SpriteSheet<'a> {
    pub fn new(texture: &'a Texture<'a>, frames: Vec<Frame>, mode: PlayMode) -> Self {
        SpriteSheet {
            texture,
            frames,
            current_frame: 0,
            frame_elapsed: 0.0,
            playing: true,
            mode,
        }
    }

    /// Restart playback from the first frame
    pub fn restart(&mut self) {
        self.current_frame = 0;
        self.frame_elapsed = 0.0;
        self.playing = true;
    }

    /// Stop auto-advancement (frame stays where it is)
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Jump directly to a frame, clamped to the sheet length.
    ///
    /// Intended for manually controlled sheets (gauge indicator); pair with
    /// `pause()` so playback doesn't advance the frame underneath you.
    pub fn set_frame(&mut self, index: usize) {
        if self.frames.is_empty() {
            return;
        }
        self.current_frame = index.min(self.frames.len() - 1);
        self.frame_elapsed = 0.0;
    }

    #[allow(dead_code)] // Reserved for frame-sync debugging
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Advance playback by the frame delta time
    pub fn update(&mut self, delta_time: f32) {
        if !self.playing || self.frames.is_empty() {
            return;
        }

        self.frame_elapsed += delta_time;
        while self.frame_elapsed >= self.frames[self.current_frame].duration_seconds {
            self.frame_elapsed -= self.frames[self.current_frame].duration_seconds;

            if self.current_frame + 1 < self.frames.len() {
                self.current_frame += 1;
            } else {
                match self.mode {
                    PlayMode::Loop => self.current_frame = 0,
                    PlayMode::Once => {
                        self.playing = false;
                        self.frame_elapsed = 0.0;
                        break;
                    }
                }
            }
        }
    }

    /// Whether a play-once sheet has finished its last frame
    #[allow(dead_code)] // Attack revert runs on a countdown, not clip end
    pub fn is_finished(&self) -> bool {
        self.mode == PlayMode::Once
            && !self.playing
            && !self.frames.is_empty()
            && self.current_frame == self.frames.len() - 1
    }

    /// Draw the current frame into `dest_rect`
    pub fn render(&self, canvas: &mut Canvas<Window>, dest_rect: Rect) -> Result<(), String> {
        if self.frames.is_empty() {
            return Err("No frames to render".to_string());
        }

        let frame = &self.frames[self.current_frame];
        let src_rect = Rect::new(frame.x, frame.y, frame.width, frame.height);

        canvas
            .copy(self.texture, Some(src_rect), Some(dest_rect))
            .map_err(|e| e.to_string())
    }
}

/// Builds the frame list for a horizontal strip sheet: `count` frames of
/// `width`x`height` laid out left to right, all with the same duration.
pub fn horizontal_strip(count: usize, width: u32, height: u32, duration_ms: u64) -> Vec<Frame> {
    (0..count)
        .map(|i| Frame::new(i as i32 * width as i32, 0, width, height, duration_ms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // SpriteSheet itself needs an SDL2 texture, so tests cover the frame
    // math that doesn't touch the canvas.

    #[test]
    fn test_frame_duration_conversion() {
        let frame = Frame::new(0, 0, 53, 233, 100);
        assert!((frame.duration_seconds - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn test_horizontal_strip_layout() {
        let frames = horizontal_strip(6, 53, 233, 100);

        assert_eq!(frames.len(), 6);
        assert_eq!(frames[0].x, 0);
        assert_eq!(frames[3].x, 159);
        assert_eq!(frames[5].x, 265);
        assert!(frames.iter().all(|f| f.y == 0 && f.width == 53));
    }
}
