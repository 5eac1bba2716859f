//! Menu Scene
//!
//! Static background with a single start button. Clicking the button is the
//! only input; it transitions unconditionally to the action scene.

use super::{centered_rect, SceneChange};
use crate::assets::TextureStore;
use crate::text::draw_text_centered;
use sdl2::event::Event;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BUTTON_WIDTH: u32 = 200;
const BUTTON_HEIGHT: u32 = 80;

pub struct MenuScene {
    start_button: sdl2::rect::Rect,
}

impl MenuScene {
    pub fn new() -> Self {
        MenuScene {
            // Centered near the bottom of the 800x600 screen
            start_button: centered_rect(400, 530, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Option<SceneChange> {
        match event {
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } if self.start_button.contains_point((*x, *y)) => Some(SceneChange::Play),
            _ => None,
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        textures: &TextureStore,
    ) -> Result<(), String> {
        canvas.copy(textures.get("menu_bg")?, None, None)?;

        draw_text_centered(canvas, "POWER TOSS", 400, 120, Color::RGB(240, 240, 250), 6)?;

        canvas.copy(textures.get("button")?, None, Some(self.start_button))?;
        draw_text_centered(
            canvas,
            "START",
            self.start_button.center().x(),
            self.start_button.center().y() - 10,
            Color::RGB(20, 20, 30),
            3,
        )?;

        Ok(())
    }
}

impl Default for MenuScene {
    fn default() -> Self {
        Self::new()
    }
}
