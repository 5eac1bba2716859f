//! Texture Registry
//!
//! Loads every texture the game needs up front from a declarative
//! `(key, path)` manifest and serves them by string key. Scenes never touch
//! file paths; a missing key or file fails at startup with a message naming
//! both.

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;

pub struct TextureStore<'a> {
    textures: HashMap<String, Texture<'a>>,
}

impl<'a> TextureStore<'a> {
    /// Loads every entry of the manifest, failing on the first error
    pub fn load_all(
        texture_creator: &'a TextureCreator<WindowContext>,
        manifest: &[(&str, &str)],
    ) -> Result<Self, String> {
        let mut textures = HashMap::new();

        for &(key, path) in manifest {
            let texture = texture_creator
                .load_texture(path)
                .map_err(|e| format!("Failed to load texture '{}' from {}: {}", key, path, e))?;
            textures.insert(key.to_string(), texture);
        }

        println!("Loaded {} textures", textures.len());
        Ok(TextureStore { textures })
    }

    pub fn get(&self, key: &str) -> Result<&Texture<'a>, String> {
        self.textures
            .get(key)
            .ok_or_else(|| format!("Unknown texture key '{}'", key))
    }
}
