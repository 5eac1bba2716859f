//! Bitmap Text Rendering
//!
//! Procedural text rendering using a 5x7 bitmap font drawn with SDL2
//! rectangles. Covers the letters, digits and minus sign the three screens
//! need; unknown characters render as a full block.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Advance width of one character in unscaled pixels (5 + 1 spacing)
const CHAR_ADVANCE: u32 = 6;

/// Pixel width of `text` when rendered at `scale`, used for centering
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * CHAR_ADVANCE * scale
}

/// Renders bitmap text with its top-left corner at (x, y).
///
/// `scale` multiplies the base 5x7 glyph size (scale 2 = 10x14 pixels per
/// character). Text is case-insensitive.
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let pixel = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as i32 * (CHAR_ADVANCE * scale) as i32;
        let pattern = glyph(c);

        for (row, &bits) in pattern.iter().enumerate() {
            for col in 0..5 {
                if (bits >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        char_x + col * pixel,
                        y + row as i32 * pixel,
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

/// Renders bitmap text horizontally centered on `center_x`
pub fn draw_text_centered(
    canvas: &mut Canvas<Window>,
    text: &str,
    center_x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    let x = center_x - text_width(text, scale) as i32 / 2;
    draw_text(canvas, text, x, y, color, scale)
}

/// 5x7 bitmap pattern for one character (1 = pixel on)
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => [0b11111; 7], // Full block for unknown characters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_scales_with_length_and_scale() {
        assert_eq!(text_width("SCORE", 1), 30);
        assert_eq!(text_width("SCORE", 3), 90);
        assert_eq!(text_width("", 4), 0);
    }

    #[test]
    fn test_known_glyphs_are_not_blocks() {
        // Every character the screens actually draw must have a real glyph
        for c in "POWERTOSSCHARGEHOLDSPACEBESTRETRY0123456789- ".chars() {
            assert_ne!(glyph(c), [0b11111; 7], "missing glyph for {c:?}");
        }
    }

    #[test]
    fn test_unknown_glyph_is_full_block() {
        assert_eq!(glyph('?'), [0b11111; 7]);
    }
}
