//! Bitmap text label

use crate::text::{draw_text, text_height, text_width};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// A positioned bitmap text label
///
/// Thin stateful wrapper over [`crate::text::draw_text`] so overlays can lay
/// labels out once and re-render them every frame.
pub struct Label {
    pub x: i32,
    pub y: i32,
    text: String,
    pub color: Color,
    pub scale: u32,
}

impl Label {
    pub fn new(x: i32, y: i32, text: impl Into<String>, color: Color, scale: u32) -> Self {
        Label {
            x,
            y,
            text: text.into(),
            color,
            scale,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Rendered width in pixels
    pub fn width(&self) -> u32 {
        text_width(&self.text, self.scale)
    }

    /// Rendered height in pixels
    pub fn height(&self) -> u32 {
        text_height(self.scale)
    }

    /// Move the label so its text centers horizontally on `center_x`
    pub fn center_on(&mut self, center_x: i32) {
        self.x = center_x - self.width() as i32 / 2;
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        draw_text(canvas, &self.text, self.x, self.y, self.color, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_changes_width() {
        let mut label = Label::new(0, 0, "HI", Color::RGB(255, 255, 255), 1);
        assert_eq!(label.width(), 12);
        label.set_text("HELLO");
        assert_eq!(label.width(), 30);
        assert_eq!(label.text(), "HELLO");
    }

    #[test]
    fn test_center_on() {
        let mut label = Label::new(0, 0, "HUD", Color::RGB(255, 255, 255), 2);
        // 3 chars * 12 px = 36 px wide
        label.center_on(100);
        assert_eq!(label.x, 82);
    }
}
