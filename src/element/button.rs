//! Clickable button element
//!
//! Tracks hover and pressed state from routed mouse events. A click only
//! registers when the press and the release both land inside the button,
//! matching the usual desktop behavior of dragging off a button to abort.

use crate::input::InputEvent;
use crate::text::{draw_text, text_height, text_width};
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Background when idle
    pub background_color: Color,

    /// Background while the cursor hovers the button
    pub hover_color: Color,

    /// Background while pressed
    pub pressed_color: Color,

    /// Label text color
    pub text_color: Color,

    /// Border color
    pub border_color: Color,

    /// Label text scale
    pub text_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            background_color: Color::RGB(60, 60, 80),
            hover_color: Color::RGB(80, 100, 140),
            pressed_color: Color::RGB(40, 50, 70),
            text_color: Color::RGB(220, 220, 240),
            border_color: Color::RGB(100, 100, 120),
            text_scale: 2,
        }
    }
}

/// A clickable labeled rectangle
pub struct Button {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    label: String,
    hovered: bool,
    pressed: bool,
    style: ButtonStyle,
}

impl Button {
    pub fn new(x: i32, y: i32, width: u32, height: u32, label: impl Into<String>) -> Self {
        Button {
            x,
            y,
            width,
            height,
            label: label.into(),
            hovered: false,
            pressed: false,
            style: ButtonStyle::default(),
        }
    }

    pub fn with_style(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        label: impl Into<String>,
        style: ButtonStyle,
    ) -> Self {
        Button {
            x,
            y,
            width,
            height,
            label: label.into(),
            hovered: false,
            pressed: false,
            style,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// True if the point lies inside the button
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && px < self.x + self.width as i32
            && py >= self.y
            && py < self.y + self.height as i32
    }

    /// Feed a routed input event; returns true when the button was clicked
    ///
    /// Only left mouse button presses count. Motion updates hover state and
    /// never produces a click.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::MouseMotion { x, y } => {
                self.hovered = self.contains(*x, *y);
                false
            }
            InputEvent::MouseButtonDown {
                button: MouseButton::Left,
                x,
                y,
            } => {
                if self.contains(*x, *y) {
                    self.pressed = true;
                }
                false
            }
            InputEvent::MouseButtonUp {
                button: MouseButton::Left,
                x,
                y,
            } => {
                let clicked = self.pressed && self.contains(*x, *y);
                self.pressed = false;
                clicked
            }
            _ => false,
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let rect = Rect::new(self.x, self.y, self.width, self.height);

        let background = if self.pressed {
            self.style.pressed_color
        } else if self.hovered {
            self.style.hover_color
        } else {
            self.style.background_color
        };

        canvas.set_draw_color(background);
        canvas.fill_rect(rect)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(rect)?;

        // Label centered in the button
        let label_w = text_width(&self.label, self.style.text_scale) as i32;
        let label_h = text_height(self.style.text_scale) as i32;
        draw_text(
            canvas,
            &self.label,
            self.x + (self.width as i32 - label_w) / 2,
            self.y + (self.height as i32 - label_h) / 2,
            self.style.text_color,
            self.style.text_scale,
        )?;

        Ok(())
    }
}
