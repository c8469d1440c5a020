//! Progress bar element
//!
//! A clamped 0.0..=1.0 fill bar for health, stamina, loading progress, and
//! similar HUD readouts. The fill switches to a warning color below a
//! configurable threshold.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for progress bar appearance
#[derive(Debug, Clone)]
pub struct ProgressBarStyle {
    /// Bar width in pixels
    pub width: u32,

    /// Bar height in pixels
    pub height: u32,

    /// Background color (shown where the fill is depleted)
    pub background_color: Color,

    /// Fill color above the low threshold
    pub fill_color: Color,

    /// Fill color at or below the low threshold
    pub low_fill_color: Color,

    /// Fraction below which the low fill color kicks in
    pub low_threshold: f32,

    /// Border color
    pub border_color: Color,

    /// Border thickness in pixels (0 = no border)
    pub border_thickness: u32,
}

impl Default for ProgressBarStyle {
    fn default() -> Self {
        ProgressBarStyle {
            width: 120,
            height: 10,
            background_color: Color::RGB(50, 50, 50),
            fill_color: Color::RGB(0, 200, 0),
            low_fill_color: Color::RGB(200, 0, 0),
            low_threshold: 0.3,
            border_color: Color::RGB(0, 0, 0),
            border_thickness: 1,
        }
    }
}

/// A horizontal fill bar with a clamped value
pub struct ProgressBar {
    pub x: i32,
    pub y: i32,
    value: f32,
    style: ProgressBarStyle,
}

impl ProgressBar {
    /// Creates a full bar with default styling
    pub fn new(x: i32, y: i32) -> Self {
        ProgressBar {
            x,
            y,
            value: 1.0,
            style: ProgressBarStyle::default(),
        }
    }

    /// Creates a full bar with custom styling
    pub fn with_style(x: i32, y: i32, style: ProgressBarStyle) -> Self {
        ProgressBar {
            x,
            y,
            value: 1.0,
            style,
        }
    }

    /// Current fill fraction, always within 0.0..=1.0
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the fill fraction; out-of-range values are clamped
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }

    /// True when the fill is at or below the warning threshold
    pub fn is_low(&self) -> bool {
        self.value <= self.style.low_threshold
    }

    pub fn style(&self) -> &ProgressBarStyle {
        &self.style
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        // Background (full width, shows the depleted portion)
        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(Rect::new(
            self.x,
            self.y,
            self.style.width,
            self.style.height,
        ))?;

        // Fill
        let fill_width = (self.style.width as f32 * self.value) as u32;
        if fill_width > 0 {
            let fill_color = if self.is_low() {
                self.style.low_fill_color
            } else {
                self.style.fill_color
            };
            canvas.set_draw_color(fill_color);
            canvas.fill_rect(Rect::new(self.x, self.y, fill_width, self.style.height))?;
        }

        // Border last so it sits on top of the fill
        if self.style.border_thickness > 0 {
            canvas.set_draw_color(self.style.border_color);
            canvas.draw_rect(Rect::new(
                self.x,
                self.y,
                self.style.width,
                self.style.height,
            ))?;
        }

        Ok(())
    }
}
