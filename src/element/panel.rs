//! Filled rectangle panel with optional border
//!
//! The backdrop element for menus, dialogs, and debug readouts.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for panel appearance
#[derive(Debug, Clone)]
pub struct PanelStyle {
    /// Fill color (alpha respected when the canvas blend mode allows it)
    pub background_color: Color,

    /// Border color
    pub border_color: Color,

    /// Border thickness (draws a double border if > 1, 0 = no border)
    pub border_thickness: u32,
}

impl Default for PanelStyle {
    fn default() -> Self {
        PanelStyle {
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            border_thickness: 2,
        }
    }
}

/// A filled rectangle with an optional border
pub struct Panel {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    style: PanelStyle,
}

impl Panel {
    /// Creates a panel with default styling
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Panel {
            x,
            y,
            width,
            height,
            style: PanelStyle::default(),
        }
    }

    /// Creates a panel with custom styling
    pub fn with_style(x: i32, y: i32, width: u32, height: u32, style: PanelStyle) -> Self {
        Panel {
            x,
            y,
            width,
            height,
            style,
        }
    }

    /// True if the point lies inside the panel
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x
            && px < self.x + self.width as i32
            && py >= self.y
            && py < self.y + self.height as i32
    }

    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    /// Render the panel: fill, then border on top
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let rect = Rect::new(self.x, self.y, self.width, self.height);

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(rect)?;

        if self.style.border_thickness > 0 {
            canvas.set_draw_color(self.style.border_color);
            canvas.draw_rect(rect)?;
            if self.style.border_thickness > 1 && self.width > 4 && self.height > 4 {
                canvas.draw_rect(Rect::new(
                    self.x + 2,
                    self.y + 2,
                    self.width - 4,
                    self.height - 4,
                ))?;
            }
        }

        Ok(())
    }
}
