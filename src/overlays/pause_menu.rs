//! Pause menu overlay
//!
//! A centered modal menu with keyboard navigation: up/down moves the
//! selection (wrapping at both ends), return or space confirms, escape
//! dismisses. Register it with `pause_game: true` and a high input priority;
//! the game reads the chosen item through the handle.

use crate::input::{InputEvent, InputResponse};
use crate::overlay::Overlay;
use crate::text::{draw_text, text_width};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::cell::RefCell;
use std::rc::Rc;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Menu box width in pixels
    pub width: u32,

    /// Menu box height in pixels
    pub height: u32,

    /// Backdrop darkness over the game (0-255, higher = darker)
    pub backdrop_alpha: u8,

    /// Box background color
    pub background_color: Color,

    /// Box border color
    pub border_color: Color,

    /// Title text color
    pub title_color: Color,

    /// Unselected item text color
    pub item_color: Color,

    /// Selected item text color
    pub selected_item_color: Color,

    /// Selection highlight color
    pub highlight_color: Color,

    /// Title and item text scale
    pub text_scale: u32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 320,
            height: 200,
            backdrop_alpha: 180,
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            title_color: Color::RGB(220, 220, 240),
            item_color: Color::RGB(160, 160, 170),
            selected_item_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(80, 100, 140),
            text_scale: 2,
        }
    }
}

/// What the player did with the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseMenuAction {
    /// An item was confirmed
    Selected { index: usize, label: String },
    /// The menu was dismissed without choosing (escape)
    Dismissed,
}

/// Game-side handle for reading menu results
#[derive(Clone)]
pub struct PauseMenuHandle(Rc<RefCell<Option<PauseMenuAction>>>);

impl PauseMenuHandle {
    /// Take the pending action, leaving none; `None` if nothing happened
    pub fn take_action(&self) -> Option<PauseMenuAction> {
        self.0.borrow_mut().take()
    }
}

/// A centered, keyboard-driven pause menu
pub struct PauseMenuOverlay {
    title: String,
    items: Vec<String>,
    selected: usize,
    style: MenuStyle,
    action: Rc<RefCell<Option<PauseMenuAction>>>,
}

impl PauseMenuOverlay {
    /// Creates a menu with default styling
    ///
    /// Navigation wraps over `items`. An empty menu is inert: navigation and
    /// confirm do nothing, escape still dismisses.
    pub fn new(title: impl Into<String>, items: Vec<String>) -> (Self, PauseMenuHandle) {
        Self::with_style(title, items, MenuStyle::default())
    }

    /// Creates a menu with custom styling
    pub fn with_style(
        title: impl Into<String>,
        items: Vec<String>,
        style: MenuStyle,
    ) -> (Self, PauseMenuHandle) {
        let action = Rc::new(RefCell::new(None));
        let overlay = PauseMenuOverlay {
            title: title.into(),
            items,
            selected: 0,
            style,
            action: Rc::clone(&action),
        };
        (overlay, PauseMenuHandle(action))
    }

    /// Move selection up (wraps to bottom)
    fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.items.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Move selection down (wraps to top)
    fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Currently highlighted item index
    pub fn selected_index(&self) -> usize {
        self.selected
    }
}

impl Overlay for PauseMenuOverlay {
    fn on_activate(&mut self) {
        // Fresh menu every time it opens
        self.selected = 0;
        self.action.borrow_mut().take();
    }

    fn update(&mut self, _dt: f32) {}

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        // Darken the game behind the menu
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.backdrop_alpha));
        canvas.fill_rect(None)?;

        // Centered box with a double border
        let (screen_w, screen_h) = canvas.logical_size();
        let box_x = (screen_w.saturating_sub(self.style.width) / 2) as i32;
        let box_y = (screen_h.saturating_sub(self.style.height) / 2) as i32;
        let box_rect = Rect::new(box_x, box_y, self.style.width, self.style.height);

        canvas.set_draw_color(self.style.background_color);
        canvas.fill_rect(box_rect)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(box_rect)?;
        canvas.draw_rect(Rect::new(
            box_x + 2,
            box_y + 2,
            self.style.width - 4,
            self.style.height - 4,
        ))?;

        // Title, centered
        let title_w = text_width(&self.title, self.style.text_scale) as i32;
        draw_text(
            canvas,
            &self.title,
            box_x + (self.style.width as i32 - title_w) / 2,
            box_y + 16,
            self.style.title_color,
            self.style.text_scale,
        )?;

        // Items with a highlight bar under the selection
        let item_height = 28;
        let item_start_y = box_y + 52;

        for (i, item) in self.items.iter().enumerate() {
            let item_y = item_start_y + i as i32 * item_height;
            let is_selected = i == self.selected;

            if is_selected {
                canvas.set_draw_color(self.style.highlight_color);
                canvas.fill_rect(Rect::new(
                    box_x + 10,
                    item_y - 4,
                    self.style.width - 20,
                    22,
                ))?;
            }

            let color = if is_selected {
                self.style.selected_item_color
            } else {
                self.style.item_color
            };
            draw_text(canvas, item, box_x + 30, item_y, color, self.style.text_scale)?;
        }

        Ok(())
    }

    fn handle_input(&mut self, event: &InputEvent) -> InputResponse {
        let InputEvent::KeyDown { key, .. } = event else {
            return InputResponse::Ignored;
        };

        match *key {
            Keycode::Up => {
                self.select_previous();
                InputResponse::Consumed
            }
            Keycode::Down => {
                self.select_next();
                InputResponse::Consumed
            }
            Keycode::Return | Keycode::Space => {
                if let Some(label) = self.items.get(self.selected) {
                    *self.action.borrow_mut() = Some(PauseMenuAction::Selected {
                        index: self.selected,
                        label: label.clone(),
                    });
                }
                InputResponse::Consumed
            }
            Keycode::Escape => {
                *self.action.borrow_mut() = Some(PauseMenuAction::Dismissed);
                InputResponse::Consumed
            }
            _ => InputResponse::Ignored,
        }
    }
}
