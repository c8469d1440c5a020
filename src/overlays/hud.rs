//! HUD overlay
//!
//! Health and stamina bars plus a status line, pinned to the top-left
//! corner. Display only: the HUD never consumes input, so every event falls
//! through to overlays underneath (and ultimately the game).

use crate::element::{Label, ProgressBar, ProgressBarStyle};
use crate::overlay::Overlay;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::cell::RefCell;
use std::rc::Rc;

const MARGIN: i32 = 10;
const BAR_X: i32 = MARGIN + 36;
const ROW_HEIGHT: i32 = 16;

/// Values the game pushes into the HUD
struct HudState {
    health: f32,
    stamina: f32,
    status: String,
}

/// Game-side handle for feeding the HUD
///
/// Clone it freely; all clones share the same state.
#[derive(Clone)]
pub struct HudHandle(Rc<RefCell<HudState>>);

impl HudHandle {
    /// Set health as a 0.0..=1.0 fraction (clamped on display)
    pub fn set_health(&self, fraction: f32) {
        self.0.borrow_mut().health = fraction;
    }

    /// Set stamina as a 0.0..=1.0 fraction (clamped on display)
    pub fn set_stamina(&self, fraction: f32) {
        self.0.borrow_mut().stamina = fraction;
    }

    /// Set the status line under the bars
    pub fn set_status(&self, status: impl Into<String>) {
        self.0.borrow_mut().status = status.into();
    }
}

/// Top-left HUD with health/stamina bars and a status line
pub struct HudOverlay {
    state: Rc<RefCell<HudState>>,
    health_label: Label,
    health_bar: ProgressBar,
    stamina_label: Label,
    stamina_bar: ProgressBar,
    status_label: Label,
}

impl HudOverlay {
    /// Creates the HUD and the handle the game feeds values through
    pub fn new() -> (Self, HudHandle) {
        let state = Rc::new(RefCell::new(HudState {
            health: 1.0,
            stamina: 1.0,
            status: String::new(),
        }));

        let stamina_style = ProgressBarStyle {
            fill_color: Color::RGB(220, 180, 0),
            low_fill_color: Color::RGB(120, 90, 0),
            ..Default::default()
        };

        let overlay = HudOverlay {
            state: Rc::clone(&state),
            health_label: Label::new(MARGIN, MARGIN + 1, "HP", Color::RGB(220, 220, 240), 1),
            health_bar: ProgressBar::new(BAR_X, MARGIN),
            stamina_label: Label::new(
                MARGIN,
                MARGIN + ROW_HEIGHT + 1,
                "SP",
                Color::RGB(220, 220, 240),
                1,
            ),
            stamina_bar: ProgressBar::with_style(BAR_X, MARGIN + ROW_HEIGHT, stamina_style),
            status_label: Label::new(
                MARGIN,
                MARGIN + 2 * ROW_HEIGHT + 4,
                "",
                Color::RGB(160, 160, 170),
                1,
            ),
        };

        (overlay, HudHandle(state))
    }

    /// Current health bar fill (after clamping)
    pub fn health(&self) -> f32 {
        self.health_bar.value()
    }

    /// Current stamina bar fill (after clamping)
    pub fn stamina(&self) -> f32 {
        self.stamina_bar.value()
    }
}

impl Overlay for HudOverlay {
    fn update(&mut self, _dt: f32) {
        let state = self.state.borrow();
        self.health_bar.set_value(state.health);
        self.stamina_bar.set_value(state.stamina);
        if self.status_label.text() != state.status {
            self.status_label.set_text(state.status.clone());
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.health_label.render(canvas)?;
        self.health_bar.render(canvas)?;
        self.stamina_label.render(canvas)?;
        self.stamina_bar.render(canvas)?;
        if !self.status_label.text().is_empty() {
            self.status_label.render(canvas)?;
        }
        Ok(())
    }

    // handle_input deliberately left at the default: a HUD ignores input
}
