//! Debug panel overlay
//!
//! A small top-right panel with a smoothed FPS readout, the raw frame time,
//! overlay registry counters, and a wall-clock line. Toggled with F3 in the
//! demo, the way debug overlays usually are.

use crate::element::{Panel, PanelStyle};
use crate::overlay::Overlay;
use crate::text::draw_text;
use chrono::Local;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::cell::RefCell;
use std::rc::Rc;

const PANEL_WIDTH: u32 = 170;
const PANEL_HEIGHT: u32 = 62;
const LINE_HEIGHT: i32 = 12;

/// Registry counters the game refreshes each frame
struct DebugStats {
    overlay_count: usize,
    active_count: usize,
}

/// Game-side handle for feeding registry counters into the panel
#[derive(Clone)]
pub struct DebugStatsHandle(Rc<RefCell<DebugStats>>);

impl DebugStatsHandle {
    pub fn set_counts(&self, overlay_count: usize, active_count: usize) {
        let mut stats = self.0.borrow_mut();
        stats.overlay_count = overlay_count;
        stats.active_count = active_count;
    }
}

/// Frame statistics panel
pub struct DebugOverlay {
    /// Exponentially smoothed frame delta in seconds
    smoothed_dt: f32,
    /// Raw delta from the latest frame
    last_dt: f32,
    panel: Panel,
    stats: Rc<RefCell<DebugStats>>,
}

impl DebugOverlay {
    /// Creates the panel anchored to the top-right of the given screen width
    pub fn new(screen_width: u32) -> (Self, DebugStatsHandle) {
        let stats = Rc::new(RefCell::new(DebugStats {
            overlay_count: 0,
            active_count: 0,
        }));

        let panel = Panel::with_style(
            screen_width as i32 - PANEL_WIDTH as i32 - 6,
            6,
            PANEL_WIDTH,
            PANEL_HEIGHT,
            PanelStyle {
                background_color: Color::RGBA(20, 20, 25, 210),
                border_color: Color::RGB(80, 80, 95),
                border_thickness: 1,
            },
        );

        let overlay = DebugOverlay {
            smoothed_dt: 0.0,
            last_dt: 0.0,
            panel,
            stats: Rc::clone(&stats),
        };
        (overlay, DebugStatsHandle(stats))
    }

    /// Smoothed frames-per-second estimate
    pub fn fps(&self) -> f32 {
        if self.smoothed_dt > 0.0 {
            1.0 / self.smoothed_dt
        } else {
            0.0
        }
    }
}

impl Overlay for DebugOverlay {
    fn update(&mut self, dt: f32) {
        self.last_dt = dt;
        // First sample seeds the average, after that a 10% blend keeps the
        // readout stable without lagging far behind
        if self.smoothed_dt == 0.0 {
            self.smoothed_dt = dt;
        } else {
            self.smoothed_dt = self.smoothed_dt * 0.9 + dt * 0.1;
        }
    }

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.panel.render(canvas)?;

        let text_x = self.panel.x + 6;
        let mut text_y = self.panel.y + 6;
        let color = Color::RGB(180, 220, 180);

        draw_text(canvas, &format!("FPS: {:.1}", self.fps()), text_x, text_y, color, 1)?;
        text_y += LINE_HEIGHT;

        draw_text(
            canvas,
            &format!("FRAME: {:.2} MS", self.last_dt * 1000.0),
            text_x,
            text_y,
            color,
            1,
        )?;
        text_y += LINE_HEIGHT;

        let stats = self.stats.borrow();
        draw_text(
            canvas,
            &format!("OVERLAYS: {} ({} ACTIVE)", stats.overlay_count, stats.active_count),
            text_x,
            text_y,
            color,
            1,
        )?;
        text_y += LINE_HEIGHT;

        let clock = Local::now().format("%H:%M:%S").to_string();
        draw_text(canvas, &clock, text_x, text_y, color, 1)?;

        Ok(())
    }

    // handle_input deliberately left at the default: display only
}
