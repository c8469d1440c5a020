//! Modal dialog overlay
//!
//! A centered confirm/cancel dialog. While active it consumes every input
//! event, so nothing leaks to overlays underneath or to the game. The
//! buttons respond to mouse clicks; return/Y confirms and escape/N cancels
//! from the keyboard.

use crate::element::{Button, Label, Panel, PanelStyle};
use crate::input::{InputEvent, InputResponse};
use crate::overlay::Overlay;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::cell::RefCell;
use std::rc::Rc;

/// Configuration for dialog appearance
#[derive(Debug, Clone)]
pub struct DialogStyle {
    /// Dialog box width in pixels
    pub width: u32,

    /// Dialog box height in pixels
    pub height: u32,

    /// Backdrop darkness over the game (0-255)
    pub backdrop_alpha: u8,

    /// Title text color
    pub title_color: Color,

    /// Message text color
    pub message_color: Color,
}

impl Default for DialogStyle {
    fn default() -> Self {
        DialogStyle {
            width: 360,
            height: 140,
            backdrop_alpha: 200,
            title_color: Color::RGB(220, 220, 240),
            message_color: Color::RGB(160, 160, 170),
        }
    }
}

/// How the dialog was answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

/// Game-side handle for reading the dialog's answer
#[derive(Clone)]
pub struct DialogHandle(Rc<RefCell<Option<DialogOutcome>>>);

impl DialogHandle {
    /// Take the pending outcome, leaving none
    pub fn take_outcome(&self) -> Option<DialogOutcome> {
        self.0.borrow_mut().take()
    }
}

/// A modal confirm/cancel dialog
///
/// Layout is computed once from the logical screen size passed at
/// construction, so the buttons have fixed rectangles for hit-testing.
pub struct DialogOverlay {
    title: Label,
    message: Label,
    panel: Panel,
    confirm: Button,
    cancel: Button,
    style: DialogStyle,
    outcome: Rc<RefCell<Option<DialogOutcome>>>,
}

impl DialogOverlay {
    /// Creates a dialog centered on a screen of the given logical size
    pub fn new(
        screen_width: u32,
        screen_height: u32,
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        cancel_label: impl Into<String>,
    ) -> (Self, DialogHandle) {
        Self::with_style(
            screen_width,
            screen_height,
            title,
            message,
            confirm_label,
            cancel_label,
            DialogStyle::default(),
        )
    }

    /// Creates a dialog with custom styling
    pub fn with_style(
        screen_width: u32,
        screen_height: u32,
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        cancel_label: impl Into<String>,
        style: DialogStyle,
    ) -> (Self, DialogHandle) {
        let box_x = (screen_width.saturating_sub(style.width) / 2) as i32;
        let box_y = (screen_height.saturating_sub(style.height) / 2) as i32;
        let center_x = box_x + style.width as i32 / 2;

        let mut title = Label::new(0, box_y + 14, title, style.title_color, 2);
        title.center_on(center_x);
        let mut message = Label::new(0, box_y + 44, message, style.message_color, 1);
        message.center_on(center_x);

        let button_w = 100;
        let button_h = 30;
        let button_y = box_y + style.height as i32 - button_h as i32 - 14;
        let gap = 20;

        let confirm = Button::new(
            center_x - button_w as i32 - gap / 2,
            button_y,
            button_w,
            button_h,
            confirm_label,
        );
        let cancel = Button::new(center_x + gap / 2, button_y, button_w, button_h, cancel_label);

        let panel = Panel::with_style(
            box_x,
            box_y,
            style.width,
            style.height,
            PanelStyle::default(),
        );

        let outcome = Rc::new(RefCell::new(None));
        let overlay = DialogOverlay {
            title,
            message,
            panel,
            confirm,
            cancel,
            style,
            outcome: Rc::clone(&outcome),
        };
        (overlay, DialogHandle(outcome))
    }

    fn answer(&mut self, outcome: DialogOutcome) {
        *self.outcome.borrow_mut() = Some(outcome);
    }
}

impl Overlay for DialogOverlay {
    fn on_activate(&mut self) {
        self.outcome.borrow_mut().take();
    }

    fn update(&mut self, _dt: f32) {}

    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(Color::RGBA(0, 0, 0, self.style.backdrop_alpha));
        canvas.fill_rect(None)?;

        self.panel.render(canvas)?;
        self.title.render(canvas)?;
        self.message.render(canvas)?;
        self.confirm.render(canvas)?;
        self.cancel.render(canvas)?;
        Ok(())
    }

    /// Modal: every event is consumed while the dialog is active
    fn handle_input(&mut self, event: &InputEvent) -> InputResponse {
        match event {
            InputEvent::KeyDown { key, .. } => match *key {
                Keycode::Return | Keycode::Y => self.answer(DialogOutcome::Confirmed),
                Keycode::Escape | Keycode::N => self.answer(DialogOutcome::Cancelled),
                _ => {}
            },
            _ => {
                if self.confirm.handle_input(event) {
                    self.answer(DialogOutcome::Confirmed);
                } else if self.cancel.handle_input(event) {
                    self.answer(DialogOutcome::Cancelled);
                }
            }
        }
        InputResponse::Consumed
    }
}
