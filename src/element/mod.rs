//! Procedural UI Elements
//!
//! Small widgets overlays compose themselves out of. Every element follows
//! the same pattern: a style struct with a `Default` impl, a position in
//! screen pixels, and a `render` method drawing SDL2 primitives onto the
//! caller's canvas. Elements hold their own state (a bar's value, a label's
//! text, a button's pressed flag) but never reference the overlay that owns
//! them.
//!
//! # Available elements
//!
//! - [`Panel`] - filled rectangle with optional border
//! - [`Label`] - bitmap text with color and scale
//! - [`ProgressBar`] - clamped 0.0..=1.0 fill bar with a low-value color
//! - [`Button`] - clickable rectangle with hover/pressed feedback

pub mod button;
pub mod label;
pub mod panel;
pub mod progress_bar;

pub use button::{Button, ButtonStyle};
pub use label::Label;
pub use panel::{Panel, PanelStyle};
pub use progress_bar::{ProgressBar, ProgressBarStyle};
