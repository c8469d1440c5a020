//! Built-in Overlay Implementations
//!
//! Ready-made overlays covering the common layers a game needs: a HUD, a
//! pause menu, a modal dialog, and a debug panel. Each one exercises the
//! [`Overlay`](crate::overlay::Overlay) surface differently:
//!
//! - [`HudOverlay`] never consumes input (a HUD is display only)
//! - [`PauseMenuOverlay`] consumes navigation keys and pauses the game
//! - [`DialogOverlay`] consumes everything while active (modal)
//! - [`DebugOverlay`] displays frame statistics and consumes nothing
//!
//! Overlays that produce results (menu selections, dialog outcomes) or need
//! runtime data pushed in (HUD values, debug counters) hand out a cloneable
//! handle at construction. The game keeps the handle; the boxed overlay goes
//! into the manager. Handles use `Rc<RefCell<_>>` since the whole system is
//! single-threaded and frame-driven.

pub mod debug_panel;
pub mod dialog;
pub mod hud;
pub mod pause_menu;

pub use debug_panel::{DebugOverlay, DebugStatsHandle};
pub use dialog::{DialogHandle, DialogOutcome, DialogOverlay, DialogStyle};
pub use hud::{HudHandle, HudOverlay};
pub use pause_menu::{MenuStyle, PauseMenuAction, PauseMenuHandle, PauseMenuOverlay};
