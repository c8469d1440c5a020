//! Overlay Engine
//!
//! A frame-driven UI overlay scaffold for SDL2 games. The engine owns overlay
//! lifecycle, draw ordering, and input routing; it does not own the window,
//! the game loop, or any GPU state. The game hands it a canvas once per frame
//! and feeds it translated input events.
//!
//! # Architecture
//!
//! - [`OverlayManager`] holds a registry of named overlays, drives their
//!   per-frame update and render passes, and routes input events through
//!   active overlays until one consumes the event.
//! - [`Overlay`] is the polymorphic unit: lifecycle hooks
//!   (initialize/activate/deactivate/cleanup) plus per-frame update, render,
//!   and input handling.
//! - Overlays draw themselves out of small procedural widgets in [`element`]
//!   (panels, labels, progress bars, buttons) rendered with SDL2 primitives.
//! - [`overlays`] ships ready-made implementations: a HUD, a pause menu, a
//!   modal dialog, and a debug panel.
//! - [`config`] reads and writes `overlay_config.json`, the per-overlay
//!   enabled/zOrder/inputPriority/pauseGame toggles plus rendering defaults.
//!
//! # Control flow
//!
//! Game loop calls `manager.update(dt)` and `manager.render(&mut canvas)`
//! each frame. Active overlays render in ascending z-order (higher z on top).
//! Input events go through `manager.dispatch_input`, which offers the event
//! to active overlays in descending input priority and stops at the first
//! consumer; unconsumed events fall back to the game.

pub mod config;
pub mod element;
pub mod input;
pub mod manager;
pub mod overlay;
pub mod overlays;
pub mod text;

pub use config::{BlendModeSetting, ConfigError, OverlayConfig, OverlayToggle, RenderingConfig};
pub use input::{translate_event, InputEvent, InputResponse};
pub use manager::{OverlayManager, OverlaySettings};
pub use overlay::{LifecycleState, Overlay, OverlayError};
