//! Overlay trait and lifecycle types
//!
//! An overlay is a self-contained UI layer (HUD, menu, dialog, debug panel)
//! managed by the [`OverlayManager`](crate::manager::OverlayManager). The
//! manager drives lifecycle transitions; overlay implementations only react
//! through the hooks below.
//!
//! Lifecycle: `Uninitialized` -> (`on_initialize`) -> `Inactive` ->
//! (`on_activate`) -> `Active` -> (`on_deactivate`) -> `Inactive` ->
//! (`on_cleanup`, during unregistration) -> dropped.

use crate::input::{InputEvent, InputResponse};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Lifecycle state of a registered overlay
///
/// The manager tracks this per entry; overlays never mutate it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Registered, but `on_initialize` has not run yet
    Uninitialized,
    /// Initialized but not receiving update/render/input
    Inactive,
    /// Updated, rendered, and offered input every frame
    Active,
}

impl LifecycleState {
    /// True when the overlay participates in the frame (update/render/input)
    pub fn is_active(&self) -> bool {
        matches!(self, LifecycleState::Active)
    }

    /// True once `on_initialize` has run successfully
    pub fn is_initialized(&self) -> bool {
        !matches!(self, LifecycleState::Uninitialized)
    }
}

/// A polymorphic UI layer managed by the overlay manager
///
/// All hooks have defaults except `update` and `render`, so minimal overlays
/// only implement the per-frame pair. Invariants upheld by the manager:
///
/// - `on_initialize` runs exactly once, on first activation. A returned error
///   aborts the activation and the overlay stays uninitialized.
/// - `update`, `render`, and `handle_input` are only called while active.
/// - `on_cleanup` runs during unregistration, after deactivation, and only if
///   the overlay was ever initialized.
pub trait Overlay {
    /// One-time setup (allocate element state, compute layout)
    ///
    /// Runs lazily on the first activation. Returning `Err` fails that
    /// activation with [`OverlayError::InitializationFailed`].
    fn on_initialize(&mut self) -> Result<(), String> {
        Ok(())
    }

    /// Called whenever the overlay becomes active
    fn on_activate(&mut self) {}

    /// Called whenever the overlay becomes inactive
    fn on_deactivate(&mut self) {}

    /// Final teardown before the overlay leaves the registry
    fn on_cleanup(&mut self) {}

    /// Per-frame update; `dt` is the frame delta in seconds
    fn update(&mut self, dt: f32);

    /// Draw the overlay with SDL2 primitives
    fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String>;

    /// Offer an input event; return `Consumed` to stop propagation
    ///
    /// The default ignores everything, which is correct for pure display
    /// overlays like HUDs.
    fn handle_input(&mut self, event: &InputEvent) -> InputResponse {
        let _ = event;
        InputResponse::Ignored
    }
}

/// Error types for overlay registry and lifecycle operations
#[derive(Debug)]
pub enum OverlayError {
    /// An overlay with this name is already registered
    DuplicateName(String),
    /// No overlay registered under this name
    UnknownOverlay(String),
    /// `on_initialize` failed during first activation
    InitializationFailed { name: String, reason: String },
}

impl std::fmt::Display for OverlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayError::DuplicateName(name) => {
                write!(f, "overlay already registered: {}", name)
            }
            OverlayError::UnknownOverlay(name) => {
                write!(f, "unknown overlay: {}", name)
            }
            OverlayError::InitializationFailed { name, reason } => {
                write!(f, "overlay '{}' failed to initialize: {}", name, reason)
            }
        }
    }
}

impl std::error::Error for OverlayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_state_queries() {
        assert!(!LifecycleState::Uninitialized.is_active());
        assert!(!LifecycleState::Uninitialized.is_initialized());
        assert!(!LifecycleState::Inactive.is_active());
        assert!(LifecycleState::Inactive.is_initialized());
        assert!(LifecycleState::Active.is_active());
        assert!(LifecycleState::Active.is_initialized());
    }

    #[test]
    fn test_error_display() {
        let err = OverlayError::DuplicateName("hud".to_string());
        assert_eq!(err.to_string(), "overlay already registered: hud");

        let err = OverlayError::InitializationFailed {
            name: "pause_menu".to_string(),
            reason: "missing layout".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "overlay 'pause_menu' failed to initialize: missing layout"
        );
    }
}
