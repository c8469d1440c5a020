//! OverlayManager
//!
//! The registry that owns every overlay, drives lifecycle transitions, and
//! derives the two orderings everything else hangs off:
//!
//! - render order: ascending z-order, so higher z draws later and lands on
//!   top;
//! - input order: descending input priority, so higher priority overlays see
//!   events first and can consume them before anything underneath.
//!
//! Both orderings break ties by registration order (earlier registration
//! first), which makes them total orders. The orders are cached and rebuilt
//! lazily after any registration or attribute change.
//!
//! # Example
//!
//! ```rust,ignore
//! use overlay_engine::{OverlayManager, OverlaySettings};
//!
//! let mut manager = OverlayManager::new();
//! manager.register(
//!     "hud",
//!     Box::new(my_hud),
//!     OverlaySettings { z_order: 0, ..Default::default() },
//! )?;
//! manager.activate("hud")?;
//!
//! // per frame
//! manager.update(dt);
//! manager.render(&mut canvas)?;
//!
//! // per event
//! if manager.dispatch_input(&event).is_none() {
//!     // game handles the event
//! }
//! ```

use crate::input::InputEvent;
use crate::overlay::{LifecycleState, Overlay, OverlayError};
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;
use std::collections::HashMap;

/// Per-registration attributes of an overlay
///
/// These live in the registry rather than on the overlay itself so the
/// config layer and the game can adjust them without touching the overlay.
#[derive(Debug, Clone)]
pub struct OverlaySettings {
    /// Draw-order key; higher values render on top
    pub z_order: i32,

    /// Input-routing key; higher values receive events first
    pub input_priority: i32,

    /// While this overlay is active the game should pause
    pub pause_game: bool,

    /// Hidden overlays still update but neither render nor receive input
    pub visible: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        OverlaySettings {
            z_order: 0,
            input_priority: 0,
            pause_game: false,
            visible: true,
        }
    }
}

/// Registry entry: the overlay plus everything the manager tracks about it
struct OverlayEntry {
    overlay: Box<dyn Overlay>,
    state: LifecycleState,
    z_order: i32,
    input_priority: i32,
    pause_game: bool,
    visible: bool,
    /// Monotonic registration sequence, the tie-breaker for both orderings
    sequence: u64,
}

impl OverlayEntry {
    /// True when the entry renders and receives input this frame
    fn is_interactive(&self) -> bool {
        self.state.is_active() && self.visible
    }
}

/// Owns the overlay registry and drives update, render, and input routing
pub struct OverlayManager {
    entries: HashMap<String, OverlayEntry>,
    next_sequence: u64,
    /// All registered names by (z_order asc, sequence asc)
    render_order: Vec<String>,
    /// All registered names by (input_priority desc, sequence asc)
    input_order: Vec<String>,
    orders_dirty: bool,
    focused: Option<String>,
    blend_mode: BlendMode,
    default_text_scale: u32,
}

impl OverlayManager {
    pub fn new() -> Self {
        OverlayManager {
            entries: HashMap::new(),
            next_sequence: 0,
            render_order: Vec::new(),
            input_order: Vec::new(),
            orders_dirty: false,
            focused: None,
            blend_mode: BlendMode::Blend,
            default_text_scale: 2,
        }
    }

    // === Registry ===

    /// Register an overlay under a unique name
    ///
    /// The overlay starts `Uninitialized`; `on_initialize` runs on the first
    /// [`activate`](Self::activate).
    pub fn register(
        &mut self,
        name: &str,
        overlay: Box<dyn Overlay>,
        settings: OverlaySettings,
    ) -> Result<(), OverlayError> {
        if self.entries.contains_key(name) {
            return Err(OverlayError::DuplicateName(name.to_string()));
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.entries.insert(
            name.to_string(),
            OverlayEntry {
                overlay,
                state: LifecycleState::Uninitialized,
                z_order: settings.z_order,
                input_priority: settings.input_priority,
                pause_game: settings.pause_game,
                visible: settings.visible,
                sequence,
            },
        );
        self.orders_dirty = true;
        Ok(())
    }

    /// Remove an overlay from the registry, returning it
    ///
    /// An active overlay is deactivated first; `on_cleanup` runs if the
    /// overlay was ever initialized.
    pub fn unregister(&mut self, name: &str) -> Result<Box<dyn Overlay>, OverlayError> {
        let mut entry = self
            .entries
            .remove(name)
            .ok_or_else(|| OverlayError::UnknownOverlay(name.to_string()))?;

        if entry.state.is_active() {
            entry.overlay.on_deactivate();
            entry.state = LifecycleState::Inactive;
        }
        if entry.state.is_initialized() {
            entry.overlay.on_cleanup();
        }
        if self.focused.as_deref() == Some(name) {
            self.focused = None;
        }
        self.orders_dirty = true;
        Ok(entry.overlay)
    }

    /// Deactivate and clean up every overlay, emptying the registry
    pub fn clear(&mut self) {
        for (_, mut entry) in self.entries.drain() {
            if entry.state.is_active() {
                entry.overlay.on_deactivate();
                entry.state = LifecycleState::Inactive;
            }
            if entry.state.is_initialized() {
                entry.overlay.on_cleanup();
            }
        }
        self.focused = None;
        self.orders_dirty = true;
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // === Lifecycle ===

    /// Activate an overlay, initializing it first if needed
    ///
    /// Activating an already active overlay is a no-op. If `on_initialize`
    /// fails the overlay stays `Uninitialized` and the error is returned.
    pub fn activate(&mut self, name: &str) -> Result<(), OverlayError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| OverlayError::UnknownOverlay(name.to_string()))?;

        match entry.state {
            LifecycleState::Active => Ok(()),
            LifecycleState::Uninitialized => {
                entry
                    .overlay
                    .on_initialize()
                    .map_err(|reason| OverlayError::InitializationFailed {
                        name: name.to_string(),
                        reason,
                    })?;
                entry.overlay.on_activate();
                entry.state = LifecycleState::Active;
                Ok(())
            }
            LifecycleState::Inactive => {
                entry.overlay.on_activate();
                entry.state = LifecycleState::Active;
                Ok(())
            }
        }
    }

    /// Deactivate an overlay; a no-op unless it is currently active
    pub fn deactivate(&mut self, name: &str) -> Result<(), OverlayError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| OverlayError::UnknownOverlay(name.to_string()))?;

        if entry.state.is_active() {
            entry.overlay.on_deactivate();
            entry.state = LifecycleState::Inactive;
        }
        Ok(())
    }

    /// Toggle between active and inactive; returns the new active state
    pub fn toggle(&mut self, name: &str) -> Result<bool, OverlayError> {
        if self.is_active(name) {
            self.deactivate(name)?;
            Ok(false)
        } else {
            self.activate(name)?;
            Ok(true)
        }
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .map(|e| e.state.is_active())
            .unwrap_or(false)
    }

    pub fn lifecycle_state(&self, name: &str) -> Option<LifecycleState> {
        self.entries.get(name).map(|e| e.state)
    }

    // === Attributes ===

    pub fn set_z_order(&mut self, name: &str, z_order: i32) -> Result<(), OverlayError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| OverlayError::UnknownOverlay(name.to_string()))?;
        entry.z_order = z_order;
        self.orders_dirty = true;
        Ok(())
    }

    pub fn set_input_priority(&mut self, name: &str, priority: i32) -> Result<(), OverlayError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| OverlayError::UnknownOverlay(name.to_string()))?;
        entry.input_priority = priority;
        self.orders_dirty = true;
        Ok(())
    }

    pub fn set_visible(&mut self, name: &str, visible: bool) -> Result<(), OverlayError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| OverlayError::UnknownOverlay(name.to_string()))?;
        entry.visible = visible;
        Ok(())
    }

    pub fn set_pause_game(&mut self, name: &str, pause_game: bool) -> Result<(), OverlayError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| OverlayError::UnknownOverlay(name.to_string()))?;
        entry.pause_game = pause_game;
        Ok(())
    }

    /// True while any active overlay is flagged `pause_game`
    pub fn should_pause_game(&self) -> bool {
        self.entries
            .values()
            .any(|e| e.state.is_active() && e.pause_game)
    }

    /// Blend mode applied to the canvas around the overlay render pass
    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend_mode = mode;
    }

    /// Text scale overlays and the game should use when honoring the
    /// configured rendering default (`defaultFontSize` in the config file)
    pub fn default_text_scale(&self) -> u32 {
        self.default_text_scale
    }

    /// Set the default text scale; zero is bumped to 1 so text stays visible
    pub fn set_default_text_scale(&mut self, scale: u32) {
        self.default_text_scale = scale.max(1);
    }

    // === Focus ===

    /// Give an overlay first claim on every input event
    ///
    /// The focused overlay is offered each event before the priority scan.
    /// Focus only matters while the overlay is active and visible.
    pub fn set_focus(&mut self, name: &str) -> Result<(), OverlayError> {
        if !self.entries.contains_key(name) {
            return Err(OverlayError::UnknownOverlay(name.to_string()));
        }
        self.focused = Some(name.to_string());
        Ok(())
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    pub fn focus(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    // === Derived orders ===

    /// All registered names in draw order (bottom to top)
    pub fn render_order(&mut self) -> &[String] {
        self.refresh_orders();
        &self.render_order
    }

    /// All registered names in input-routing order (first offered first)
    pub fn input_order(&mut self) -> &[String] {
        self.refresh_orders();
        &self.input_order
    }

    fn refresh_orders(&mut self) {
        if !self.orders_dirty {
            return;
        }

        let mut keys: Vec<(String, i32, i32, u64)> = self
            .entries
            .iter()
            .map(|(name, e)| (name.clone(), e.z_order, e.input_priority, e.sequence))
            .collect();

        keys.sort_by(|a, b| a.1.cmp(&b.1).then(a.3.cmp(&b.3)));
        self.render_order = keys.iter().map(|k| k.0.clone()).collect();

        keys.sort_by(|a, b| b.2.cmp(&a.2).then(a.3.cmp(&b.3)));
        self.input_order = keys.into_iter().map(|k| k.0).collect();

        self.orders_dirty = false;
    }

    // === Per-frame driving ===

    /// Update every active overlay
    ///
    /// Hidden overlays update too, so they stay current for when they are
    /// shown again. Iteration follows render order for determinism.
    pub fn update(&mut self, dt: f32) {
        self.refresh_orders();
        let order = self.render_order.clone();
        for name in &order {
            if let Some(entry) = self.entries.get_mut(name) {
                if entry.state.is_active() {
                    entry.overlay.update(dt);
                }
            }
        }
    }

    /// Render every active, visible overlay in ascending z-order
    ///
    /// The configured blend mode is applied for the pass and the canvas is
    /// reset to `BlendMode::None` afterwards; the world pass is assumed to
    /// draw unblended, since sdl2 exposes no getter to restore the caller's
    /// prior mode.
    pub fn render(&mut self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.refresh_orders();
        canvas.set_blend_mode(self.blend_mode);

        let order = self.render_order.clone();
        for name in &order {
            if let Some(entry) = self.entries.get(name) {
                if entry.is_interactive() {
                    entry.overlay.render(canvas)?;
                }
            }
        }

        canvas.set_blend_mode(BlendMode::None);
        Ok(())
    }

    /// Route an input event through the overlay stack
    ///
    /// The focused overlay (if any) is offered the event first, then active,
    /// visible overlays in descending input priority. Routing stops at the
    /// first consumer; its name is returned. `None` means the game should
    /// handle the event itself.
    pub fn dispatch_input(&mut self, event: &InputEvent) -> Option<String> {
        self.refresh_orders();

        if let Some(name) = self.focused.clone() {
            if self.offer(&name, event) {
                return Some(name);
            }
        }

        let order = self.input_order.clone();
        for name in order {
            if self.focused.as_deref() == Some(name.as_str()) {
                continue; // already offered
            }
            if self.offer(&name, event) {
                return Some(name);
            }
        }
        None
    }

    fn offer(&mut self, name: &str, event: &InputEvent) -> bool {
        match self.entries.get_mut(name) {
            Some(entry) if entry.is_interactive() => {
                entry.overlay.handle_input(event).is_consumed()
            }
            _ => false,
        }
    }
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputResponse;
    use sdl2::keyboard::Keycode;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records lifecycle calls into a shared log and consumes input on demand
    struct RecordingOverlay {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        consume: bool,
        fail_init: bool,
    }

    impl RecordingOverlay {
        fn new(tag: &'static str, log: &Rc<RefCell<Vec<String>>>, consume: bool) -> Box<Self> {
            Box::new(RecordingOverlay {
                tag,
                log: Rc::clone(log),
                consume,
                fail_init: false,
            })
        }

        fn failing(tag: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Box<Self> {
            Box::new(RecordingOverlay {
                tag,
                log: Rc::clone(log),
                consume: false,
                fail_init: true,
            })
        }

        fn push(&self, what: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.tag, what));
        }
    }

    impl Overlay for RecordingOverlay {
        fn on_initialize(&mut self) -> Result<(), String> {
            if self.fail_init {
                return Err("init refused".to_string());
            }
            self.push("init");
            Ok(())
        }

        fn on_activate(&mut self) {
            self.push("activate");
        }

        fn on_deactivate(&mut self) {
            self.push("deactivate");
        }

        fn on_cleanup(&mut self) {
            self.push("cleanup");
        }

        fn update(&mut self, _dt: f32) {
            self.push("update");
        }

        fn render(&self, _canvas: &mut Canvas<Window>) -> Result<(), String> {
            Ok(())
        }

        fn handle_input(&mut self, _event: &InputEvent) -> InputResponse {
            self.push("input");
            if self.consume {
                InputResponse::Consumed
            } else {
                InputResponse::Ignored
            }
        }
    }

    fn key_event() -> InputEvent {
        InputEvent::KeyDown {
            key: Keycode::Return,
            shift: false,
        }
    }

    fn settings(z: i32, priority: i32) -> OverlaySettings {
        OverlaySettings {
            z_order: z,
            input_priority: priority,
            ..Default::default()
        }
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("hud", RecordingOverlay::new("a", &log, false), Default::default())
            .unwrap();
        let err = manager
            .register("hud", RecordingOverlay::new("b", &log, false), Default::default())
            .unwrap_err();
        assert!(matches!(err, OverlayError::DuplicateName(_)));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_initialize_runs_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("hud", RecordingOverlay::new("a", &log, false), Default::default())
            .unwrap();

        assert_eq!(
            manager.lifecycle_state("hud"),
            Some(LifecycleState::Uninitialized)
        );

        manager.activate("hud").unwrap();
        manager.deactivate("hud").unwrap();
        manager.activate("hud").unwrap();

        let calls = log.borrow();
        assert_eq!(
            *calls,
            vec!["a:init", "a:activate", "a:deactivate", "a:activate"]
        );
    }

    #[test]
    fn test_activate_is_idempotent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("hud", RecordingOverlay::new("a", &log, false), Default::default())
            .unwrap();
        manager.activate("hud").unwrap();
        manager.activate("hud").unwrap();
        assert_eq!(*log.borrow(), vec!["a:init", "a:activate"]);
    }

    #[test]
    fn test_failed_initialization_stays_uninitialized() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("bad", RecordingOverlay::failing("x", &log), Default::default())
            .unwrap();

        let err = manager.activate("bad").unwrap_err();
        assert!(matches!(err, OverlayError::InitializationFailed { .. }));
        assert_eq!(
            manager.lifecycle_state("bad"),
            Some(LifecycleState::Uninitialized)
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_unregister_deactivates_then_cleans_up() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("hud", RecordingOverlay::new("a", &log, false), Default::default())
            .unwrap();
        manager.activate("hud").unwrap();
        manager.unregister("hud").unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["a:init", "a:activate", "a:deactivate", "a:cleanup"]
        );
        assert!(manager.is_empty());
    }

    #[test]
    fn test_unregister_uninitialized_skips_cleanup() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("hud", RecordingOverlay::new("a", &log, false), Default::default())
            .unwrap();
        manager.unregister("hud").unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_unregister_unknown_errors() {
        let mut manager = OverlayManager::new();
        assert!(matches!(
            manager.unregister("ghost"),
            Err(OverlayError::UnknownOverlay(_))
        ));
    }

    #[test]
    fn test_render_order_by_z_then_registration() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("menu", RecordingOverlay::new("m", &log, false), settings(100, 0))
            .unwrap();
        manager
            .register("hud", RecordingOverlay::new("h", &log, false), settings(0, 0))
            .unwrap();
        manager
            .register("debug", RecordingOverlay::new("d", &log, false), settings(100, 0))
            .unwrap();

        // Equal z: menu registered before debug, so menu draws first
        assert_eq!(manager.render_order(), &["hud", "menu", "debug"]);
    }

    #[test]
    fn test_input_order_by_priority_then_registration() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("hud", RecordingOverlay::new("h", &log, false), settings(0, 0))
            .unwrap();
        manager
            .register("menu", RecordingOverlay::new("m", &log, false), settings(0, 100))
            .unwrap();
        manager
            .register("dialog", RecordingOverlay::new("d", &log, false), settings(0, 100))
            .unwrap();

        // Equal priority: menu registered before dialog, so menu is offered first
        assert_eq!(manager.input_order(), &["menu", "dialog", "hud"]);
    }

    #[test]
    fn test_set_z_order_reorders() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("a", RecordingOverlay::new("a", &log, false), settings(0, 0))
            .unwrap();
        manager
            .register("b", RecordingOverlay::new("b", &log, false), settings(1, 0))
            .unwrap();

        assert_eq!(manager.render_order(), &["a", "b"]);
        manager.set_z_order("a", 5).unwrap();
        assert_eq!(manager.render_order(), &["b", "a"]);
    }

    #[test]
    fn test_dispatch_stops_at_consumer() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("hud", RecordingOverlay::new("h", &log, false), settings(0, 0))
            .unwrap();
        manager
            .register("menu", RecordingOverlay::new("m", &log, true), settings(0, 100))
            .unwrap();
        manager.activate("hud").unwrap();
        manager.activate("menu").unwrap();

        let consumer = manager.dispatch_input(&key_event());
        assert_eq!(consumer.as_deref(), Some("menu"));
        // The HUD never saw the event
        assert!(!log.borrow().iter().any(|c| c == "h:input"));
    }

    #[test]
    fn test_dispatch_skips_inactive_and_hidden() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("menu", RecordingOverlay::new("m", &log, true), settings(0, 100))
            .unwrap();
        manager
            .register("hud", RecordingOverlay::new("h", &log, true), settings(0, 0))
            .unwrap();

        // menu inactive: event falls through to hud
        manager.activate("hud").unwrap();
        assert_eq!(manager.dispatch_input(&key_event()).as_deref(), Some("hud"));

        // hidden hud no longer receives input
        manager.set_visible("hud", false).unwrap();
        assert_eq!(manager.dispatch_input(&key_event()), None);
    }

    #[test]
    fn test_dispatch_unconsumed_returns_none() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("hud", RecordingOverlay::new("h", &log, false), settings(0, 0))
            .unwrap();
        manager.activate("hud").unwrap();
        assert_eq!(manager.dispatch_input(&key_event()), None);
        // offered, but not consumed
        assert!(log.borrow().iter().any(|c| c == "h:input"));
    }

    #[test]
    fn test_focus_offered_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("hud", RecordingOverlay::new("h", &log, true), settings(0, 0))
            .unwrap();
        manager
            .register("menu", RecordingOverlay::new("m", &log, true), settings(0, 100))
            .unwrap();
        manager.activate("hud").unwrap();
        manager.activate("menu").unwrap();

        // Without focus the menu (higher priority) wins
        assert_eq!(manager.dispatch_input(&key_event()).as_deref(), Some("menu"));

        // Focus flips it to the HUD
        manager.set_focus("hud").unwrap();
        assert_eq!(manager.dispatch_input(&key_event()).as_deref(), Some("hud"));

        manager.clear_focus();
        assert_eq!(manager.focus(), None);
    }

    #[test]
    fn test_unregister_clears_focus() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("menu", RecordingOverlay::new("m", &log, true), Default::default())
            .unwrap();
        manager.set_focus("menu").unwrap();
        manager.unregister("menu").unwrap();
        assert_eq!(manager.focus(), None);
    }

    #[test]
    fn test_update_only_touches_active() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("a", RecordingOverlay::new("a", &log, false), Default::default())
            .unwrap();
        manager
            .register("b", RecordingOverlay::new("b", &log, false), Default::default())
            .unwrap();
        manager.activate("a").unwrap();

        manager.update(0.016);
        assert!(log.borrow().iter().any(|c| c == "a:update"));
        assert!(!log.borrow().iter().any(|c| c == "b:update"));
    }

    #[test]
    fn test_hidden_overlays_still_update() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("a", RecordingOverlay::new("a", &log, false), Default::default())
            .unwrap();
        manager.activate("a").unwrap();
        manager.set_visible("a", false).unwrap();

        manager.update(0.016);
        assert!(log.borrow().iter().any(|c| c == "a:update"));
    }

    #[test]
    fn test_should_pause_game() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register(
                "menu",
                RecordingOverlay::new("m", &log, false),
                OverlaySettings {
                    pause_game: true,
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(!manager.should_pause_game());
        manager.activate("menu").unwrap();
        assert!(manager.should_pause_game());
        manager.deactivate("menu").unwrap();
        assert!(!manager.should_pause_game());
    }

    #[test]
    fn test_toggle() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("debug", RecordingOverlay::new("d", &log, false), Default::default())
            .unwrap();

        assert!(manager.toggle("debug").unwrap());
        assert!(manager.is_active("debug"));
        assert!(!manager.toggle("debug").unwrap());
        assert!(!manager.is_active("debug"));
    }

    #[test]
    fn test_default_text_scale() {
        let mut manager = OverlayManager::new();
        assert_eq!(manager.default_text_scale(), 2);
        manager.set_default_text_scale(3);
        assert_eq!(manager.default_text_scale(), 3);
        // Zero would render nothing; it is bumped to the minimum
        manager.set_default_text_scale(0);
        assert_eq!(manager.default_text_scale(), 1);
    }

    #[test]
    fn test_clear_cleans_up_everything() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = OverlayManager::new();
        manager
            .register("a", RecordingOverlay::new("a", &log, false), Default::default())
            .unwrap();
        manager
            .register("b", RecordingOverlay::new("b", &log, false), Default::default())
            .unwrap();
        manager.activate("a").unwrap();

        manager.clear();
        assert!(manager.is_empty());
        assert!(log.borrow().iter().any(|c| c == "a:deactivate"));
        assert!(log.borrow().iter().any(|c| c == "a:cleanup"));
        // b was never initialized, so no cleanup for it
        assert!(!log.borrow().iter().any(|c| c == "b:cleanup"));
    }
}
