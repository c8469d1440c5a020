//! Input events and SDL2 event translation
//!
//! The overlay system routes a small, backend-independent event type instead
//! of raw `sdl2::event::Event`. The game loop translates each SDL2 event with
//! [`translate_event`] and hands the result to
//! [`OverlayManager::dispatch_input`](crate::manager::OverlayManager::dispatch_input).
//! Events no overlay consumes fall back to the game's own bindings.

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod};
use sdl2::mouse::MouseButton;

/// An input event routed through the overlay stack
///
/// Key and button identifiers reuse the SDL2 types directly; translating
/// them into yet another enum would just duplicate the mapping tables.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown { key: Keycode, shift: bool },
    KeyUp { key: Keycode },
    MouseButtonDown { button: MouseButton, x: i32, y: i32 },
    MouseButtonUp { button: MouseButton, x: i32, y: i32 },
    MouseMotion { x: i32, y: i32 },
    /// Vertical wheel movement; positive scrolls away from the user
    MouseWheel { delta: i32 },
}

/// Result of offering an event to an overlay
///
/// `Consumed` stops propagation to lower-priority overlays and to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResponse {
    Consumed,
    Ignored,
}

impl InputResponse {
    pub fn is_consumed(&self) -> bool {
        matches!(self, InputResponse::Consumed)
    }
}

/// Translate a raw SDL2 event into an overlay input event
///
/// Returns `None` for event classes the overlay system does not route
/// (quit, window events, text editing, controller input). Key events
/// without a keycode are dropped.
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::KeyDown {
            keycode: Some(key),
            keymod,
            ..
        } => Some(InputEvent::KeyDown {
            key: *key,
            shift: keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD),
        }),
        Event::KeyUp {
            keycode: Some(key), ..
        } => Some(InputEvent::KeyUp { key: *key }),
        Event::MouseButtonDown {
            mouse_btn, x, y, ..
        } => Some(InputEvent::MouseButtonDown {
            button: *mouse_btn,
            x: *x,
            y: *y,
        }),
        Event::MouseButtonUp {
            mouse_btn, x, y, ..
        } => Some(InputEvent::MouseButtonUp {
            button: *mouse_btn,
            x: *x,
            y: *y,
        }),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::MouseMotion { x: *x, y: *y }),
        Event::MouseWheel { y, .. } => Some(InputEvent::MouseWheel { delta: *y }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keydown_translation() {
        let event = Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(Keycode::Escape),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(
            translate_event(&event),
            Some(InputEvent::KeyDown {
                key: Keycode::Escape,
                shift: false,
            })
        );
    }

    #[test]
    fn test_shift_modifier_detected() {
        let event = Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(Keycode::Up),
            scancode: None,
            keymod: Mod::LSHIFTMOD,
            repeat: false,
        };
        assert_eq!(
            translate_event(&event),
            Some(InputEvent::KeyDown {
                key: Keycode::Up,
                shift: true,
            })
        );
    }

    #[test]
    fn test_keydown_without_keycode_dropped() {
        let event = Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: None,
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(translate_event(&event), None);
    }

    #[test]
    fn test_mouse_button_translation() {
        let event = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 42,
            y: 17,
        };
        assert_eq!(
            translate_event(&event),
            Some(InputEvent::MouseButtonDown {
                button: MouseButton::Left,
                x: 42,
                y: 17,
            })
        );
    }

    #[test]
    fn test_unrouted_events_dropped() {
        assert_eq!(translate_event(&Event::Quit { timestamp: 0 }), None);
    }

    #[test]
    fn test_response_is_consumed() {
        assert!(InputResponse::Consumed.is_consumed());
        assert!(!InputResponse::Ignored.is_consumed());
    }
}
