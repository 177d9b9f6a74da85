//! Mouse input vocabulary and drag-gesture state
//!
//! The scene's mouse handlers speak in these types so the host toolkit
//! only has to translate its own event structs at the boundary. Gesture
//! rules follow the original viewer: left drag pans, Ctrl+left drag draws
//! a selection marquee, the wheel zooms at the cursor.

use bitflags::bitflags;
use crate::types::Vector2;

bitflags! {
    /// Keyboard modifiers held during a mouse event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const CONTROL = 0b0001;
        const SHIFT = 0b0010;
        const ALT = 0b0100;
    }
}

/// Mouse buttons the scene reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// The in-flight drag gesture, if any
///
/// Decided at press time from the modifier state and carried until
/// release. Positions are screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No button held
    Idle,
    /// Left drag without Ctrl: panning, tracking the last cursor position
    Pan { last: Vector2 },
    /// Ctrl+left drag: rubber-band selection from `anchor` to `current`
    Marquee { anchor: Vector2, current: Vector2 },
}

impl DragState {
    /// Check whether a gesture is in flight
    pub fn is_active(&self) -> bool {
        !matches!(self, DragState::Idle)
    }
}

impl Default for DragState {
    fn default() -> Self {
        DragState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_flags() {
        let mods = Modifiers::CONTROL | Modifiers::SHIFT;
        assert!(mods.contains(Modifiers::CONTROL));
        assert!(!mods.contains(Modifiers::ALT));
        assert!(Modifiers::default().is_empty());
    }

    #[test]
    fn test_drag_state_activity() {
        assert!(!DragState::Idle.is_active());
        assert!(DragState::Pan { last: Vector2::ZERO }.is_active());
        assert!(DragState::Marquee {
            anchor: Vector2::ZERO,
            current: Vector2::new(5.0, 5.0),
        }
        .is_active());
    }
}
