use bitflags::bitflags;
use uuid::Uuid;

use crate::event::{Modifiers, MouseButton};

/// Timestamp value used when the neutral event carries no time information.
/// The modern backend treats it as "unknown" and falls back to its own clock.
pub const EVENT_TIME_UNKNOWN: u32 = 0;

/// Modern button codes. Primary/middle/secondary follow the modern backend's
/// numbering, which differs from the legacy protocol's historical table.
pub const BUTTON_NONE: u32 = 0;
pub const BUTTON_PRIMARY: u32 = 1;
pub const BUTTON_MIDDLE: u32 = 2;
pub const BUTTON_SECONDARY: u32 = 3;

bitflags! {
    /// Modifier bit layout of the modern windowing backend.
    pub struct ModernModifiers: u32 {
        const SHIFT = 1 << 0;
        const CAPS_LOCK = 1 << 1;
        const CONTROL = 1 << 2;
        const ALT = 1 << 3;
        const META = 1 << 28;
    }
}

/// Identifier of a modern windowing surface attached to a view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SurfaceId(Uuid);

impl SurfaceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

/// Device class the modern backend tags every event with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    Mouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardKind {
    KeyDown,
    KeyUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Up,
}

/// Event representation of the modern windowing backend. Constructed fresh
/// per dispatch and handed straight to the engine; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum ModernEvent {
    Keyboard {
        kind: KeyboardKind,
        surface: SurfaceId,
        source: InputSource,
        time: u32,
        modifiers: ModernModifiers,
        hardware_key_code: u32,
        key_code: u32,
        /// Text produced by the key, copied out of the caller's payload
        text: String,
    },
    PointerButton {
        kind: PointerKind,
        surface: SurfaceId,
        source: InputSource,
        time: u32,
        modifiers: ModernModifiers,
        button: u32,
        x: f64,
        y: f64,
        /// 1 on press, 0 on release
        press_count: u32,
    },
    PointerMove {
        surface: SurfaceId,
        source: InputSource,
        time: u32,
        modifiers: ModernModifiers,
        x: f64,
        y: f64,
        delta_x: f64,
        delta_y: f64,
    },
}

/// Translate the neutral modifier mask into the modern backend's layout.
/// Pure OR-reduction: each set neutral flag contributes exactly one modern
/// flag, and nothing else is set.
pub fn map_modifiers(modifiers: Modifiers) -> ModernModifiers {
    let mut out = ModernModifiers::empty();
    if modifiers.contains(Modifiers::CONTROL) {
        out |= ModernModifiers::CONTROL;
    }
    if modifiers.contains(Modifiers::SHIFT) {
        out |= ModernModifiers::SHIFT;
    }
    if modifiers.contains(Modifiers::ALT) {
        out |= ModernModifiers::ALT;
    }
    if modifiers.contains(Modifiers::META) {
        out |= ModernModifiers::META;
    }
    if modifiers.contains(Modifiers::CAPS_LOCK) {
        out |= ModernModifiers::CAPS_LOCK;
    }
    out
}

/// Translate the neutral button into the modern backend's code. Extension
/// codes pass through unchanged.
pub fn map_button(button: MouseButton) -> u32 {
    match button {
        MouseButton::Left => BUTTON_PRIMARY,
        MouseButton::Middle => BUTTON_MIDDLE,
        MouseButton::Right => BUTTON_SECONDARY,
        MouseButton::None => BUTTON_NONE,
        MouseButton::Other(code) => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_mapping_is_injective_per_flag() {
        let singles = [
            (Modifiers::CONTROL, ModernModifiers::CONTROL),
            (Modifiers::SHIFT, ModernModifiers::SHIFT),
            (Modifiers::ALT, ModernModifiers::ALT),
            (Modifiers::META, ModernModifiers::META),
            (Modifiers::CAPS_LOCK, ModernModifiers::CAPS_LOCK),
        ];

        let mut seen = Vec::new();
        for (neutral, expected) in singles {
            let mapped = map_modifiers(neutral);
            assert_eq!(mapped, expected);
            assert_eq!(mapped.bits().count_ones(), 1);
            assert!(!seen.contains(&mapped), "two neutral flags share {mapped:?}");
            seen.push(mapped);
        }
    }

    #[test]
    fn modifier_mapping_is_an_or_reduction() {
        let all = Modifiers::all();
        let expected = ModernModifiers::CONTROL
            | ModernModifiers::SHIFT
            | ModernModifiers::ALT
            | ModernModifiers::META
            | ModernModifiers::CAPS_LOCK;
        assert_eq!(map_modifiers(all), expected);
        assert_eq!(map_modifiers(Modifiers::empty()), ModernModifiers::empty());
    }

    #[test]
    fn button_table_and_identity_fallback() {
        assert_eq!(map_button(MouseButton::Left), BUTTON_PRIMARY);
        assert_eq!(map_button(MouseButton::Middle), BUTTON_MIDDLE);
        assert_eq!(map_button(MouseButton::Right), BUTTON_SECONDARY);
        assert_eq!(map_button(MouseButton::None), BUTTON_NONE);
        assert_eq!(map_button(MouseButton::Other(42)), 42);
    }
}
