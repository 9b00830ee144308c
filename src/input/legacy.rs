use crate::event::{Modifiers, MouseButton};

/// Modifier bit layout of the legacy input protocol. Independent from the
/// modern layout; the two tables only agree where neutral semantics do.
pub const MODIFIER_CONTROL: u32 = 1 << 0;
pub const MODIFIER_SHIFT: u32 = 1 << 1;
pub const MODIFIER_ALT: u32 = 1 << 2;
pub const MODIFIER_META: u32 = 1 << 3;
pub const MODIFIER_CAPS_LOCK: u32 = 1 << 4;

/// Legacy button codes. Historical X11-style numbering: right is 2 and
/// middle is 3, unlike the modern backend.
pub const BUTTON_NONE: u32 = 0;
pub const BUTTON_LEFT: u32 = 1;
pub const BUTTON_RIGHT: u32 = 2;
pub const BUTTON_MIDDLE: u32 = 3;

/// Keyboard event of the legacy input protocol, field for field.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyKeyboardEvent {
    /// Event time; 0 when unknown
    pub time: u32,
    /// Translated key code
    pub key_code: u32,
    /// Untranslated hardware key code
    pub hardware_key_code: u32,
    /// Modifier mask in the legacy layout
    pub modifiers: u32,
    /// True on key down, false on key up
    pub pressed: bool,
    /// Text produced by the key, copied out of the caller's payload
    pub text: String,
}

/// Kind of a legacy pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyPointerKind {
    /// Button press or release
    Button,
    /// Pointer motion
    Motion,
}

/// Pointer event of the legacy input protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyPointerEvent {
    pub kind: LegacyPointerKind,
    /// Event time; 0 when unknown
    pub time: u32,
    pub x: i32,
    pub y: i32,
    /// Button code; [`BUTTON_NONE`] for motion events
    pub button: u32,
    /// 1 on press, 0 on release or motion
    pub state: u32,
    /// Modifier mask in the legacy layout
    pub modifiers: u32,
    /// Scale the engine applies when converting to page coordinates
    pub device_scale_factor: f32,
}

/// Events of the legacy input protocol, as the engine entry point takes them.
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyEvent {
    Keyboard(LegacyKeyboardEvent),
    Pointer(LegacyPointerEvent),
}

/// Translate the neutral modifier mask into the legacy layout. Pure
/// OR-reduction over the five recognized flags.
pub fn map_modifiers(modifiers: Modifiers) -> u32 {
    let mut out = 0;
    if modifiers.contains(Modifiers::CONTROL) {
        out |= MODIFIER_CONTROL;
    }
    if modifiers.contains(Modifiers::SHIFT) {
        out |= MODIFIER_SHIFT;
    }
    if modifiers.contains(Modifiers::ALT) {
        out |= MODIFIER_ALT;
    }
    if modifiers.contains(Modifiers::META) {
        out |= MODIFIER_META;
    }
    if modifiers.contains(Modifiers::CAPS_LOCK) {
        out |= MODIFIER_CAPS_LOCK;
    }
    out
}

/// Translate the neutral button into the legacy code. Extension codes pass
/// through unchanged.
pub fn map_button(button: MouseButton) -> u32 {
    match button {
        MouseButton::Left => BUTTON_LEFT,
        MouseButton::Middle => BUTTON_MIDDLE,
        MouseButton::Right => BUTTON_RIGHT,
        MouseButton::None => BUTTON_NONE,
        MouseButton::Other(code) => code,
    }
}
