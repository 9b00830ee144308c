use bitflags::bitflags;

bitflags! {
    /// Platform-neutral keyboard modifier mask accepted at the API boundary.
    ///
    /// Bits outside these five are not part of the neutral contract and never
    /// make it into a backend-native mask.
    pub struct Modifiers: u32 {
        const CONTROL = 1 << 0;
        const SHIFT = 1 << 1;
        const ALT = 1 << 2;
        const META = 1 << 3;
        const CAPS_LOCK = 1 << 4;
    }
}

/// Mouse button carried by a neutral pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// No button involved (e.g. a plain move)
    None,
    /// Primary button
    Left,
    /// Middle button (usually the wheel)
    Middle,
    /// Secondary button
    Right,
    /// Forward-compatible extension code; both backend tables pass the raw
    /// value through unchanged rather than rejecting it.
    Other(u32),
}

/// Platform-neutral input event descriptor handed to the dispatch entry
/// points. Owned by the caller for the duration of the call; the `text`
/// payload is a borrowed view and is copied, never retained.
#[derive(Debug, Clone)]
pub enum NeutralEvent<'a> {
    /// A key was pressed
    KeyDown {
        /// Active modifier mask
        modifiers: Modifiers,
        /// Translated key code
        key_code: u32,
        /// Untranslated hardware key code
        hardware_key_code: u32,
        /// Text produced by the key, if any
        text: &'a str,
    },
    /// A key was released
    KeyUp {
        /// Active modifier mask
        modifiers: Modifiers,
        /// Translated key code
        key_code: u32,
        /// Untranslated hardware key code
        hardware_key_code: u32,
        /// Text produced by the key, if any
        text: &'a str,
    },
    /// A pointer button was pressed
    PointerDown {
        /// Active modifier mask
        modifiers: Modifiers,
        /// The button that was pressed
        button: MouseButton,
        /// The x coordinate of the pointer position
        x: f64,
        /// The y coordinate of the pointer position
        y: f64,
    },
    /// A pointer button was released
    PointerUp {
        /// Active modifier mask
        modifiers: Modifiers,
        /// The button that was released
        button: MouseButton,
        /// The x coordinate of the pointer position
        x: f64,
        /// The y coordinate of the pointer position
        y: f64,
    },
    /// The pointer moved to a new position
    PointerMove {
        /// Active modifier mask
        modifiers: Modifiers,
        /// The x coordinate of the new position
        x: f64,
        /// The y coordinate of the new position
        y: f64,
    },
}
