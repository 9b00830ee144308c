use log::trace;

use crate::config::ViewConfig;
use crate::event::NeutralEvent;
use crate::input::legacy::{
    self, LegacyEvent, LegacyKeyboardEvent, LegacyPointerEvent, LegacyPointerKind,
};
use crate::input::modern::{
    self, InputSource, KeyboardKind, ModernEvent, PointerKind, SurfaceId, EVENT_TIME_UNKNOWN,
};

/// Native event handed to the engine's event entry points. A tagged union of
/// the two backend models; exactly one variant is ever constructed for a
/// given dispatch, matching the backend the view is attached to.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeEvent {
    Modern(ModernEvent),
    Legacy(LegacyEvent),
}

/// Per-view strategy turning neutral descriptors into one backend's native
/// events. The implementation is selected when a surface attaches or
/// detaches, not re-decided on every dispatch.
pub trait EventSink {
    /// Name of the sink, for diagnostics.
    fn name(&self) -> &str;

    /// Build the native keyboard event, or `None` when the view has no
    /// backend to deliver to.
    ///
    /// # Panics
    ///
    /// Panics when handed a pointer variant. That is a contract violation by
    /// the caller, not a runtime condition to recover from.
    fn keyboard_event(&self, event: &NeutralEvent<'_>, config: &ViewConfig) -> Option<NativeEvent>;

    /// Build the native pointer event, or `None` when the view has no
    /// backend to deliver to.
    ///
    /// # Panics
    ///
    /// Panics when handed a keyboard variant.
    fn pointer_event(&self, event: &NeutralEvent<'_>, config: &ViewConfig) -> Option<NativeEvent>;
}

/// Sink for a view attached to a modern windowing surface.
pub struct ModernSink {
    surface: SurfaceId,
}

impl ModernSink {
    pub fn new(surface: SurfaceId) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }
}

impl EventSink for ModernSink {
    fn name(&self) -> &str {
        "modern"
    }

    fn keyboard_event(&self, event: &NeutralEvent<'_>, _config: &ViewConfig) -> Option<NativeEvent> {
        let (kind, modifiers, key_code, hardware_key_code, text) = match *event {
            NeutralEvent::KeyDown { modifiers, key_code, hardware_key_code, text } => {
                (KeyboardKind::KeyDown, modifiers, key_code, hardware_key_code, text)
            }
            NeutralEvent::KeyUp { modifiers, key_code, hardware_key_code, text } => {
                (KeyboardKind::KeyUp, modifiers, key_code, hardware_key_code, text)
            }
            ref other => panic!("keyboard dispatch received a pointer event: {other:?}"),
        };

        Some(NativeEvent::Modern(ModernEvent::Keyboard {
            kind,
            surface: self.surface,
            source: InputSource::Keyboard,
            time: EVENT_TIME_UNKNOWN,
            modifiers: modern::map_modifiers(modifiers),
            hardware_key_code,
            key_code,
            text: text.to_string(),
        }))
    }

    fn pointer_event(&self, event: &NeutralEvent<'_>, _config: &ViewConfig) -> Option<NativeEvent> {
        let native = match *event {
            NeutralEvent::PointerDown { modifiers, button, x, y } => ModernEvent::PointerButton {
                kind: PointerKind::Down,
                surface: self.surface,
                source: InputSource::Mouse,
                time: EVENT_TIME_UNKNOWN,
                modifiers: modern::map_modifiers(modifiers),
                button: modern::map_button(button),
                x,
                y,
                press_count: 1,
            },
            NeutralEvent::PointerUp { modifiers, button, x, y } => ModernEvent::PointerButton {
                kind: PointerKind::Up,
                surface: self.surface,
                source: InputSource::Mouse,
                time: EVENT_TIME_UNKNOWN,
                modifiers: modern::map_modifiers(modifiers),
                button: modern::map_button(button),
                x,
                y,
                press_count: 0,
            },
            NeutralEvent::PointerMove { modifiers, x, y } => ModernEvent::PointerMove {
                surface: self.surface,
                source: InputSource::Mouse,
                time: EVENT_TIME_UNKNOWN,
                modifiers: modern::map_modifiers(modifiers),
                x,
                y,
                delta_x: 0.0,
                delta_y: 0.0,
            },
            ref other => panic!("pointer dispatch received a keyboard event: {other:?}"),
        };

        Some(NativeEvent::Modern(native))
    }
}

/// Sink for a view driven through the legacy input protocol.
pub struct LegacySink;

impl EventSink for LegacySink {
    fn name(&self) -> &str {
        "legacy"
    }

    fn keyboard_event(&self, event: &NeutralEvent<'_>, _config: &ViewConfig) -> Option<NativeEvent> {
        let (pressed, modifiers, key_code, hardware_key_code, text) = match *event {
            NeutralEvent::KeyDown { modifiers, key_code, hardware_key_code, text } => {
                (true, modifiers, key_code, hardware_key_code, text)
            }
            NeutralEvent::KeyUp { modifiers, key_code, hardware_key_code, text } => {
                (false, modifiers, key_code, hardware_key_code, text)
            }
            ref other => panic!("keyboard dispatch received a pointer event: {other:?}"),
        };

        Some(NativeEvent::Legacy(LegacyEvent::Keyboard(LegacyKeyboardEvent {
            time: 0,
            key_code,
            hardware_key_code,
            modifiers: legacy::map_modifiers(modifiers),
            pressed,
            text: text.to_string(),
        })))
    }

    fn pointer_event(&self, event: &NeutralEvent<'_>, config: &ViewConfig) -> Option<NativeEvent> {
        // Motion events carry the inert button code directly; the button
        // table is only consulted for press/release.
        let (kind, state, button, modifiers, x, y) = match *event {
            NeutralEvent::PointerDown { modifiers, button, x, y } => {
                (LegacyPointerKind::Button, 1, legacy::map_button(button), modifiers, x, y)
            }
            NeutralEvent::PointerUp { modifiers, button, x, y } => {
                (LegacyPointerKind::Button, 0, legacy::map_button(button), modifiers, x, y)
            }
            NeutralEvent::PointerMove { modifiers, x, y } => {
                (LegacyPointerKind::Motion, 0, legacy::BUTTON_NONE, modifiers, x, y)
            }
            ref other => panic!("pointer dispatch received a keyboard event: {other:?}"),
        };

        Some(NativeEvent::Legacy(LegacyEvent::Pointer(LegacyPointerEvent {
            kind,
            time: 0,
            x: x as i32,
            y: y as i32,
            button,
            state,
            modifiers: legacy::map_modifiers(modifiers),
            device_scale_factor: config.device_scale_factor,
        })))
    }
}

/// Sink for a view with no attached backend. Every dispatch is a silent
/// no-op so the host-facing surface stays stable across configurations.
pub struct NullSink;

impl EventSink for NullSink {
    fn name(&self) -> &str {
        "null"
    }

    fn keyboard_event(&self, _event: &NeutralEvent<'_>, _config: &ViewConfig) -> Option<NativeEvent> {
        trace!("keyboard event dropped: view is not attached to a backend");
        None
    }

    fn pointer_event(&self, _event: &NeutralEvent<'_>, _config: &ViewConfig) -> Option<NativeEvent> {
        trace!("pointer event dropped: view is not attached to a backend");
        None
    }
}
