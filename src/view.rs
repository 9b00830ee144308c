use log::debug;

use crate::config::ViewConfig;
use crate::event::NeutralEvent;
use crate::input::modern::SurfaceId;
use crate::input::sink::{EventSink, LegacySink, ModernSink, NativeEvent, NullSink};

/// Engine-side view collaborator. The engine object behind this trait must
/// stay valid and mutable for the duration of each call; nothing is retained
/// across calls.
pub trait ViewEndpoint {
    /// Deliver a native keyboard event to the engine's input pipeline.
    fn handle_keyboard_event(&mut self, event: NativeEvent);

    /// Deliver a native mouse/pointer event to the engine's input pipeline.
    fn handle_mouse_event(&mut self, event: NativeEvent);
}

/// Host-facing handle for one rendering surface of the engine.
///
/// A view is attached to at most one windowing backend at a time; the active
/// [`EventSink`] is swapped on attach/detach rather than re-selected on every
/// dispatch. All calls on a given view must come from the single logical
/// thread that owns it; there is no internal locking.
pub struct PageView {
    endpoint: Box<dyn ViewEndpoint>,
    sink: Box<dyn EventSink>,
    modern_surface: Option<SurfaceId>,
    config: ViewConfig,
}

impl PageView {
    /// Create a detached view over the given engine endpoint. Input
    /// dispatches are no-ops until a backend is attached.
    pub fn new(endpoint: Box<dyn ViewEndpoint>, config: ViewConfig) -> Self {
        Self {
            endpoint,
            sink: Box::new(NullSink),
            modern_surface: None,
            config,
        }
    }

    /// Attach a modern windowing surface. Subsequent dispatches construct
    /// modern events stamped with this surface's id.
    pub fn attach_modern_surface(&mut self, surface: SurfaceId) {
        debug!("view attached to modern surface {surface:?}");
        self.modern_surface = Some(surface);
        self.sink = Box::new(ModernSink::new(surface));
    }

    /// Attach the legacy input protocol. Subsequent dispatches construct
    /// legacy events.
    pub fn attach_legacy_backend(&mut self) {
        debug!("view attached to legacy input backend");
        self.modern_surface = None;
        self.sink = Box::new(LegacySink);
    }

    /// Detach from any backend; dispatches become silent no-ops.
    pub fn detach(&mut self) {
        debug!("view detached from {} backend", self.sink.name());
        self.modern_surface = None;
        self.sink = Box::new(NullSink);
    }

    /// The modern surface currently attached, if any.
    pub fn attached_modern_surface(&self) -> Option<SurfaceId> {
        self.modern_surface
    }

    /// Name of the active event sink, for diagnostics.
    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ViewConfig {
        &mut self.config
    }

    /// Dispatch a neutral keyboard event to the engine through the active
    /// backend. A detached view swallows the event.
    ///
    /// # Panics
    ///
    /// Panics when `event` is a pointer variant and a backend is attached;
    /// see [`EventSink::keyboard_event`].
    pub fn dispatch_keyboard(&mut self, event: &NeutralEvent<'_>) {
        if let Some(native) = self.sink.keyboard_event(event, &self.config) {
            self.endpoint.handle_keyboard_event(native);
        }
    }

    /// Dispatch a neutral pointer event to the engine through the active
    /// backend. A detached view swallows the event.
    ///
    /// # Panics
    ///
    /// Panics when `event` is a keyboard variant and a backend is attached.
    pub fn dispatch_pointer(&mut self, event: &NeutralEvent<'_>) {
        if let Some(native) = self.sink.pointer_event(event, &self.config) {
            self.endpoint.handle_mouse_event(native);
        }
    }
}
