use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a content world. Treat as an opaque handle; the internal
/// representation may change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentWorldId(Uuid);

impl ContentWorldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContentWorldId {
    fn default() -> Self {
        Self::new()
    }
}

/// An isolation scope for script execution, distinguishing page scripts from
/// injected host scripts.
///
/// Worlds are constructed explicitly by the host's session object and passed
/// to the controllers that need them; there is no process-wide singleton
/// world.
#[derive(Debug, Clone)]
pub struct ContentWorld {
    id: ContentWorldId,
    name: String,
}

impl ContentWorld {
    /// The world page content runs in.
    pub fn page() -> Self {
        Self::named("page")
    }

    /// A named isolated world for injected scripts.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: ContentWorldId::new(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> ContentWorldId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
