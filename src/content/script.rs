use crate::content::world::ContentWorldId;

/// Point in the page lifecycle at which a user script is injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionTime {
    /// Before the document starts parsing
    DocumentStart,
    /// After the document has finished parsing
    DocumentEnd,
}

/// A host-supplied script injected into pages rendered under a controller.
#[derive(Debug, Clone)]
pub struct UserScript {
    /// Script source text
    pub source: String,
    /// When the script runs
    pub injection_time: InjectionTime,
    /// World the script executes in
    pub world: ContentWorldId,
    /// Restrict injection to the main frame
    pub main_frame_only: bool,
}

impl UserScript {
    pub fn new(source: impl Into<String>, injection_time: InjectionTime, world: ContentWorldId) -> Self {
        Self {
            source: source.into(),
            injection_time,
            world,
            main_frame_only: false,
        }
    }
}
