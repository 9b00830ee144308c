use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::content::world::ContentWorldId;

/// Identifier of the page a message originated from. Opaque handle; the
/// internal representation may change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(Uuid);

impl PageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier of a frame within a page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(Uuid);

impl FrameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FrameId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity of the frame a message originated from, captured at post time.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInfo {
    pub id: FrameId,
    pub is_main_frame: bool,
    /// Document URL of the frame when the message was posted
    pub url: Option<Url>,
}

impl FrameInfo {
    pub fn main_frame(url: Option<Url>) -> Self {
        Self {
            id: FrameId::new(),
            is_main_frame: true,
            url,
        }
    }
}

/// A message posted by in-page script to a named handler.
///
/// Built per inbound message and moved into the host callback; the bridge
/// keeps nothing once the callback returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptMessage {
    /// The marshalled message body
    pub value: Value,
    /// Page the message came from
    pub page: PageId,
    /// Frame the message came from
    pub frame: FrameInfo,
    /// Name of the handler the message was posted to
    pub name: String,
    /// World the posting script ran in
    pub world: ContentWorldId,
}
