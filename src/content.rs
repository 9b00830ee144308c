pub mod controller;
pub mod filter;
pub mod listener;
pub mod message;
pub mod script;
pub mod world;

pub use controller::{ScriptMessageClient, UserContentController};
pub use filter::RuleList;
pub use listener::{CompletionListener, ReplyOutcome, ReplyReceiver};
pub use message::{FrameId, FrameInfo, PageId, ScriptMessage};
pub use script::{InjectionTime, UserScript};
pub use world::{ContentWorld, ContentWorldId};
