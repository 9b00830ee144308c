pub mod config;
pub mod content;
pub mod errors;
pub mod event;
pub mod input;
pub mod value;
pub mod view;

pub use config::ViewConfig;
pub use content::{
    CompletionListener, ContentWorld, ContentWorldId, FrameInfo, PageId, ReplyReceiver,
    ScriptMessage, ScriptMessageClient, UserContentController,
};
pub use errors::{RegistrationError, ReplyError};
pub use event::{Modifiers, MouseButton, NeutralEvent};
pub use value::RawScriptValue;
pub use view::{PageView, ViewEndpoint};
