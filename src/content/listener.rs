use log::warn;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::errors::ReplyError;
use crate::value::RawScriptValue;

/// Outcome delivered to the continuation waiting on a script-message reply.
pub type ReplyOutcome = Result<Value, ReplyError>;

/// Single-use adapter carrying a handler's reply back to the delivery that
/// invoked it.
///
/// `resolve` consumes the listener, so resolving twice is not representable.
/// Dropping an unresolved listener closes the channel and the waiting side
/// observes [`ReplyError::Dropped`]; an abandoned reply never turns into a
/// silent success.
#[derive(Debug)]
pub struct CompletionListener {
    reply_tx: oneshot::Sender<ReplyOutcome>,
}

impl CompletionListener {
    /// Create a listener together with the receiving half handed to the
    /// engine-side delivery.
    pub(crate) fn channel() -> (Self, ReplyReceiver) {
        let (reply_tx, reply_rx) = oneshot::channel();
        (Self { reply_tx }, ReplyReceiver { reply_rx })
    }

    /// Resolve the pending delivery.
    ///
    /// With `Some(raw)` the value is interpreted as the bridge's result
    /// shape; a value that cannot be marshalled becomes
    /// [`ReplyError::Unsupported`] on the waiting side rather than being
    /// dropped. `None` means the handler replied with nothing: an empty
    /// success, distinct from a shape mismatch.
    pub fn resolve(self, reply: Option<RawScriptValue>) {
        let outcome = match reply {
            None => Ok(Value::Null),
            Some(raw) => raw.extract().ok_or(ReplyError::Unsupported),
        };

        if self.reply_tx.send(outcome).is_err() {
            warn!("script message reply arrived after the delivery was abandoned");
        }
    }
}

/// Receiving half of the one-shot reply channel, owned by the engine-side
/// delivery that triggered the message.
#[derive(Debug)]
pub struct ReplyReceiver {
    reply_rx: oneshot::Receiver<ReplyOutcome>,
}

impl ReplyReceiver {
    /// Await the handler's reply. A listener dropped without resolving
    /// yields [`ReplyError::Dropped`]. No timeout is imposed here; a handler
    /// that holds its listener forever leaves this future pending.
    pub async fn outcome(self) -> ReplyOutcome {
        match self.reply_rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(ReplyError::Dropped),
        }
    }
}
