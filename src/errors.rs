#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Handler name already registered: {0}")]
    DuplicateHandler(String),
}

/// Failure delivered through the reply path of a script message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplyError {
    #[error("Reply value cannot cross the script boundary")]
    Unsupported,

    #[error("Reply listener dropped without resolving")]
    Dropped,
}
