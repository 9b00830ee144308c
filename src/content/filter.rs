/// A compiled content-filter rule list, referenced by identifier. Compilation
/// and storage live outside this layer; the controller only tracks which
/// lists are active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleList {
    pub identifier: String,
}

impl RuleList {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}
