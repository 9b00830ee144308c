use serde_json::Value;

/// A script value as it crosses the engine boundary.
///
/// Values that survive marshalling arrive as plain data; anything tied to an
/// engine-internal object arrives as an opaque handle that cannot be
/// converted into the bridge's result shape.
#[derive(Debug, Clone, PartialEq)]
pub enum RawScriptValue {
    /// A value already marshalled into plain data
    Marshalled(Value),
    /// An engine-internal object handle; not representable as plain data
    External(u64),
}

impl RawScriptValue {
    /// Interpret the raw value as the bridge's result shape. `None` means
    /// the value cannot be marshalled, which the reply path reports as an
    /// explicit failure rather than dropping the reply.
    pub fn extract(self) -> Option<Value> {
        match self {
            RawScriptValue::Marshalled(value) => Some(value),
            RawScriptValue::External(_) => None,
        }
    }
}

impl From<Value> for RawScriptValue {
    fn from(value: Value) -> Self {
        Self::Marshalled(value)
    }
}
