pub mod legacy;
pub mod modern;
pub mod sink;

pub use sink::{EventSink, LegacySink, ModernSink, NativeEvent, NullSink};
