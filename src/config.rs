/// Per-view configuration. Capabilities are resolved once when the host sets
/// the view up, not re-checked through conditional compilation, so both
/// configurations stay testable from the same binary.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Device scale factor stamped onto legacy pointer events. The legacy
    /// input protocol has no other way to carry it.
    pub device_scale_factor: f32,
    /// Whether content-filter rule lists are available. When `false`, the
    /// rule-list calls on the controller are silent no-ops.
    pub content_filtering: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            device_scale_factor: 1.0,
            content_filtering: true,
        }
    }
}
