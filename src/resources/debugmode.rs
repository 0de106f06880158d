//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that debug rendering and
//! diagnostics should be enabled. Remove it to disable debug behavior.

/// Marker resource: when present, the renderer outlines colliders.
#[derive(Debug, Clone, Copy)]
pub struct DebugMode {}
