//! Canvas size resource.
//!
//! Stores the playfield dimensions in pixels. Gameplay systems receive a copy
//! at construction; the resource is there for collaborators outside the
//! system list.

use serde::{Deserialize, Serialize};

/// Playfield size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
