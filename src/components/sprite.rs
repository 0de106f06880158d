//! Flat-colored rectangle used for drawing and boundary checks.
//!
//! The sprite's rectangle starts at the entity's
//! [`Transform`](super::transform::Transform) position and extends
//! `width` × `height` pixels.

use serde::{Deserialize, Serialize};

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 51, 51);
    pub const BLUE: Color = Color::rgb(51, 102, 255);
    pub const YELLOW: Color = Color::rgb(255, 221, 0);
    pub const GREEN: Color = Color::rgb(0, 230, 118);
    pub const CYAN: Color = Color::rgb(0, 229, 255);
    pub const ORANGE: Color = Color::rgb(255, 140, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub width: f32,
    pub height: f32,
    pub color: Color,
    pub visible: bool,
}

impl Sprite {
    pub fn new(width: f32, height: f32, color: Color) -> Self {
        Self {
            width,
            height,
            color,
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Offset from the top-left corner to the sprite center.
    pub fn half_extents(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }
}
