//! Position and orientation of an entity.
//!
//! `x`/`y` are the top-left corner of the entity's sprite rectangle in canvas
//! pixels. The previous position is snapshotted by the movement system
//! before it integrates, so later systems can tell where an entity came from.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    /// Rotation in radians, applied about the sprite center when drawing.
    pub rotation: f32,
    pub prev_x: f32,
    pub prev_y: f32,
}

impl Transform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
            prev_x: x,
            prev_y: y,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn previous(&self) -> Vec2 {
        Vec2::new(self.prev_x, self.prev_y)
    }

    /// Remember the current position as the previous one.
    pub fn snapshot(&mut self) {
        self.prev_x = self.x;
        self.prev_y = self.y;
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_previous_to_current() {
        let t = Transform::new(3.0, 4.0);
        assert_eq!(t.previous(), Vec2::new(3.0, 4.0));
        assert_eq!(t.rotation, 0.0);
    }

    #[test]
    fn snapshot_then_translate() {
        let mut t = Transform::new(1.0, 1.0);
        t.snapshot();
        t.translate(2.0, -1.0);
        assert_eq!(t.position(), Vec2::new(3.0, 0.0));
        assert_eq!(t.previous(), Vec2::new(1.0, 1.0));
    }
}
