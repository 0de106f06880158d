//! Axis-aligned box collider with layer/mask filtering.
//!
//! Two colliders are eligible to collide when either one's mask includes the
//! other's layer. Eligible pairs then need their boxes to overlap; touching
//! edges do not count.

use glam::Vec2;

/// Collision layer bits used by the factory archetypes.
pub mod layers {
    pub const PLAYER: u32 = 1 << 0;
    pub const ENEMY: u32 = 1 << 1;
    pub const PLAYER_BULLET: u32 = 1 << 2;
    pub const ROCK: u32 = 1 << 3;
    pub const POWER_UP: u32 = 1 << 4;
    pub const ALL: u32 = u32::MAX;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Category bits this collider belongs to.
    pub layer: u32,
    /// Category bits this collider reacts to.
    pub mask: u32,
    /// Triggers report overlaps but never take or deal damage.
    pub is_trigger: bool,
}

impl Collider {
    /// Collider of the given size on every layer, reacting to everything.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
            layer: layers::ALL,
            mask: layers::ALL,
            is_trigger: false,
        }
    }

    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    pub fn on_layer(mut self, layer: u32, mask: u32) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Layer/mask compatibility, in either direction.
    pub fn can_collide_with(&self, other: &Self) -> bool {
        self.mask & other.layer != 0 || other.mask & self.layer != 0
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + Vec2::new(self.offset_x, self.offset_y);
        let p1 = p0 + Vec2::new(self.width, self.height);
        (p0.min(p1), p0.max(p1))
    }

    /// AABB vs AABB overlap test against another collider at a different entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vec2, point: Vec2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
