//! Straight-flying projectile.
//!
//! The direction is fixed at spawn; the projectile system rewrites velocity
//! from it every tick, so projectiles cannot be steered or slowed.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub speed: f32,
    /// Unit vector.
    pub direction: Vec2,
    pub damage: i32,
    pub piercing: bool,
}

impl Projectile {
    /// Create a projectile. The direction is normalized; a zero vector
    /// falls back to straight up.
    pub fn new(speed: f32, direction: Vec2) -> Self {
        Self {
            speed,
            direction: direction.try_normalize().unwrap_or(Vec2::NEG_Y),
            damage: 1,
            piercing: false,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.direction * self.speed
    }
}
