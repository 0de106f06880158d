//! Linear velocity with a speed cap.
//!
//! Velocity is expressed in pixels per 60 fps frame; the movement system
//! scales it by the real elapsed time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
    /// Maximum magnitude. `f32::INFINITY` means uncapped.
    pub max_speed: f32,
}

impl Default for Velocity {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            max_speed: f32::INFINITY,
        }
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set(&mut self, v: Vec2) {
        self.x = v.x;
        self.y = v.y;
    }

    pub fn speed(&self) -> f32 {
        self.as_vec2().length()
    }

    /// Scale down to `max_speed` keeping direction. Returns true if clamped.
    pub fn clamp_to_max(&mut self) -> bool {
        let speed = self.speed();
        if speed > self.max_speed && speed > 0.0 {
            let scale = self.max_speed / speed;
            self.x *= scale;
            self.y *= scale;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn clamp_preserves_direction() {
        let mut v = Velocity::new(30.0, 40.0).with_max_speed(5.0);
        assert!(v.clamp_to_max());
        assert!((v.x - 3.0).abs() < EPSILON);
        assert!((v.y - 4.0).abs() < EPSILON);
    }

    #[test]
    fn clamp_is_noop_under_limit_or_uncapped() {
        let mut v = Velocity::new(1.0, 1.0).with_max_speed(5.0);
        assert!(!v.clamp_to_max());
        let mut free = Velocity::new(1000.0, 0.0);
        assert!(!free.clamp_to_max());
        assert_eq!(free.x, 1000.0);
    }
}
