//! Enemy steering state.
//!
//! Enemies fall at a constant speed while swinging left and right around
//! `center_x`. The swing is a sine of `zigzag_phase`, which advances by
//! `dt * zigzag_frequency` every tick.

use serde::{Deserialize, Serialize};

/// Which enemy variant this is. Spies are worth more and look different.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Enemy,
    Spy,
}

pub const DEFAULT_ZIGZAG_AMPLITUDE: f32 = 60.0;
/// Radians per millisecond.
pub const DEFAULT_ZIGZAG_FREQUENCY: f32 = 0.003;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyAi {
    pub kind: EnemyKind,
    /// Downward speed in pixels per 60 fps frame.
    pub speed: f32,
    pub zigzag_phase: f32,
    /// Milliseconds since spawn.
    pub zigzag_timer: f32,
    pub zigzag_amplitude: f32,
    pub zigzag_frequency: f32,
    /// Horizontal anchor of the swing.
    pub center_x: f32,
    /// Drives the core pulse when drawing.
    pub pulse_timer: f32,
}

impl EnemyAi {
    pub fn new(kind: EnemyKind, speed: f32, center_x: f32) -> Self {
        Self {
            kind,
            speed,
            zigzag_phase: 0.0,
            zigzag_timer: 0.0,
            zigzag_amplitude: DEFAULT_ZIGZAG_AMPLITUDE,
            zigzag_frequency: DEFAULT_ZIGZAG_FREQUENCY,
            center_x,
            pulse_timer: 0.0,
        }
    }

    pub fn with_zigzag(mut self, amplitude: f32, frequency: f32) -> Self {
        self.zigzag_amplitude = amplitude;
        self.zigzag_frequency = frequency;
        self
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.zigzag_phase = phase;
        self
    }

    /// Where the swing currently wants the entity's x.
    pub fn target_x(&self) -> f32 {
        self.center_x + self.zigzag_phase.sin() * self.zigzag_amplitude
    }

    /// Shift the anchor so the swing target stays within `[0, max_x]`, and
    /// return the (possibly clamped) target.
    pub fn contain_target(&mut self, max_x: f32) -> f32 {
        let target = self.target_x();
        if target < 0.0 {
            self.center_x -= target;
            0.0
        } else if target > max_x {
            self.center_x -= target - max_x;
            max_x
        } else {
            target
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_follows_sine() {
        let ai = EnemyAi::new(EnemyKind::Enemy, 2.0, 100.0)
            .with_phase(std::f32::consts::FRAC_PI_2);
        assert!((ai.target_x() - 160.0).abs() < 1e-4);
    }

    #[test]
    fn contain_shifts_anchor_left_edge() {
        let mut ai = EnemyAi::new(EnemyKind::Spy, 2.0, 10.0)
            .with_phase(-std::f32::consts::FRAC_PI_2);
        let target = ai.contain_target(770.0);
        assert_eq!(target, 0.0);
        assert!((ai.center_x - 60.0).abs() < 1e-4);
        assert!((ai.target_x() - 0.0).abs() < 1e-4);
    }

    #[test]
    fn contain_shifts_anchor_right_edge() {
        let mut ai = EnemyAi::new(EnemyKind::Enemy, 2.0, 760.0)
            .with_phase(std::f32::consts::FRAC_PI_2);
        let target = ai.contain_target(770.0);
        assert_eq!(target, 770.0);
        assert!((ai.center_x - 710.0).abs() < 1e-4);
    }
}
