use serde::{Deserialize, Serialize};

/// Input-driven acceleration and per-tick friction.
///
/// `rate` scales the movement intent added to velocity each tick;
/// `deceleration` multiplies velocity each tick (0.9 keeps 90%).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Acceleration {
    pub rate: f32,
    pub deceleration: f32,
}

impl Acceleration {
    pub fn new(rate: f32, deceleration: f32) -> Self {
        Self { rate, deceleration }
    }
}
