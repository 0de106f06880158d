//! Simulation clock.

/// Time bookkeeping updated by the world at the start of every frame.
/// All values are in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    /// Scaled delta of the current frame.
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Advance by a raw delta and return the scaled one.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let scaled = dt * self.time_scale;
        self.delta = scaled;
        self.elapsed += scaled;
        self.frame_count += 1;
        scaled
    }

    pub fn delta_seconds(&self) -> f32 {
        self.delta / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_scale_applies_to_delta() {
        let mut time = WorldTime {
            time_scale: 0.5,
            ..WorldTime::default()
        };
        assert_eq!(time.advance(20.0), 10.0);
        assert_eq!(time.elapsed, 10.0);
        assert_eq!(time.frame_count, 1);
        assert!((time.delta_seconds() - 0.01).abs() < 1e-6);
    }
}
