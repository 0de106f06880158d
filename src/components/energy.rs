//! Energy pool spent on shooting and refilled over time or by kills.

/// Below this fraction of the maximum, energy counts as critical.
const CRITICAL_FRACTION: f32 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Energy {
    pub max_energy: f32,
    pub current_energy: f32,
    /// Energy regained per second.
    pub regen_rate: f32,
    /// Energy spent per shot.
    pub consumption_rate: f32,
}

impl Energy {
    pub fn new(max_energy: f32) -> Self {
        Self {
            max_energy,
            current_energy: max_energy,
            regen_rate: 0.0,
            consumption_rate: 0.0,
        }
    }

    pub fn with_rates(mut self, regen_rate: f32, consumption_rate: f32) -> Self {
        self.regen_rate = regen_rate;
        self.consumption_rate = consumption_rate;
        self
    }

    pub fn with_current(mut self, current: f32) -> Self {
        self.current_energy = current.clamp(0.0, self.max_energy);
        self
    }

    /// Spend `amount` if available. Returns false (and spends nothing) when
    /// there is not enough.
    pub fn consume(&mut self, amount: f32) -> bool {
        if self.current_energy < amount {
            return false;
        }
        self.current_energy -= amount;
        true
    }

    /// Spend one shot's worth (`consumption_rate`).
    pub fn consume_shot(&mut self) -> bool {
        self.consume(self.consumption_rate)
    }

    /// Add `amount`, capped at `max_energy`.
    pub fn restore(&mut self, amount: f32) {
        self.current_energy = (self.current_energy + amount).min(self.max_energy);
    }

    /// Regenerate over `dt` milliseconds.
    pub fn regenerate(&mut self, dt: f32) {
        if self.regen_rate > 0.0 {
            self.restore(self.regen_rate * dt / 1000.0);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current_energy <= 0.0
    }

    pub fn is_critical(&self) -> bool {
        self.current_energy < self.max_energy * CRITICAL_FRACTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn consume_refuses_overdraw() {
        let mut e = Energy::new(10.0);
        assert!(e.consume(7.0));
        assert!(!e.consume(7.0));
        assert!((e.current_energy - 3.0).abs() < EPSILON);
    }

    #[test]
    fn restore_caps_at_max() {
        let mut e = Energy::new(100.0).with_current(50.0);
        e.restore(100.0);
        assert_eq!(e.current_energy, 100.0);
    }

    #[test]
    fn critical_and_empty() {
        let mut e = Energy::new(100.0).with_current(19.0);
        assert!(e.is_critical());
        assert!(!e.is_empty());
        assert!(e.consume(19.0));
        assert!(e.is_empty());
    }

    #[test]
    fn regenerates_per_second() {
        let mut e = Energy::new(100.0).with_current(0.0).with_rates(10.0, 5.0);
        e.regenerate(500.0);
        assert!((e.current_energy - 5.0).abs() < EPSILON);
        assert!(e.consume_shot());
        assert!(e.is_empty());
    }
}
