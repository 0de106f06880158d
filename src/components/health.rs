//! Hit points with optional temporary invulnerability.
//!
//! All operations only touch the component itself; destroying a dead entity
//! is the caller's job.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Health {
    pub max_health: i32,
    pub current_health: i32,
    pub invulnerable: bool,
    /// Milliseconds of invulnerability left.
    pub invulnerability_timer: f32,
}

impl Health {
    pub fn new(max_health: i32) -> Self {
        Self {
            max_health,
            current_health: max_health,
            invulnerable: false,
            invulnerability_timer: 0.0,
        }
    }

    /// Subtract `amount`, never going below zero. Invulnerable or already
    /// dead entities take nothing. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        if self.invulnerable || self.is_dead() || amount <= 0 {
            return 0;
        }
        let taken = amount.min(self.current_health);
        self.current_health -= taken;
        taken
    }

    /// Add `amount`, capped at `max_health`. Returns the amount restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if amount <= 0 {
            return 0;
        }
        let before = self.current_health;
        self.current_health = (self.current_health + amount).min(self.max_health);
        self.current_health - before
    }

    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }

    pub fn make_invulnerable(&mut self, duration_ms: f32) {
        self.invulnerable = true;
        self.invulnerability_timer = duration_ms;
    }

    /// Count invulnerability down by `dt` milliseconds.
    pub fn tick_invulnerability(&mut self, dt: f32) {
        if !self.invulnerable {
            return;
        }
        self.invulnerability_timer -= dt;
        if self.invulnerability_timer <= 0.0 {
            self.invulnerability_timer = 0.0;
            self.invulnerable = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_clamps_at_zero() {
        let mut h = Health::new(2);
        assert_eq!(h.take_damage(5), 2);
        assert_eq!(h.current_health, 0);
        assert!(h.is_dead());
        assert_eq!(h.take_damage(1), 0);
    }

    #[test]
    fn heal_caps_at_max() {
        let mut h = Health::new(3);
        h.take_damage(2);
        assert_eq!(h.heal(10), 2);
        assert_eq!(h.current_health, 3);
    }

    #[test]
    fn invulnerability_blocks_damage_until_it_expires() {
        let mut h = Health::new(3);
        h.make_invulnerable(100.0);
        assert_eq!(h.take_damage(1), 0);
        h.tick_invulnerability(60.0);
        assert!(h.invulnerable);
        h.tick_invulnerability(60.0);
        assert!(!h.invulnerable);
        assert_eq!(h.take_damage(1), 1);
    }
}
