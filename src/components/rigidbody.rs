//! Mass, damping and a queue of impulses for physics-driven entities.
//!
//! Game logic pushes forces with [`RigidBody::apply_force`]. The movement
//! system drains the queue once per tick into its own scratch buffer, turns
//! each force into a velocity change (`force / mass * dt_seconds`) and then
//! applies `friction` as multiplicative damping. Forces therefore act for
//! exactly one tick; push them again every frame for a sustained push.

use glam::Vec2;
use smallvec::SmallVec;

/// Smallest mass accepted; keeps `force / mass` finite.
const MIN_MASS: f32 = 1e-3;

/// Physics body with mass and a per-tick force queue.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new(2.0, 0.98);
/// rb.apply_force(Vec2::new(0.0, -120.0)); // one-tick shove upward
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    pub mass: f32,
    /// Fraction of velocity retained each tick (1.0 = no damping).
    pub friction: f32,
    forces: SmallVec<[Vec2; 4]>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl RigidBody {
    /// Create a body. Non-positive masses are raised to a small minimum.
    pub fn new(mass: f32, friction: f32) -> Self {
        Self {
            mass: mass.max(MIN_MASS),
            friction,
            forces: SmallVec::new(),
        }
    }

    /// Queue a force for the next movement tick.
    pub fn apply_force(&mut self, force: Vec2) {
        self.forces.push(force);
    }

    /// Forces queued since the last movement tick.
    pub fn pending_forces(&self) -> &[Vec2] {
        &self.forces
    }

    /// Move every queued force into `out`, leaving the queue empty.
    pub fn drain_forces_into(&mut self, out: &mut Vec<Vec2>) {
        out.extend(self.forces.drain(..));
    }

    /// Velocity change produced by `force` over `dt_seconds`.
    pub fn impulse(&self, force: Vec2, dt_seconds: f32) -> Vec2 {
        force / self.mass * dt_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== CONSTRUCTOR TESTS ====================

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new(2.0, 0.9);
        assert!(approx_eq(rb.mass, 2.0));
        assert!(approx_eq(rb.friction, 0.9));
        assert!(rb.pending_forces().is_empty());
    }

    #[test]
    fn test_rigidbody_default_is_undamped_unit_mass() {
        let rb = RigidBody::default();
        assert!(approx_eq(rb.mass, 1.0));
        assert!(approx_eq(rb.friction, 1.0));
    }

    #[test]
    fn test_rigidbody_rejects_zero_mass() {
        let rb = RigidBody::new(0.0, 1.0);
        assert!(rb.mass > 0.0);
        let dv = rb.impulse(Vec2::new(1.0, 0.0), 1.0);
        assert!(dv.x.is_finite());
    }

    // ==================== FORCE QUEUE TESTS ====================

    #[test]
    fn test_apply_force_queues() {
        let mut rb = RigidBody::default();
        rb.apply_force(Vec2::new(1.0, 0.0));
        rb.apply_force(Vec2::new(0.0, 2.0));
        assert_eq!(rb.pending_forces().len(), 2);
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut rb = RigidBody::default();
        rb.apply_force(Vec2::new(1.0, 0.0));
        let mut scratch = Vec::new();
        rb.drain_forces_into(&mut scratch);
        assert_eq!(scratch, vec![Vec2::new(1.0, 0.0)]);
        assert!(rb.pending_forces().is_empty());
    }

    // ==================== IMPULSE TESTS ====================

    #[test]
    fn test_impulse_scales_by_mass_and_time() {
        let rb = RigidBody::new(4.0, 1.0);
        let dv = rb.impulse(Vec2::new(8.0, -4.0), 0.5);
        assert!(approx_eq(dv.x, 1.0));
        assert!(approx_eq(dv.y, -0.5));
    }
}
