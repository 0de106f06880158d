//! Velocity integration.
//!
//! Per entity and tick:
//!
//! 1. remember the previous position,
//! 2. apply `Acceleration::deceleration`,
//! 3. turn queued `RigidBody` forces into velocity and apply its friction,
//! 4. clamp to `Velocity::max_speed`,
//! 5. move by `velocity * dt_seconds * 60`.
//!
//! Velocities are expressed in pixels per 60 fps frame, so the same velocity
//! covers the same distance per second at any frame rate.

use glam::Vec2;

use crate::components::acceleration::Acceleration;
use crate::components::rigidbody::RigidBody;
use crate::components::transform::Transform;
use crate::components::velocity::Velocity;
use crate::ecs::component::{ComponentKind, Signature};
use crate::ecs::error::EcsError;
use crate::ecs::system::{System, SystemContext};

pub const PRIORITY: i32 = 10;
/// Frames per second velocities are calibrated against.
const REFERENCE_FPS: f32 = 60.0;

#[derive(Debug, Default)]
pub struct MovementSystem {
    /// Forces drained from the current body; reused across entities.
    scratch: Vec<Vec2>,
}

impl MovementSystem {
    pub fn new() -> Self {
        Self::default()
    }
}

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn signature(&self) -> Signature {
        Signature::of(&[ComponentKind::Transform, ComponentKind::Velocity])
    }

    fn priority(&self) -> i32 {
        PRIORITY
    }

    fn update(&mut self, ctx: &mut SystemContext<'_>, dt: f32) -> Result<(), EcsError> {
        let dt_seconds = dt / 1000.0;
        self.scratch.clear();

        for &id in ctx.members {
            let Some(entity) = ctx.entities.get_mut(id) else {
                continue;
            };
            if !entity.is_active() {
                continue;
            }
            entity.require_mut::<Transform>()?.snapshot();

            let mut v = entity.require::<Velocity>()?.as_vec2();
            if let Some(acceleration) = entity.get::<Acceleration>() {
                v *= acceleration.deceleration;
            }
            if let Some(body) = entity.get_mut::<RigidBody>() {
                self.scratch.clear();
                body.drain_forces_into(&mut self.scratch);
                for force in &self.scratch {
                    v += body.impulse(*force, dt_seconds);
                }
                v *= body.friction;
            }

            let velocity = entity.require_mut::<Velocity>()?;
            velocity.set(v);
            velocity.clamp_to_max();
            let step = velocity.as_vec2() * dt_seconds * REFERENCE_FPS;

            entity.require_mut::<Transform>()?.translate(step.x, step.y);
        }
        Ok(())
    }
}
