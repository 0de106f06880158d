//! Enemy steering.
//!
//! Enemies fall straight down at `EnemyAi::speed` and ease horizontally
//! toward a sine-wave target around their anchor. The anchor is nudged back
//! whenever the target would leave the playfield, so the swing stays on
//! screen without flattening against the edge.

use log::debug;

use crate::components::enemyai::EnemyAi;
use crate::components::sprite::Sprite;
use crate::components::transform::Transform;
use crate::components::velocity::Velocity;
use crate::ecs::component::{ComponentKind, Signature};
use crate::ecs::error::EcsError;
use crate::ecs::system::{System, SystemContext};
use crate::resources::canvassize::CanvasSize;

pub const PRIORITY: i32 = 8;
/// Fraction of the distance to the target covered per 60 Hz tick.
const STEERING: f32 = 0.1;
/// Length of the tick `STEERING` is tuned for, in milliseconds.
const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0;
/// How far below the canvas an enemy may fall before it is removed.
const EXIT_MARGIN: f32 = 50.0;

#[derive(Debug)]
pub struct EnemyAiSystem {
    canvas: CanvasSize,
}

impl EnemyAiSystem {
    pub fn new(canvas: CanvasSize) -> Self {
        Self { canvas }
    }
}

/// Steering gain for a tick of `dt` ms. Long ticks are capped so the
/// resulting step lands on the target at most, never past it.
fn steering(dt: f32) -> f32 {
    if dt > 0.0 {
        STEERING.min(REFERENCE_FRAME_MS / dt)
    } else {
        STEERING
    }
}

impl System for EnemyAiSystem {
    fn name(&self) -> &'static str {
        "enemy_ai"
    }

    fn signature(&self) -> Signature {
        Signature::of(&[
            ComponentKind::Transform,
            ComponentKind::Velocity,
            ComponentKind::EnemyAi,
            ComponentKind::Enemy,
        ])
    }

    fn priority(&self) -> i32 {
        PRIORITY
    }

    fn update(&mut self, ctx: &mut SystemContext<'_>, dt: f32) -> Result<(), EcsError> {
        for &id in ctx.members {
            let Some(entity) = ctx.entities.get_mut(id) else {
                continue;
            };
            if !entity.is_active() {
                continue;
            }
            let sprite_width = entity.get::<Sprite>().map_or(0.0, |s| s.width);
            let max_x = (self.canvas.width - sprite_width).max(0.0);
            let transform = *entity.require::<Transform>()?;

            let ai = entity.require_mut::<EnemyAi>()?;
            ai.zigzag_phase += dt * ai.zigzag_frequency;
            let target = ai.contain_target(max_x);
            ai.pulse_timer += dt;
            ai.zigzag_timer += dt;
            let speed = ai.speed;

            let velocity = entity.require_mut::<Velocity>()?;
            velocity.y = speed;
            velocity.x = (target - transform.x) * steering(dt);

            if transform.y > self.canvas.height + EXIT_MARGIN {
                debug!("Enemy {} left the playfield", id);
                entity.destroy();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steering_is_capped_on_long_ticks() {
        assert_eq!(steering(REFERENCE_FRAME_MS), STEERING);
        assert_eq!(steering(0.0), STEERING);
        // one step at 200ms may cover the whole distance, never more
        let step = steering(200.0) * 200.0 / REFERENCE_FRAME_MS;
        assert!(step <= 1.0 + 1e-6);
    }
}
