//! Projectile flight and cleanup.
//!
//! Velocity is rewritten from the projectile's direction every tick, so
//! nothing else can bend its path. Projectiles are removed once they leave
//! the playfield by more than a fixed margin.

use log::trace;

use crate::components::projectile::Projectile;
use crate::components::transform::Transform;
use crate::components::velocity::Velocity;
use crate::ecs::component::{ComponentKind, Signature};
use crate::ecs::error::EcsError;
use crate::ecs::system::{System, SystemContext};
use crate::resources::canvassize::CanvasSize;

pub const PRIORITY: i32 = 9;
const EXIT_MARGIN: f32 = 50.0;
/// Bullets are 12px tall; the top exit waits until the whole bullet is out.
const BULLET_HEIGHT: f32 = 12.0;

#[derive(Debug)]
pub struct ProjectileSystem {
    canvas: CanvasSize,
}

impl ProjectileSystem {
    pub fn new(canvas: CanvasSize) -> Self {
        Self { canvas }
    }

    fn is_out(&self, transform: &Transform) -> bool {
        transform.y < -BULLET_HEIGHT - EXIT_MARGIN
            || transform.y > self.canvas.height + EXIT_MARGIN
            || transform.x < -EXIT_MARGIN
            || transform.x > self.canvas.width + EXIT_MARGIN
    }
}

impl System for ProjectileSystem {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn signature(&self) -> Signature {
        Signature::of(&[
            ComponentKind::Transform,
            ComponentKind::Velocity,
            ComponentKind::Projectile,
            ComponentKind::Bullet,
        ])
    }

    fn priority(&self) -> i32 {
        PRIORITY
    }

    fn update(&mut self, ctx: &mut SystemContext<'_>, _dt: f32) -> Result<(), EcsError> {
        for &id in ctx.members {
            let Some(entity) = ctx.entities.get_mut(id) else {
                continue;
            };
            if !entity.is_active() {
                continue;
            }
            let velocity = entity.require::<Projectile>()?.velocity();
            entity.require_mut::<Velocity>()?.set(velocity);

            if self.is_out(entity.require::<Transform>()?) {
                trace!("Projectile {} left the playfield", id);
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
    fn exit_bounds() {
        let system = ProjectileSystem::new(CanvasSize::new(800.0, 600.0));
        assert!(!system.is_out(&Transform::new(400.0, -61.0)));
        assert!(system.is_out(&Transform::new(400.0, -63.0)));
        assert!(system.is_out(&Transform::new(400.0, 651.0)));
        assert!(system.is_out(&Transform::new(-51.0, 300.0)));
        assert!(system.is_out(&Transform::new(851.0, 300.0)));
    }
}
