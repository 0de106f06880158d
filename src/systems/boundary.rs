//! Playfield edges.
//!
//! The player ship is kept inside the canvas and bounces softly off the
//! edges. Everything else is removed once its sprite is well clear of the
//! canvas.

use log::trace;

use crate::components::sprite::Sprite;
use crate::components::tags::Player;
use crate::components::transform::Transform;
use crate::components::velocity::Velocity;
use crate::ecs::component::{ComponentKind, Signature};
use crate::ecs::entity::Entity;
use crate::ecs::error::EcsError;
use crate::ecs::system::{System, SystemContext};
use crate::resources::canvassize::CanvasSize;

pub const PRIORITY: i32 = 12;
/// Fraction of the speed kept when bouncing off an edge.
pub const BOUNCE: f32 = 0.3;
const EXIT_MARGIN: f32 = 50.0;

#[derive(Debug)]
pub struct BoundarySystem {
    canvas: CanvasSize,
}

impl BoundarySystem {
    pub fn new(canvas: CanvasSize) -> Self {
        Self { canvas }
    }

    fn confine(&self, entity: &mut Entity, sprite: Sprite) -> Result<(), EcsError> {
        let max_x = self.canvas.width - sprite.width;
        let max_y = self.canvas.height - sprite.height;

        let transform = entity.require_mut::<Transform>()?;
        // -1 pushed back from the low edge, +1 from the high edge.
        let mut hit_x = 0.0;
        let mut hit_y = 0.0;
        if transform.x <= 0.0 {
            transform.x = 0.0;
            hit_x = -1.0;
        } else if transform.x >= max_x {
            transform.x = max_x;
            hit_x = 1.0;
        }
        if transform.y <= 0.0 {
            transform.y = 0.0;
            hit_y = -1.0;
        } else if transform.y >= max_y {
            transform.y = max_y;
            hit_y = 1.0;
        }

        if let Some(velocity) = entity.get_mut::<Velocity>() {
            // Only reflect motion heading into the edge.
            if velocity.x * hit_x > 0.0 {
                velocity.x = -velocity.x * BOUNCE;
            }
            if velocity.y * hit_y > 0.0 {
                velocity.y = -velocity.y * BOUNCE;
            }
        }
        Ok(())
    }

    fn is_gone(&self, transform: &Transform, sprite: &Sprite) -> bool {
        transform.x + sprite.width < -EXIT_MARGIN
            || transform.x > self.canvas.width + EXIT_MARGIN
            || transform.y + sprite.height < -EXIT_MARGIN
            || transform.y > self.canvas.height + EXIT_MARGIN
    }
}

impl System for BoundarySystem {
    fn name(&self) -> &'static str {
        "boundary"
    }

    fn signature(&self) -> Signature {
        Signature::of(&[ComponentKind::Transform, ComponentKind::Sprite])
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
            let sprite = *entity.require::<Sprite>()?;
            if entity.has::<Player>() {
                self.confine(entity, sprite)?;
            } else if self.is_gone(entity.require::<Transform>()?, &sprite) {
                trace!("{} left the playfield", id);
                entity.destroy();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::Color;
    use crate::ecs::entity::EntityId;

    fn ship(x: f32, y: f32, vx: f32, vy: f32) -> Entity {
        let mut e = Entity::new(EntityId(1));
        e.add(Transform::new(x, y))
            .add(Velocity::new(vx, vy))
            .add(Sprite::new(40.0, 40.0, Color::CYAN))
            .add(Player);
        e
    }

    fn system() -> BoundarySystem {
        BoundarySystem::new(CanvasSize::new(800.0, 600.0))
    }

    #[test]
    fn right_edge_clamps_and_reflects() {
        let mut e = ship(790.0, 100.0, 5.0, 0.0);
        let sprite = *e.get::<Sprite>().unwrap();
        system().confine(&mut e, sprite).unwrap();
        assert_eq!(e.get::<Transform>().unwrap().x, 760.0);
        assert!((e.get::<Velocity>().unwrap().x + 1.5).abs() < 1e-5);
    }

    #[test]
    fn motion_away_from_edge_is_kept() {
        let mut e = ship(0.0, 100.0, 4.0, 0.0);
        let sprite = *e.get::<Sprite>().unwrap();
        system().confine(&mut e, sprite).unwrap();
        assert_eq!(e.get::<Velocity>().unwrap().x, 4.0);
    }

    #[test]
    fn bottom_edge_reflects_vertical() {
        let mut e = ship(100.0, 600.0, 0.0, 3.0);
        let sprite = *e.get::<Sprite>().unwrap();
        system().confine(&mut e, sprite).unwrap();
        assert_eq!(e.get::<Transform>().unwrap().y, 560.0);
        assert!((e.get::<Velocity>().unwrap().y + 0.9).abs() < 1e-5);
    }

    #[test]
    fn gone_only_past_margin() {
        let s = Sprite::new(30.0, 30.0, Color::RED);
        let sys = system();
        assert!(!sys.is_gone(&Transform::new(-70.0, 0.0), &s));
        assert!(sys.is_gone(&Transform::new(-81.0, 0.0), &s));
        assert!(sys.is_gone(&Transform::new(0.0, 651.0), &s));
    }
}
