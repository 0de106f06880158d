//! Timers on vital components: invulnerability countdown and energy regen.

use crate::components::energy::Energy;
use crate::components::health::Health;
use crate::ecs::component::{ComponentKind, Signature};
use crate::ecs::error::EcsError;
use crate::ecs::system::{System, SystemContext};

pub const PRIORITY: i32 = 20;

#[derive(Debug, Default)]
pub struct StatusSystem;

impl StatusSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for StatusSystem {
    fn name(&self) -> &'static str {
        "status"
    }

    fn signature(&self) -> Signature {
        Signature::of(&[ComponentKind::Health])
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
            entity.require_mut::<Health>()?.tick_invulnerability(dt);
            if let Some(energy) = entity.get_mut::<Energy>() {
                energy.regenerate(dt);
            }
        }
        Ok(())
    }
}
