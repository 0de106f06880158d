//! Keyboard-driven ship control.
//!
//! Reads the shared [`InputState`] and accelerates every player ship in the
//! held direction. Diagonal input is normalized so moving diagonally is not
//! faster than moving along one axis. Shooting is handled by the game shell,
//! not here.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;

use crate::components::acceleration::Acceleration;
use crate::components::playercontroller::PlayerController;
use crate::components::velocity::Velocity;
use crate::ecs::component::{ComponentKind, Signature};
use crate::ecs::error::EcsError;
use crate::ecs::system::{System, SystemContext};
use crate::resources::input::InputState;

pub const PRIORITY: i32 = 5;

#[derive(Debug, Default)]
pub struct PlayerInputSystem;

impl PlayerInputSystem {
    pub fn new() -> Self {
        Self
    }
}

/// Unit-length (or zero) movement intent from the four directions.
pub fn movement_intent(input: &InputState) -> Vec2 {
    let mut intent = Vec2::ZERO;
    if input.up() {
        intent.y -= 1.0;
    }
    if input.down() {
        intent.y += 1.0;
    }
    if input.left() {
        intent.x -= 1.0;
    }
    if input.right() {
        intent.x += 1.0;
    }
    if intent.x != 0.0 && intent.y != 0.0 {
        intent *= FRAC_1_SQRT_2;
    }
    intent
}

impl System for PlayerInputSystem {
    fn name(&self) -> &'static str {
        "player_input"
    }

    fn signature(&self) -> Signature {
        Signature::of(&[
            ComponentKind::Transform,
            ComponentKind::Velocity,
            ComponentKind::PlayerController,
            ComponentKind::Player,
        ])
    }

    fn priority(&self) -> i32 {
        PRIORITY
    }

    fn update(&mut self, ctx: &mut SystemContext<'_>, dt: f32) -> Result<(), EcsError> {
        let input = ctx.resources.require::<InputState>()?;
        let intent = movement_intent(input);
        let moving = intent != Vec2::ZERO;

        for &id in ctx.members {
            let Some(entity) = ctx.entities.get_mut(id) else {
                continue;
            };
            if !entity.is_active() {
                continue;
            }
            // Without Acceleration the intent is applied at full strength.
            let rate = entity.get::<Acceleration>().map_or(1.0, |a| a.rate);

            let velocity = entity.require_mut::<Velocity>()?;
            velocity.x += intent.x * rate;
            velocity.y += intent.y * rate;

            let controller = entity.require_mut::<PlayerController>()?;
            controller.ramp_thruster(moving);
            controller.tick_muzzle_flash(dt);
        }
        Ok(())
    }
}
