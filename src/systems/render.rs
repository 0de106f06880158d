//! Sprite rendering.
//!
//! Draws every visible sprite onto the [`Canvas`] the system owns, back to
//! front by `y`, so things lower on screen overlap things above them. Each
//! sprite is drawn in a local frame centered on the sprite and rotated by its
//! transform. What gets drawn depends on the entity's [`Archetype`].
//!
//! When the [`DebugMode`] resource is present, collider boxes are outlined on
//! top of everything.

use std::f32::consts::TAU;

use log::warn;

use crate::canvas::Canvas;
use crate::components::collider::Collider;
use crate::components::enemyai::{EnemyAi, EnemyKind};
use crate::components::playercontroller::PlayerController;
use crate::components::sprite::{Color, Sprite};
use crate::components::tags::Archetype;
use crate::components::transform::Transform;
use crate::ecs::component::{ComponentKind, Signature};
use crate::ecs::entity::{Entity, EntityId};
use crate::ecs::error::EcsError;
use crate::ecs::system::{System, SystemContext};
use crate::resources::debugmode::DebugMode;

pub const PRIORITY: i32 = 100;
/// Flame length at full thrust.
const THRUSTER_LENGTH: f32 = 20.0;
const MUZZLE_FLASH_RADIUS: f32 = 6.0;
/// Radians per millisecond of the enemy core pulse.
const PULSE_SPEED: f32 = 0.005;

pub struct RenderingSystem {
    canvas: Box<dyn Canvas>,
    warned: bool,
}

impl RenderingSystem {
    pub fn new(canvas: Box<dyn Canvas>) -> Self {
        Self {
            canvas,
            warned: false,
        }
    }

    fn draw_entity(&mut self, entity: &Entity) -> Result<(), EcsError> {
        let transform = entity.require::<Transform>()?;
        let sprite = entity.require::<Sprite>()?;
        let (half_w, half_h) = sprite.half_extents();

        let canvas = self.canvas.as_mut();
        canvas.save();
        canvas.translate(transform.x + half_w, transform.y + half_h);
        canvas.rotate(transform.rotation);
        match Archetype::of(entity) {
            Archetype::Player => draw_player(canvas, sprite, entity.get::<PlayerController>()),
            Archetype::Enemy => draw_enemy(canvas, sprite, entity.get::<EnemyAi>()),
            Archetype::Bullet => draw_bullet(canvas, sprite),
            Archetype::Rock | Archetype::Generic => {
                canvas.set_fill_color(sprite.color);
                canvas.fill_rect(-half_w, -half_h, sprite.width, sprite.height);
            }
        }
        canvas.restore();
        Ok(())
    }

    fn draw_collider(&mut self, entity: &Entity) {
        let (Some(transform), Some(collider)) =
            (entity.get::<Transform>(), entity.get::<Collider>())
        else {
            return;
        };
        let (min, max) = collider.aabb(transform.position());
        self.canvas.set_stroke_color(Color::MAGENTA);
        self.canvas
            .stroke_rect(min.x, min.y, max.x - min.x, max.y - min.y);
    }
}

fn draw_player(canvas: &mut dyn Canvas, sprite: &Sprite, controller: Option<&PlayerController>) {
    let (half_w, half_h) = sprite.half_extents();

    if let Some(pc) = controller.filter(|pc| pc.thruster_intensity > 0.0) {
        canvas.set_fill_color(Color::ORANGE);
        canvas.set_alpha(pc.thruster_intensity);
        canvas.begin_path();
        canvas.move_to(-half_w * 0.5, half_h);
        canvas.line_to(half_w * 0.5, half_h);
        canvas.line_to(0.0, half_h + THRUSTER_LENGTH * pc.thruster_intensity);
        canvas.close_path();
        canvas.fill();
        canvas.set_alpha(1.0);
    }

    canvas.set_fill_color(sprite.color);
    canvas.begin_path();
    canvas.move_to(0.0, -half_h);
    canvas.line_to(half_w, half_h);
    canvas.line_to(-half_w, half_h);
    canvas.close_path();
    canvas.fill();

    if controller.is_some_and(|pc| pc.show_muzzle_flash) {
        canvas.set_fill_color(Color::YELLOW);
        canvas.begin_path();
        canvas.arc(0.0, -half_h, MUZZLE_FLASH_RADIUS, 0.0, TAU);
        canvas.fill();
    }
}

fn draw_enemy(canvas: &mut dyn Canvas, sprite: &Sprite, ai: Option<&EnemyAi>) {
    let (half_w, half_h) = sprite.half_extents();
    let (body, core) = match ai.map(|ai| ai.kind) {
        Some(EnemyKind::Spy) => (Color::YELLOW, Color::GREEN),
        _ => (Color::RED, Color::BLUE),
    };
    let pulse = ai.map_or(0.0, |ai| (ai.pulse_timer * PULSE_SPEED).sin() * 0.5 + 0.5);

    canvas.set_fill_color(body);
    canvas.fill_rect(-half_w, -half_h, sprite.width, sprite.height);

    canvas.set_fill_color(core);
    canvas.begin_path();
    canvas.arc(0.0, 0.0, half_w * 0.5 * (0.75 + 0.25 * pulse), 0.0, TAU);
    canvas.fill();
}

fn draw_bullet(canvas: &mut dyn Canvas, sprite: &Sprite) {
    let (half_w, half_h) = sprite.half_extents();
    canvas.set_fill_color(sprite.color);
    // glow
    canvas.set_alpha(0.3);
    canvas.fill_rect(-sprite.width, -half_h - 2.0, sprite.width * 2.0, sprite.height + 4.0);
    canvas.set_alpha(1.0);
    canvas.fill_rect(-half_w, -half_h, sprite.width, sprite.height);
}

impl System for RenderingSystem {
    fn name(&self) -> &'static str {
        "rendering"
    }

    fn signature(&self) -> Signature {
        Signature::of(&[ComponentKind::Transform, ComponentKind::Sprite])
    }

    fn priority(&self) -> i32 {
        PRIORITY
    }

    fn update(&mut self, ctx: &mut SystemContext<'_>, _dt: f32) -> Result<(), EcsError> {
        if !self.canvas.is_drawable() {
            if !self.warned {
                warn!("Canvas cannot draw; skipping the render pass");
                self.warned = true;
            }
            return Ok(());
        }

        let mut order: Vec<(f32, EntityId)> = Vec::with_capacity(ctx.members.len());
        for &id in ctx.members {
            let entity = ctx.entities.require(id)?;
            if !entity.is_active() || !entity.require::<Sprite>()?.visible {
                continue;
            }
            order.push((entity.require::<Transform>()?.y, id));
        }
        order.sort_by(|a, b| a.0.total_cmp(&b.0));

        for &(_, id) in &order {
            self.draw_entity(ctx.entities.require(id)?)?;
        }

        if ctx.resources.contains::<DebugMode>() {
            for &(_, id) in &order {
                self.draw_collider(ctx.entities.require(id)?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, NullCanvas, RecordingCanvas};
    use crate::components::tags::{Bullet, Enemy, Player};
    use crate::ecs::world::World;

    /// Render a single entity for one frame and return what was drawn.
    fn draw_one(build: impl FnOnce(&mut Entity)) -> Vec<DrawCommand> {
        let canvas = RecordingCanvas::new();
        let log = canvas.log();
        let mut world = World::new();
        world.add_system(RenderingSystem::new(Box::new(canvas)));
        build(world.create_entity());
        world.update(16.0);
        let commands = log.borrow().clone();
        commands
    }

    fn fill_colors(commands: &[DrawCommand]) -> Vec<Color> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillColor(color) => Some(*color),
                _ => None,
            })
            .collect()
    }

    fn arc_radii(commands: &[DrawCommand]) -> Vec<f32> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Arc { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect()
    }

    fn player(controller: PlayerController) -> impl FnOnce(&mut Entity) {
        move |e: &mut Entity| {
            e.add(Transform::new(0.0, 0.0))
                .add(Sprite::new(40.0, 40.0, Color::CYAN))
                .add(controller)
                .add(Player);
        }
    }

    fn enemy(ai: EnemyAi) -> impl FnOnce(&mut Entity) {
        move |e: &mut Entity| {
            e.add(Transform::new(0.0, 0.0))
                .add(Sprite::new(30.0, 30.0, Color::RED))
                .add(ai)
                .add(Enemy);
        }
    }

    #[test]
    fn null_canvas_skips_pass() {
        let mut world = World::new();
        world.add_system(RenderingSystem::new(Box::new(NullCanvas)));
        world
            .create_entity()
            .add(Transform::new(0.0, 0.0))
            .add(Sprite::new(10.0, 10.0, Color::GRAY));
        world.update(16.0);
        world.update(16.0);
    }

    #[test]
    fn sprites_drawn_back_to_front() {
        let canvas = RecordingCanvas::new();
        let log = canvas.log();
        let mut world = World::new();
        world.add_system(RenderingSystem::new(Box::new(canvas)));
        world
            .create_entity()
            .add(Transform::new(0.0, 200.0))
            .add(Sprite::new(10.0, 10.0, Color::RED));
        world
            .create_entity()
            .add(Transform::new(0.0, 50.0))
            .add(Sprite::new(10.0, 10.0, Color::BLUE));
        world
            .create_entity()
            .add(Transform::new(0.0, 100.0))
            .add(Sprite::new(10.0, 10.0, Color::GREEN).hidden());
        world.update(16.0);

        let fills: Vec<Color> = log
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillColor(color) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![Color::BLUE, Color::RED]);

        let translations: Vec<DrawCommand> = log
            .borrow()
            .iter()
            .copied()
            .filter(|c| matches!(c, DrawCommand::Translate { .. }))
            .collect();
        assert_eq!(
            translations,
            vec![
                DrawCommand::Translate { x: 5.0, y: 55.0 },
                DrawCommand::Translate { x: 5.0, y: 205.0 },
            ]
        );
    }

    #[test]
    fn debug_mode_outlines_colliders() {
        let canvas = RecordingCanvas::new();
        let log = canvas.log();
        let mut world = World::new();
        world.insert_resource(DebugMode {});
        world.add_system(RenderingSystem::new(Box::new(canvas)));
        world
            .create_entity()
            .add(Transform::new(10.0, 20.0))
            .add(Sprite::new(8.0, 8.0, Color::GRAY))
            .add(Collider::new(8.0, 8.0));
        world.update(16.0);

        assert!(log.borrow().contains(&DrawCommand::StrokeRect {
            x: 10.0,
            y: 20.0,
            width: 8.0,
            height: 8.0
        }));
    }

    #[test]
    fn sprite_is_rotated_about_its_center() {
        let mut transform = Transform::new(10.0, 20.0);
        transform.rotation = 0.5;
        let commands = draw_one(|e| {
            e.add(transform).add(Sprite::new(20.0, 10.0, Color::GRAY));
        });
        assert_eq!(
            &commands[..3],
            &[
                DrawCommand::Save,
                DrawCommand::Translate { x: 20.0, y: 25.0 },
                DrawCommand::Rotate(0.5),
            ]
        );
        assert_eq!(commands.last(), Some(&DrawCommand::Restore));
    }

    // ==================== PLAYER ====================

    #[test]
    fn idle_player_has_no_flame() {
        let commands = draw_one(player(PlayerController::new(5.0)));
        assert_eq!(fill_colors(&commands), vec![Color::CYAN]);
        assert!(arc_radii(&commands).is_empty());
    }

    #[test]
    fn thruster_flame_follows_intensity() {
        let mut controller = PlayerController::new(5.0);
        controller.thruster_intensity = 0.5;
        let commands = draw_one(player(controller));

        assert_eq!(fill_colors(&commands), vec![Color::ORANGE, Color::CYAN]);
        assert!(commands.contains(&DrawCommand::Alpha(0.5)));
        // Flame tip sits half a flame length below the hull.
        assert!(commands.contains(&DrawCommand::LineTo { x: 0.0, y: 30.0 }));
    }

    #[test]
    fn muzzle_flash_is_drawn_at_the_nose() {
        let mut controller = PlayerController::new(5.0);
        controller.trigger_muzzle_flash(80.0);
        let commands = draw_one(player(controller));

        assert_eq!(fill_colors(&commands), vec![Color::CYAN, Color::YELLOW]);
        assert!(commands.contains(&DrawCommand::Arc {
            x: 0.0,
            y: -20.0,
            radius: MUZZLE_FLASH_RADIUS,
            start: 0.0,
            end: TAU,
        }));
    }

    // ==================== ENEMIES ====================

    #[test]
    fn enemy_and_spy_colors() {
        let commands = draw_one(enemy(EnemyAi::new(EnemyKind::Enemy, 2.0, 0.0)));
        assert_eq!(fill_colors(&commands), vec![Color::RED, Color::BLUE]);

        let commands = draw_one(enemy(EnemyAi::new(EnemyKind::Spy, 3.0, 0.0)));
        assert_eq!(fill_colors(&commands), vec![Color::YELLOW, Color::GREEN]);
    }

    #[test]
    fn enemy_core_pulses_with_timer() {
        let resting = arc_radii(&draw_one(enemy(EnemyAi::new(EnemyKind::Enemy, 2.0, 0.0))));
        assert_eq!(resting, vec![6.5625]);

        let mut ai = EnemyAi::new(EnemyKind::Enemy, 2.0, 0.0);
        ai.pulse_timer = std::f32::consts::FRAC_PI_2 / PULSE_SPEED;
        let peak = arc_radii(&draw_one(enemy(ai)));
        assert_eq!(peak.len(), 1);
        assert!((peak[0] - 7.5).abs() < 1e-3);
    }

    // ==================== BULLETS ====================

    #[test]
    fn bullet_has_glow_under_the_body() {
        let commands = draw_one(|e| {
            e.add(Transform::new(0.0, 0.0))
                .add(Sprite::new(4.0, 12.0, Color::YELLOW))
                .add(Bullet);
        });
        let body: Vec<DrawCommand> = commands
            .iter()
            .copied()
            .filter(|c| {
                matches!(c, DrawCommand::Alpha(_) | DrawCommand::FillRect { .. })
            })
            .collect();
        assert_eq!(
            body,
            vec![
                DrawCommand::Alpha(0.3),
                DrawCommand::FillRect {
                    x: -4.0,
                    y: -8.0,
                    width: 8.0,
                    height: 16.0
                },
                DrawCommand::Alpha(1.0),
                DrawCommand::FillRect {
                    x: -2.0,
                    y: -6.0,
                    width: 4.0,
                    height: 12.0
                },
            ]
        );
    }
}
