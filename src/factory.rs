//! Archetype assembly.
//!
//! [`EntityFactory`] knows the full component set of every archetype the game
//! spawns. It works through any [`Spawner`], so the game shell can spawn
//! through the [`World`](crate::ecs::World) and tests can spawn through
//! either. Entities created here become visible at the next frame boundary.

use glam::Vec2;
use log::debug;

use crate::components::acceleration::Acceleration;
use crate::components::collider::{Collider, layers};
use crate::components::enemyai::{EnemyAi, EnemyKind};
use crate::components::energy::Energy;
use crate::components::health::Health;
use crate::components::playercontroller::PlayerController;
use crate::components::projectile::Projectile;
use crate::components::rigidbody::RigidBody;
use crate::components::score::Score;
use crate::components::sprite::{Color, Sprite};
use crate::components::tags::{Bullet, Enemy, Player, Rock};
use crate::components::transform::Transform;
use crate::components::velocity::Velocity;
use crate::ecs::entities::Spawner;
use crate::ecs::entity::EntityId;
use crate::resources::canvassize::CanvasSize;
use crate::resources::gameconfig::GameConfig;

pub const PLAYER_SIZE: f32 = 40.0;
pub const ENEMY_SIZE: f32 = 30.0;
pub const BULLET_WIDTH: f32 = 4.0;
pub const BULLET_HEIGHT: f32 = 12.0;
pub const BULLET_SPEED: f32 = 8.0;

const ENEMY_SPEED: f32 = 2.0;
const SPY_SPEED: f32 = 3.0;
const ENEMY_MAX_SPEED: f32 = 6.0;
const ENEMY_POINTS: u32 = 10;
const SPY_POINTS: u32 = 50;

const ROCK_SPEED: f32 = 1.5;
const ROCK_MAX_SPEED: f32 = 4.0;
const ROCK_HEALTH: i32 = 3;
const ROCK_POINTS: u32 = 25;

/// Energy regained per second by the player.
const PLAYER_ENERGY_REGEN: f32 = 5.0;
/// Energy spent per shot.
const PLAYER_SHOT_COST: f32 = 10.0;

/// Builds archetypes from the gameplay settings.
#[derive(Debug, Clone)]
pub struct EntityFactory {
    canvas: CanvasSize,
    player_max_speed: f32,
    player_acceleration: f32,
    player_deceleration: f32,
    player_health: i32,
    player_energy: f32,
}

impl Default for EntityFactory {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl EntityFactory {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            canvas: config.canvas_size(),
            player_max_speed: config.player_max_speed,
            player_acceleration: config.player_acceleration,
            player_deceleration: config.player_deceleration,
            player_health: i32::try_from(config.player_health).unwrap_or(i32::MAX),
            player_energy: config.player_energy,
        }
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// The player ship, centered horizontally near the bottom edge.
    pub fn player(&self, spawner: &mut impl Spawner) -> EntityId {
        let x = (self.canvas.width - PLAYER_SIZE) * 0.5;
        let y = self.canvas.height - PLAYER_SIZE * 1.5;
        let id = spawner
            .create_entity()
            .add(Transform::new(x, y))
            .add(Velocity::default().with_max_speed(self.player_max_speed))
            .add(Acceleration::new(
                self.player_acceleration,
                self.player_deceleration,
            ))
            .add(Sprite::new(PLAYER_SIZE, PLAYER_SIZE, Color::CYAN))
            .add(Collider::new(PLAYER_SIZE, PLAYER_SIZE).on_layer(
                layers::PLAYER,
                layers::ENEMY | layers::ROCK | layers::POWER_UP,
            ))
            .add(PlayerController::new(self.player_max_speed))
            .add(Health::new(self.player_health))
            .add(
                Energy::new(self.player_energy)
                    .with_rates(PLAYER_ENERGY_REGEN, PLAYER_SHOT_COST),
            )
            .add(Score::default())
            .add(Player)
            .id();
        debug!("Queued player {} at ({}, {})", id, x, y);
        id
    }

    /// An enemy or spy entering from just above the top edge at `x`.
    pub fn enemy(&self, spawner: &mut impl Spawner, kind: EnemyKind, x: f32) -> EntityId {
        let (speed, points, color) = match kind {
            EnemyKind::Enemy => (ENEMY_SPEED, ENEMY_POINTS, Color::RED),
            EnemyKind::Spy => (SPY_SPEED, SPY_POINTS, Color::YELLOW),
        };
        spawner
            .create_entity()
            .add(Transform::new(x, -ENEMY_SIZE))
            .add(Velocity::new(0.0, speed).with_max_speed(ENEMY_MAX_SPEED))
            .add(Sprite::new(ENEMY_SIZE, ENEMY_SIZE, color))
            .add(
                Collider::new(ENEMY_SIZE, ENEMY_SIZE)
                    .on_layer(layers::ENEMY, layers::PLAYER | layers::PLAYER_BULLET),
            )
            .add(EnemyAi::new(kind, speed, x))
            .add(Health::new(1))
            .add(Score::new(points))
            .add(Enemy)
            .id()
    }

    /// A player bullet whose top-center sits at `(x, y)`.
    pub fn bullet(&self, spawner: &mut impl Spawner, x: f32, y: f32, direction: Vec2) -> EntityId {
        let projectile = Projectile::new(BULLET_SPEED, direction);
        let v = projectile.velocity();
        spawner
            .create_entity()
            .add(Transform::new(x - BULLET_WIDTH * 0.5, y - BULLET_HEIGHT))
            .add(Velocity::new(v.x, v.y))
            .add(Sprite::new(BULLET_WIDTH, BULLET_HEIGHT, Color::YELLOW))
            .add(
                Collider::new(BULLET_WIDTH, BULLET_HEIGHT)
                    .on_layer(layers::PLAYER_BULLET, layers::ENEMY | layers::ROCK),
            )
            .add(projectile)
            .add(Health::new(1))
            .add(Bullet)
            .id()
    }

    /// A falling rock of side `size` entering from above at `x`.
    pub fn rock(&self, spawner: &mut impl Spawner, x: f32, size: f32) -> EntityId {
        spawner
            .create_entity()
            .add(Transform::new(x, -size))
            .add(Velocity::new(0.0, ROCK_SPEED).with_max_speed(ROCK_MAX_SPEED))
            .add(Sprite::new(size, size, Color::GRAY))
            .add(RigidBody::new(size / 10.0, 1.0))
            .add(
                Collider::new(size, size)
                    .on_layer(layers::ROCK, layers::PLAYER | layers::PLAYER_BULLET),
            )
            .add(Health::new(ROCK_HEALTH))
            .add(Score::new(ROCK_POINTS))
            .add(Rock)
            .id()
    }
}
