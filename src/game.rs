//! Session driver.
//!
//! [`Game`] owns a [`World`] with the standard systems installed and runs one
//! play session on top of it: it spawns enemy waves, turns the fire key into
//! bullets, credits bullet kills to the player and notices when the player
//! dies. Everything frame-by-frame (movement, AI, collisions, drawing) is left
//! to the systems.

use glam::Vec2;
use log::{debug, info};
use serde::Serialize;

use crate::canvas::Canvas;
use crate::components::energy::Energy;
use crate::components::enemyai::EnemyKind;
use crate::components::health::Health;
use crate::components::playercontroller::PlayerController;
use crate::components::score::Score;
use crate::components::sprite::Sprite;
use crate::components::tags::Archetype;
use crate::components::transform::Transform;
use crate::ecs::entity::EntityId;
use crate::ecs::world::World;
use crate::events::Event;
use crate::factory::{ENEMY_SIZE, EntityFactory};
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputState, Key, KeyboardInput};
use crate::resources::worldtime::WorldTime;
use crate::systems::boundary::BoundarySystem;
use crate::systems::collision::CollisionSystem;
use crate::systems::enemyai::EnemyAiSystem;
use crate::systems::movement::MovementSystem;
use crate::systems::playerinput::PlayerInputSystem;
use crate::systems::projectile::ProjectileSystem;
use crate::systems::render::RenderingSystem;
use crate::systems::status::StatusSystem;

/// How long the muzzle flash stays visible after a shot, in milliseconds.
const MUZZLE_FLASH_MS: f32 = 80.0;
/// Grace period after the player is hit, in milliseconds.
const PLAYER_INVULNERABILITY_MS: f32 = 1000.0;
const ROCK_MIN_SIZE: f32 = 20.0;
const ROCK_SIZE_RANGE: f32 = 20.0;

/// End-of-session figures.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub frames: u64,
    pub elapsed_ms: f32,
    pub score: u32,
    pub high_score: u32,
    pub kills: u32,
    pub shots_fired: u32,
    pub waves: u32,
    pub player_health: i32,
    pub player_energy: f32,
    pub live_entities: usize,
    pub game_over: bool,
}

pub struct Game {
    world: World,
    factory: EntityFactory,
    config: GameConfig,
    rng: fastrand::Rng,
    player: EntityId,
    spawn_timer: f32,
    score: u32,
    high_score: u32,
    kills: u32,
    shots_fired: u32,
    waves: u32,
    game_over: bool,
}

impl Game {
    /// Build a world with the standard systems and queue the player ship.
    pub fn new(config: GameConfig, canvas: Box<dyn Canvas>, seed: u64) -> Self {
        let canvas_size = config.canvas_size();
        let factory = EntityFactory::new(&config);

        let mut world = World::new();
        world.insert_resource(InputState::default());
        world.insert_resource(canvas_size);
        world.add_system(PlayerInputSystem::new());
        world.add_system(EnemyAiSystem::new(canvas_size));
        world.add_system(ProjectileSystem::new(canvas_size));
        world.add_system(MovementSystem::new());
        world.add_system(BoundarySystem::new(canvas_size));
        world.add_system(CollisionSystem::new());
        world.add_system(StatusSystem::new());
        world.add_system(RenderingSystem::new(canvas));

        let player = factory.player(&mut world);
        info!(
            "New session on a {}x{} canvas (seed {})",
            canvas_size.width, canvas_size.height, seed
        );

        Self {
            world,
            factory,
            config,
            rng: fastrand::Rng::with_seed(seed),
            player,
            spawn_timer: 0.0,
            score: 0,
            high_score: 0,
            kills: 0,
            shots_fired: 0,
            waves: 0,
            game_over: false,
        }
    }

    /// Carry a high score over from an earlier session.
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> EntityId {
        self.player
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Keyboard state to feed before calling [`step`](Self::step).
    pub fn input_mut(&mut self) -> &mut InputState {
        self.world.resource_mut::<InputState>()
    }

    /// Advance the session by `dt` milliseconds and return the frame's events.
    ///
    /// Once the game is over nothing moves any more; the call is a no-op.
    pub fn step(&mut self, dt: f32) -> Vec<Event> {
        if self.game_over {
            return Vec::new();
        }

        self.handle_debug_toggle();
        self.handle_fire();
        self.spawn_waves(dt);
        self.world.update(dt);
        let events = self.world.drain_events();
        self.process_events(&events);
        self.world.resource_mut::<InputState>().end_frame();
        events
    }

    /// F11 flips the collider overlay on and off.
    fn handle_debug_toggle(&mut self) {
        if !self
            .world
            .resource::<InputState>()
            .is_key_just_pressed(Key::F11)
        {
            return;
        }
        if self.world.remove_resource::<DebugMode>().is_some() {
            info!("Debug mode disabled");
        } else {
            self.world.insert_resource(DebugMode {});
            info!("Debug mode enabled");
        }
    }

    fn handle_fire(&mut self) {
        if !self
            .world
            .resource::<InputState>()
            .is_key_just_pressed(Key::Space)
        {
            return;
        }
        let Some(player) = self.world.entity_mut(self.player) else {
            return;
        };
        if !player.is_active() {
            return;
        }
        let (Some(transform), Some(sprite)) =
            (player.get::<Transform>().copied(), player.get::<Sprite>().copied())
        else {
            return;
        };
        if let Some(energy) = player.get_mut::<Energy>() {
            if !energy.consume_shot() {
                debug!("Shot refused: {:.1} energy left", energy.current_energy);
                return;
            }
        }
        if let Some(controller) = player.get_mut::<PlayerController>() {
            controller.trigger_muzzle_flash(MUZZLE_FLASH_MS);
        }

        let muzzle_x = transform.x + sprite.width * 0.5;
        self.factory
            .bullet(&mut self.world, muzzle_x, transform.y, Vec2::NEG_Y);
        self.shots_fired += 1;
    }

    fn spawn_waves(&mut self, dt: f32) {
        let interval = self.config.enemy_interval_ms as f32;
        if interval <= 0.0 {
            return;
        }
        self.spawn_timer += dt;
        while self.spawn_timer >= interval {
            self.spawn_timer -= interval;
            self.spawn_wave();
        }
    }

    fn spawn_wave(&mut self) {
        let width = self.factory.canvas().width;
        let kind = if self.rng.f32() < self.config.spy_chance {
            EnemyKind::Spy
        } else {
            EnemyKind::Enemy
        };
        let x = self.rng.f32() * (width - ENEMY_SIZE).max(0.0);
        self.factory.enemy(&mut self.world, kind, x);

        if self.rng.f32() < self.config.rock_chance {
            let size = ROCK_MIN_SIZE + self.rng.f32() * ROCK_SIZE_RANGE;
            let x = self.rng.f32() * (width - size).max(0.0);
            self.factory.rock(&mut self.world, x, size);
        }
        self.waves += 1;
        debug!("Wave {}: {:?} at x={:.0}", self.waves, kind, x);
    }

    fn process_events(&mut self, events: &[Event]) {
        for event in events {
            match *event {
                Event::Killed(kill) if kill.victim == self.player => {
                    info!("Player destroyed by {:?}", kill.killer_archetype);
                    self.game_over = true;
                }
                Event::Killed(kill) if kill.killer == self.player => {
                    self.kills += 1;
                }
                // Bullets die on impact, so the player collects for them.
                Event::Killed(kill) if kill.killer_archetype == Archetype::Bullet => {
                    self.kills += 1;
                    self.credit_player(kill.points, kill.victim_score);
                }
                Event::Damaged(hit) if hit.entity == self.player && hit.remaining > 0 => {
                    if let Some(health) = self
                        .world
                        .entity_mut(self.player)
                        .and_then(|p| p.get_mut::<Health>())
                    {
                        health.make_invulnerable(PLAYER_INVULNERABILITY_MS);
                    }
                }
                Event::Destroyed(gone) if gone.entity == self.player => {
                    self.game_over = true;
                }
                _ => {}
            }
        }

        if let Some(score) = self.world.entity(self.player).and_then(|p| p.get::<Score>()) {
            self.score = score.value;
        }
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Score `points` for the player. Energy comes back only for victims
    /// that carried a Score of their own.
    fn credit_player(&mut self, points: u32, energy_reward: Option<u32>) {
        let Some(player) = self.world.entity_mut(self.player) else {
            return;
        };
        if !player.is_active() {
            return;
        }
        if let Some(score) = player.get_mut::<Score>() {
            score.add(points);
        }
        if let (Some(energy), Some(reward)) = (player.get_mut::<Energy>(), energy_reward) {
            energy.restore(reward as f32);
        }
    }

    pub fn summary(&self) -> SessionSummary {
        let time = self.world.get_resource::<WorldTime>().copied().unwrap_or_default();
        let player = self.world.entity(self.player);
        SessionSummary {
            frames: time.frame_count,
            elapsed_ms: time.elapsed,
            score: self.score,
            high_score: self.high_score,
            kills: self.kills,
            shots_fired: self.shots_fired,
            waves: self.waves,
            player_health: player
                .and_then(|p| p.get::<Health>())
                .map_or(0, |h| h.current_health),
            player_energy: player
                .and_then(|p| p.get::<Energy>())
                .map_or(0.0, |e| e.current_energy),
            live_entities: self.world.len(),
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::NullCanvas;
    use crate::events::collision::KillEvent;

    const FRAME: f32 = 1000.0 / 60.0;

    fn game() -> Game {
        let config = GameConfig {
            enemy_interval_ms: 0,
            ..GameConfig::default()
        };
        Game::new(config, Box::new(NullCanvas), 1)
    }

    #[test]
    fn fire_spends_energy_and_spawns_bullet() {
        let mut game = game();
        game.step(FRAME);
        game.input_mut().press(Key::Space);
        game.step(FRAME);
        game.step(FRAME);

        assert_eq!(game.summary().shots_fired, 1);
        let player = game.world().entity(game.player()).unwrap();
        assert!(player.get::<Energy>().unwrap().current_energy < 100.0);
        assert!(player.get::<PlayerController>().unwrap().show_muzzle_flash);
        let bullets = game
            .world()
            .entities()
            .iter()
            .filter(|e| Archetype::of(e) == Archetype::Bullet)
            .count();
        assert_eq!(bullets, 1);
    }

    #[test]
    fn held_fire_key_shoots_once() {
        let mut game = game();
        game.step(FRAME);
        game.input_mut().press(Key::Space);
        for _ in 0..5 {
            game.input_mut().press(Key::Space);
            game.step(FRAME);
        }
        assert_eq!(game.summary().shots_fired, 1);
    }

    #[test]
    fn waves_spawn_on_interval() {
        let config = GameConfig {
            enemy_interval_ms: 100,
            rock_chance: 0.0,
            ..GameConfig::default()
        };
        let mut game = Game::new(config, Box::new(NullCanvas), 3);
        for _ in 0..13 {
            game.step(FRAME);
        }
        // 13 frames is a little over 216ms.
        assert_eq!(game.summary().waves, 2);
    }

    #[test]
    fn f11_toggles_debug_mode() {
        let mut game = game();
        game.input_mut().press(Key::F11);
        game.step(FRAME);
        assert!(game.world().get_resource::<DebugMode>().is_some());

        // Held: no further toggles.
        game.step(FRAME);
        assert!(game.world().get_resource::<DebugMode>().is_some());

        game.input_mut().release(Key::F11);
        game.step(FRAME);
        game.input_mut().press(Key::F11);
        game.step(FRAME);
        assert!(game.world().get_resource::<DebugMode>().is_none());
    }

    fn bullet_kill(victim_score: Option<u32>) -> Event {
        Event::Killed(KillEvent {
            victim: EntityId(9_999),
            victim_archetype: Archetype::Generic,
            killer: EntityId(9_998),
            killer_archetype: Archetype::Bullet,
            points: victim_score.unwrap_or(10),
            victim_score,
            credited: false,
        })
    }

    fn player_energy(game: &Game) -> f32 {
        game.world()
            .entity(game.player())
            .and_then(|p| p.get::<Energy>())
            .map_or(0.0, |e| e.current_energy)
    }

    #[test]
    fn bullet_kill_refills_energy_only_for_scored_victims() {
        let mut game = game();
        game.step(FRAME);
        let player = game.player();
        if let Some(energy) = game
            .world_mut()
            .entity_mut(player)
            .and_then(|p| p.get_mut::<Energy>())
        {
            energy.current_energy = 50.0;
        }

        game.process_events(&[bullet_kill(None)]);
        assert_eq!(game.score(), 10);
        assert_eq!(player_energy(&game), 50.0);

        game.process_events(&[bullet_kill(Some(25))]);
        assert_eq!(game.score(), 35);
        assert_eq!(player_energy(&game), 75.0);
    }

    #[test]
    fn high_score_carries_over() {
        let game = game().with_high_score(500);
        assert_eq!(game.high_score(), 500);
        assert_eq!(game.summary().high_score, 500);
    }
}
