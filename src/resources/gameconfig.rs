//! Game configuration resource.
//!
//! Manages gameplay settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [canvas]
//! width = 800
//! height = 600
//!
//! [player]
//! max_speed = 8
//! acceleration = 0.8
//! deceleration = 0.92
//! health = 3
//! energy = 100
//!
//! [spawn]
//! enemy_interval_ms = 1200
//! spy_chance = 0.2
//! rock_chance = 0.1
//!
//! [session]
//! frame_ms = 16.667
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use super::canvassize::CanvasSize;

/// Default safe values for startup
const DEFAULT_CANVAS_WIDTH: u32 = 800;
const DEFAULT_CANVAS_HEIGHT: u32 = 600;
const DEFAULT_PLAYER_MAX_SPEED: f32 = 8.0;
const DEFAULT_PLAYER_ACCELERATION: f32 = 0.8;
const DEFAULT_PLAYER_DECELERATION: f32 = 0.92;
const DEFAULT_PLAYER_HEALTH: u32 = 3;
const DEFAULT_PLAYER_ENERGY: f32 = 100.0;
const DEFAULT_ENEMY_INTERVAL_MS: u32 = 1200;
const DEFAULT_SPY_CHANCE: f32 = 0.2;
const DEFAULT_ROCK_CHANCE: f32 = 0.1;
const DEFAULT_FRAME_MS: f32 = 1000.0 / 60.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Gameplay configuration.
///
/// Read once at startup; the factory and the game shell copy what they need.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Playfield width in pixels.
    pub canvas_width: u32,
    /// Playfield height in pixels.
    pub canvas_height: u32,
    pub player_max_speed: f32,
    /// Velocity added per tick while a direction is held.
    pub player_acceleration: f32,
    /// Fraction of velocity kept per tick.
    pub player_deceleration: f32,
    pub player_health: u32,
    pub player_energy: f32,
    /// Milliseconds between enemy waves.
    pub enemy_interval_ms: u32,
    /// Probability that a spawned enemy is a spy.
    pub spy_chance: f32,
    /// Probability that a wave also drops a rock.
    pub rock_chance: f32,
    /// Fixed simulation step used by the headless session.
    pub frame_ms: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            player_max_speed: DEFAULT_PLAYER_MAX_SPEED,
            player_acceleration: DEFAULT_PLAYER_ACCELERATION,
            player_deceleration: DEFAULT_PLAYER_DECELERATION,
            player_health: DEFAULT_PLAYER_HEALTH,
            player_energy: DEFAULT_PLAYER_ENERGY,
            enemy_interval_ms: DEFAULT_ENEMY_INTERVAL_MS,
            spy_chance: DEFAULT_SPY_CHANCE,
            rock_chance: DEFAULT_ROCK_CHANCE,
            frame_ms: DEFAULT_FRAME_MS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [canvas] section
        if let Some(width) = config.getuint("canvas", "width").ok().flatten() {
            self.canvas_width = width as u32;
        }
        if let Some(height) = config.getuint("canvas", "height").ok().flatten() {
            self.canvas_height = height as u32;
        }

        // [player] section
        if let Some(v) = float("player", "max_speed") {
            self.player_max_speed = v;
        }
        if let Some(v) = float("player", "acceleration") {
            self.player_acceleration = v;
        }
        if let Some(v) = float("player", "deceleration") {
            self.player_deceleration = v;
        }
        if let Some(v) = config.getuint("player", "health").ok().flatten() {
            self.player_health = v as u32;
        }
        if let Some(v) = float("player", "energy") {
            self.player_energy = v;
        }

        // [spawn] section
        if let Some(v) = config.getuint("spawn", "enemy_interval_ms").ok().flatten() {
            self.enemy_interval_ms = v as u32;
        }
        if let Some(v) = float("spawn", "spy_chance") {
            self.spy_chance = v.clamp(0.0, 1.0);
        }
        if let Some(v) = float("spawn", "rock_chance") {
            self.rock_chance = v.clamp(0.0, 1.0);
        }

        // [session] section
        if let Some(v) = float("session", "frame_ms") {
            self.frame_ms = v;
        }

        info!(
            "Loaded config: {}x{} canvas, player speed={} health={} energy={}, wave every {}ms",
            self.canvas_width,
            self.canvas_height,
            self.player_max_speed,
            self.player_health,
            self.player_energy,
            self.enemy_interval_ms
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [canvas] section
        config.set("canvas", "width", Some(self.canvas_width.to_string()));
        config.set("canvas", "height", Some(self.canvas_height.to_string()));

        // [player] section
        config.set("player", "max_speed", Some(self.player_max_speed.to_string()));
        config.set(
            "player",
            "acceleration",
            Some(self.player_acceleration.to_string()),
        );
        config.set(
            "player",
            "deceleration",
            Some(self.player_deceleration.to_string()),
        );
        config.set("player", "health", Some(self.player_health.to_string()));
        config.set("player", "energy", Some(self.player_energy.to_string()));

        // [spawn] section
        config.set(
            "spawn",
            "enemy_interval_ms",
            Some(self.enemy_interval_ms.to_string()),
        );
        config.set("spawn", "spy_chance", Some(self.spy_chance.to_string()));
        config.set("spawn", "rock_chance", Some(self.rock_chance.to_string()));

        // [session] section
        config.set("session", "frame_ms", Some(self.frame_ms.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Playfield size as the resource systems consume.
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.canvas_width as f32, self.canvas_height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("spyshoot_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let cfg = GameConfig::new();
        assert_eq!(cfg.canvas_width, 800);
        assert_eq!(cfg.canvas_height, 600);
        assert_eq!(cfg.player_health, 3);
        assert_eq!(cfg.canvas_size(), CanvasSize::new(800.0, 600.0));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut cfg = GameConfig::with_path(temp_path("does_not_exist"));
        assert!(cfg.load_from_file().is_err());
        assert_eq!(cfg.canvas_width, 800);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[canvas]\nwidth = 1024\n\n[spawn]\nspy_chance = 3.0\n").unwrap();
        let mut cfg = GameConfig::with_path(&path);
        cfg.load_from_file().unwrap();
        assert_eq!(cfg.canvas_width, 1024);
        assert_eq!(cfg.canvas_height, 600);
        assert_eq!(cfg.spy_chance, 1.0);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let mut saved = GameConfig::with_path(&path);
        saved.canvas_height = 720;
        saved.player_energy = 55.0;
        saved.enemy_interval_ms = 900;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.canvas_height, 720);
        assert_eq!(loaded.player_energy, 55.0);
        assert_eq!(loaded.enemy_interval_ms, 900);
        let _ = std::fs::remove_file(&path);
    }
}
