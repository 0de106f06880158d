//! SpyShoot headless runner.
//!
//! Plays a scripted session without a window: an autopilot holds keys on the
//! shared input state, the game runs at a fixed step and draws into a
//! recording canvas. At the end a session summary is printed, as text or as
//! JSON.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 3600 --seed 7 --json
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use spyshoot::canvas::RecordingCanvas;
use spyshoot::game::{Game, SessionSummary};
use spyshoot::resources::debugmode::DebugMode;
use spyshoot::resources::gameconfig::GameConfig;
use spyshoot::resources::input::{InputState, Key};

/// Frames per autopilot sweep across the screen.
const SWEEP_FRAMES: u64 = 240;
/// Frames between autopilot shots.
const FIRE_EVERY: u64 = 12;

/// SpyShoot: headless session runner
#[derive(Parser)]
#[command(version, about = "Runs a scripted SpyShoot session and reports the result.")]
struct Cli {
    /// INI file with gameplay settings.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of frames to simulate.
    #[arg(long, value_name = "N", default_value_t = 3600)]
    frames: u64,

    /// Seed for wave randomness. Random when omitted.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Print the session summary as JSON.
    #[arg(long)]
    json: bool,

    /// Outline colliders in the recorded draw calls.
    #[arg(long)]
    debug: bool,
}

/// Sweep left and right, fire on a fixed cadence.
fn autopilot(frame: u64, input: &mut InputState) {
    let going_right = (frame / (SWEEP_FRAMES / 2)) % 2 == 0;
    if going_right {
        input.release(Key::A);
        input.press(Key::D);
    } else {
        input.release(Key::D);
        input.press(Key::A);
    }
    if frame % FIRE_EVERY == 0 {
        input.press(Key::Space);
    } else {
        input.release(Key::Space);
    }
}

fn print_summary(summary: &SessionSummary) {
    println!("frames:       {}", summary.frames);
    println!("elapsed:      {:.1}s", summary.elapsed_ms / 1000.0);
    println!("score:        {}", summary.score);
    println!("high score:   {}", summary.high_score);
    println!("kills:        {}", summary.kills);
    println!("shots fired:  {}", summary.shots_fired);
    println!("waves:        {}", summary.waves);
    println!("health:       {}", summary.player_health);
    println!("energy:       {:.1}", summary.player_energy);
    println!("entities:     {}", summary.live_entities);
    println!("game over:    {}", summary.game_over);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{} ({}); using defaults", e, cli.config.display());
    }
    let frame_ms = config.frame_ms;
    let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));

    let canvas = RecordingCanvas::new();
    let draw_log = canvas.log();
    let mut game = Game::new(config, Box::new(canvas), seed);
    if cli.debug {
        game.world_mut().insert_resource(DebugMode {});
    }

    let mut draw_calls: usize = 0;
    for frame in 0..cli.frames {
        autopilot(frame, game.input_mut());
        game.step(frame_ms);
        draw_calls += draw_log.borrow().len();
        draw_log.borrow_mut().clear();
        if game.is_game_over() {
            info!("Game over after {} frames", frame + 1);
            break;
        }
    }
    info!("Recorded {} draw calls", draw_calls);

    let summary = game.summary();
    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing summary: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print_summary(&summary);
    }
}
