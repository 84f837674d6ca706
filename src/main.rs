//! Glow Pong headless runner
//!
//! Plays a match between two ball-tracking bots without a window, the way a
//! windowing host would drive the session: poll input, update, render,
//! dispatch sounds.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;

use glow_pong::audio::{LogAudio, dispatch_sounds};
use glow_pong::renderer::HeadlessRenderer;
use glow_pong::sim::{GameEvent, GamePhase, GameSession, Key, Side};
use glow_pong::{GameConfig, QualityPreset, Settings};

#[derive(Parser, Debug)]
#[command(name = "glow-pong", about = "Run a headless two-bot Pong match")]
struct Args {
    /// JSON game config (defaults apply to missing fields)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Frames to simulate
    #[arg(long, default_value_t = 36_000)]
    frames: u64,
    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Particle RNG seed (overrides the config)
    #[arg(long)]
    seed: Option<u64>,
    /// Quality preset: low, medium or high
    #[arg(long, default_value = "medium")]
    quality: String,
    /// Stop after the first finished match instead of restarting
    #[arg(long)]
    single: bool,
}

#[derive(Debug, Default, Serialize)]
struct RunSummary {
    frames: u64,
    matches: u32,
    winners: Vec<u32>,
    final_score: (u32, u32),
    paddle_hits: u64,
    points: u64,
    shaken_frames: u64,
    sounds_played: u64,
}

/// Hold the move keys that steer a paddle toward the ball
fn steer(session: &mut GameSession, side: Side) {
    let (up, down) = match side {
        Side::Left => (Key::Player1Up, Key::Player1Down),
        Side::Right => (Key::Player2Up, Key::Player2Down),
    };
    let target = session.ball().center().y;
    let paddle = session.paddle(side).body.center().y;
    // Dead zone so the bots don't jitter
    let dead_zone = session.paddle(side).body.size.y * 0.2;

    let keys = session.keys_mut();
    keys.set(up, target < paddle - dead_zone);
    keys.set(down, target > paddle + dead_zone);
}

fn run(args: &Args) -> Result<RunSummary> {
    if !(args.dt > 0.0 && args.dt.is_finite()) {
        return Err(anyhow!("dt must be a positive number of seconds"));
    }

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let quality = QualityPreset::parse(&args.quality)
        .ok_or_else(|| anyhow!("unknown quality preset '{}'", args.quality))?;

    let mut session = GameSession::try_with_settings(config, Settings::from_preset(quality))?;
    let mut renderer = HeadlessRenderer::default();
    let mut audio = LogAudio::new();
    let mut summary = RunSummary::default();
    let mut time = 0.0f32;

    for frame in 0..args.frames {
        // Tap start whenever we're waiting on it
        let waiting = session.phase() != GamePhase::Active;
        session.keys_mut().set(Key::Start, waiting && frame % 2 == 0);
        steer(&mut session, Side::Left);
        steer(&mut session, Side::Right);

        session.process_input(args.dt);
        session.update(args.dt);
        time += args.dt;
        session.render(&mut renderer, time);

        let events = session.take_events();
        dispatch_sounds(&events, &mut audio);
        for event in &events {
            match event {
                GameEvent::PaddleHit(_) => summary.paddle_hits += 1,
                GameEvent::Scored(_) => summary.points += 1,
                GameEvent::PhaseChanged(GamePhase::Win) => {
                    summary.matches += 1;
                    if let Some(side) = session.winner() {
                        summary.winners.push(side.player_number());
                    }
                }
                GameEvent::PhaseChanged(_) => {}
            }
        }

        summary.frames = frame + 1;
        if args.single && session.phase() == GamePhase::Win {
            break;
        }
    }

    summary.final_score = session.scores();
    summary.shaken_frames = renderer.shaken_frames;
    summary.sounds_played = audio.played;
    Ok(summary)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Glow Pong (headless) starting...");

    let summary = run(&args)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is the wasm entry point; the runner is native only
}
