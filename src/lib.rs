//! Glow Pong - a two-player paddle game core
//!
//! Core modules:
//! - `sim`: Frame simulation (ball, paddles, collisions, particles, session state)
//! - `renderer`: Draw interface handed to the external renderer
//! - `audio`: Sound effect vocabulary for the external audio backend
//! - `settings`: Tuning config and presentation settings

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{GameConfig, QualityPreset, Settings};
pub use sim::{GameEvent, GamePhase, GameSession, Key, Side};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(20.0, 100.0);
    pub const PADDLE_VELOCITY: f32 = 500.0;
    /// Gap between a paddle and its side of the field
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const INITIAL_BALL_VELOCITY: Vec2 = Vec2::new(100.0, -350.0);
    /// Multiplier turning paddle contact offset into return steepness
    pub const AIM_STRENGTH: f32 = 2.0;

    /// First player to reach this score wins
    pub const MAX_SCORE: u32 = 10;

    /// Particle trail defaults
    pub const PARTICLE_CAPACITY: usize = 500;
    pub const PARTICLES_PER_FRAME: usize = 2;
    pub const PARTICLE_LIFE: f32 = 1.0;
    /// Fraction of the emitter velocity inherited by a new particle
    pub const PARTICLE_VELOCITY_DAMPING: f32 = 0.1;
    /// Alpha lost per second while a particle is alive
    pub const PARTICLE_FADE_RATE: f32 = 2.5;

    /// How long the screen shakes after a paddle impact (seconds)
    pub const IMPACT_DURATION: f32 = 0.05;
}
