//! Frame simulation module
//!
//! All gameplay logic lives here. This module must stay renderer-free:
//! - One `update` per frame with an explicit delta time
//! - Seeded RNG only (particle jitter)
//! - Fixed per-frame order: movement, collision, particles, impact, scoring
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod effects;
pub mod entity;
pub mod input;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{
    CollisionResult, Direction, check_ball_collision, resolve_paddle_collision, vector_direction,
};
pub use effects::{ImpactTimer, PostEffects};
pub use entity::{Ball, Entity, Paddle, Side};
pub use input::{KEY_COUNT, Key, KeyState};
pub use particles::{Particle, ParticlePool};
pub use state::{GameEvent, GamePhase, GameSession};
