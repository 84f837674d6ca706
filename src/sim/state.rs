//! Session state and core game types
//!
//! The session owns every entity. Collaborators only ever see borrowed
//! views of it, handed out once per frame.

use anyhow::Result;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::effects::ImpactTimer;
use super::entity::{Ball, Paddle, Side};
use super::input::KeyState;
use super::particles::ParticlePool;
use crate::settings::{GameConfig, Settings};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start press
    Menu,
    /// Active gameplay
    Active,
    /// A player reached the max score
    Win,
}

/// Something the audio/visual collaborators may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The ball bounced off this side's paddle
    PaddleHit(Side),
    /// This side won a point
    Scored(Side),
    PhaseChanged(GamePhase),
}

/// Paddle tint
pub const PADDLE_COLOR: Vec3 = Vec3::new(0.8, 0.8, 1.0);

/// One two-player match
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(super) config: GameConfig,
    pub(super) settings: Settings,
    pub(super) phase: GamePhase,
    /// Indexed by `Side::index()`
    pub(super) paddles: [Paddle; 2],
    pub(super) ball: Ball,
    /// Indexed by `Side::index()`
    pub(super) scores: [u32; 2],
    pub(super) particles: ParticlePool,
    pub(super) impact: ImpactTimer,
    pub(super) keys: KeyState,
    /// Events raised since the host last drained them
    pub(super) events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session in the menu with default presentation settings
    pub fn new(config: GameConfig) -> Self {
        Self::with_settings(config, Settings::default())
    }

    /// Validate `config` before building the session
    pub fn try_with_settings(config: GameConfig, settings: Settings) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_settings(config, settings))
    }

    /// `config` must pass `GameConfig::validate`; hand-built configs that
    /// skip it should go through `try_with_settings` instead.
    pub fn with_settings(config: GameConfig, settings: Settings) -> Self {
        let paddles = Side::ALL.map(|side| {
            Paddle::new(side, config.paddle_start(side), config.paddle_size, PADDLE_COLOR)
        });
        let ball = Ball::new(
            config.ball_start(),
            config.ball_radius,
            config.initial_ball_velocity,
        );
        let particles = ParticlePool::new(settings.max_particles(), config.seed);

        log::info!(
            "New session: field {}x{}, first to {}, {} particles ({} quality)",
            config.field_width,
            config.field_height,
            config.max_score,
            particles.capacity(),
            settings.quality.as_str()
        );

        Self {
            config,
            settings,
            phase: GamePhase::Menu,
            paddles,
            ball,
            scores: [0; 2],
            particles,
            impact: ImpactTimer::new(),
            keys: KeyState::new(),
            events: Vec::new(),
        }
    }

    /// Zero the scores and put the paddles and ball back at their start.
    /// The phase is left alone.
    pub fn reset(&mut self) {
        self.scores = [0; 2];
        for paddle in self.paddles.iter_mut() {
            paddle.body.position = self.config.paddle_start(paddle.side);
            paddle.body.velocity = Vec2::ZERO;
        }
        self.reset_ball();
    }

    pub(super) fn reset_ball(&mut self) {
        self.ball
            .reset(self.config.ball_start(), self.config.initial_ball_velocity);
    }

    pub(super) fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
            self.events.push(GameEvent::PhaseChanged(phase));
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Direct ball access for hosts that script a serve
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.scores[0], self.scores[1])
    }

    /// The side that reached the max score, once the session is won
    pub fn winner(&self) -> Option<Side> {
        if self.phase != GamePhase::Win {
            return None;
        }
        Side::ALL
            .into_iter()
            .find(|side| self.scores[side.index()] >= self.config.max_score)
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    /// Externally visible shake flag for the post-processor
    pub fn shake_active(&self) -> bool {
        self.impact.is_active() && self.settings.effective_screen_shake()
    }

    pub fn impact(&self) -> &ImpactTimer {
        &self.impact
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    /// Key state written by the host's input polling
    pub fn keys_mut(&mut self) -> &mut KeyState {
        &mut self.keys
    }

    /// Drain the events raised since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_with_settings_rejects_bad_config() {
        let config = GameConfig {
            ball_radius: 0.0,
            ..GameConfig::default()
        };
        let err = GameSession::try_with_settings(config, Settings::default()).unwrap_err();
        assert!(err.to_string().contains("ball_radius"));

        let session =
            GameSession::try_with_settings(GameConfig::default(), Settings::default()).unwrap();
        assert_eq!(session.phase(), GamePhase::Menu);
    }
}
