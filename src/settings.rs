//! Game tuning and presentation settings
//!
//! `GameConfig` holds the rules and physics tuning and can be loaded from
//! JSON. `Settings` holds player-facing presentation preferences.

use std::path::Path;

use anyhow::{Context, Result, bail};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Side;

/// Gameplay tuning, all in field units and seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_size: Vec2,
    /// Units per second while a move key is held
    pub paddle_speed: f32,
    /// Gap between each paddle and its side edge
    pub paddle_margin: f32,
    pub ball_radius: f32,
    /// Serve velocity, also the reference for paddle aiming
    pub initial_ball_velocity: Vec2,
    pub aim_strength: f32,
    pub max_score: u32,
    pub particles_per_frame: usize,
    /// Added to the ball's top-left corner when spawning trail particles
    pub particle_offset: Vec2,
    pub impact_duration: f32,
    /// Seed for particle jitter
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            paddle_size: PADDLE_SIZE,
            paddle_speed: PADDLE_VELOCITY,
            paddle_margin: PADDLE_MARGIN,
            ball_radius: BALL_RADIUS,
            initial_ball_velocity: INITIAL_BALL_VELOCITY,
            aim_strength: AIM_STRENGTH,
            max_score: MAX_SCORE,
            particles_per_frame: PARTICLES_PER_FRAME,
            particle_offset: Vec2::splat(BALL_RADIUS / 2.0),
            impact_duration: IMPACT_DURATION,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid game config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        log::info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize game config")
    }

    /// Reject configs the simulation cannot run sensibly
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_speed", self.paddle_speed),
            ("paddle_margin", self.paddle_margin),
            ("ball_radius", self.ball_radius),
            ("aim_strength", self.aim_strength),
            ("impact_duration", self.impact_duration),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                bail!("{name} must be finite, got {value}");
            }
        }
        let vectors = [
            ("paddle_size", self.paddle_size),
            ("initial_ball_velocity", self.initial_ball_velocity),
            ("particle_offset", self.particle_offset),
        ];
        for (name, value) in vectors {
            if !value.is_finite() {
                bail!("{name} must be finite, got {value}");
            }
        }

        if self.ball_radius <= 0.0 {
            bail!("ball_radius must be positive, got {}", self.ball_radius);
        }
        if self.paddle_size.min_element() < 0.0 {
            bail!("paddle_size must be non-negative, got {}", self.paddle_size);
        }
        if self.paddle_speed < 0.0 || self.paddle_margin < 0.0 || self.impact_duration < 0.0 {
            bail!("paddle_speed, paddle_margin and impact_duration must be non-negative");
        }
        if self.max_score == 0 {
            bail!("max_score must be at least 1");
        }
        if self.field_height < self.paddle_size.y || self.field_height < self.ball_radius * 2.0 {
            bail!(
                "field_height {} is too small for the paddles and ball",
                self.field_height
            );
        }
        if self.field_width < 2.0 * (self.paddle_margin + self.paddle_size.x) {
            bail!("field_width {} cannot fit both paddles", self.field_width);
        }
        Ok(())
    }

    /// Top-left corner that centres the ball on the field
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.field_width / 2.0 - self.ball_radius,
            self.field_height / 2.0 - self.ball_radius,
        )
    }

    /// Top-left corner that centres a paddle vertically on its side
    pub fn paddle_start(&self, side: Side) -> Vec2 {
        let y = (self.field_height - self.paddle_size.y) / 2.0;
        let x = match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_margin - self.paddle_size.x,
        };
        Vec2::new(x, y)
    }
}

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Particle pool capacity for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => PARTICLE_CAPACITY,
            QualityPreset::High => 2000,
        }
    }
}

/// Presentation preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Ball trail particles
    pub particles: bool,
    /// Screen shake on paddle impacts
    pub screen_shake: bool,
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            screen_shake: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective particle pool capacity
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ball_start(), Vec2::new(390.0, 290.0));
        assert_eq!(config.paddle_start(Side::Left), Vec2::new(10.0, 250.0));
        assert_eq!(config.paddle_start(Side::Right), Vec2::new(770.0, 250.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{ "max_score": 3, "seed": 42 }"#).unwrap();
        assert_eq!(config.max_score, 3);
        assert_eq!(config.seed, 42);
        assert_eq!(config.field_width, FIELD_WIDTH);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig {
            aim_strength: 1.5,
            ..GameConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(GameConfig::from_json_str(r#"{ "ball_radius": 0.0 }"#).is_err());
        assert!(GameConfig::from_json_str(r#"{ "max_score": 0 }"#).is_err());
        assert!(GameConfig::from_json_str(r#"{ "field_height": 50.0 }"#).is_err());
        assert!(GameConfig::from_json_str(r#"{ "paddle_size": [-1.0, 100.0] }"#).is_err());
        assert!(GameConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "field_width": 1024.0, "max_score": 5 }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.field_width, 1024.0);
        assert_eq!(config.max_score, 5);

        assert!(GameConfig::load("/nonexistent/glow-pong.json").is_err());
    }

    #[test]
    fn test_quality_presets() {
        assert_eq!(QualityPreset::parse("HIGH"), Some(QualityPreset::High));
        assert_eq!(QualityPreset::parse("ultra"), None);
        assert_eq!(Settings::default().max_particles(), PARTICLE_CAPACITY);
        assert_eq!(Settings::from_preset(QualityPreset::Low).max_particles(), 100);

        let off = Settings {
            particles: false,
            ..Settings::default()
        };
        assert_eq!(off.max_particles(), 0);
    }

    #[test]
    fn test_reduced_motion_disables_shake() {
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert!(!settings.effective_screen_shake());
        assert!(Settings::default().effective_screen_shake());
    }
}
