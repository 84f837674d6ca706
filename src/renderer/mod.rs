//! Rendering interface
//!
//! Drawing itself (sprites, shaders, post-processing, text) lives outside
//! this crate. The session borrows its state to a `FrameRenderer` once per
//! frame.

pub mod vertex;

pub use vertex::{ParticleInstance, QuadInstance};

use crate::sim::{Entity, PostEffects};

/// Receives one frame's worth of drawable state
pub trait FrameRenderer {
    /// Start the frame (bind the post-processing target)
    fn begin_frame(&mut self, effects: &PostEffects);

    /// Draw a paddle or the ball
    fn draw_entity(&mut self, entity: &Entity);

    /// Draw the live trail particles
    fn draw_particles(&mut self, particles: &[ParticleInstance]);

    /// Resolve the frame through post-processing (shake)
    fn end_frame(&mut self, effects: &PostEffects);

    /// Score overlay, drawn after post-processing
    fn draw_scores(&mut self, left: u32, right: u32);

    /// Centered overlay text for the menu and win screens
    fn draw_banner(&mut self, _text: &str) {}
}

/// Renderer that only counts what it is asked to draw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub shaken_frames: u64,
    /// Per-frame counts, reset by `begin_frame`
    pub entities: usize,
    pub particles: usize,
    pub quads: Vec<QuadInstance>,
    pub scores: (u32, u32),
    pub banner: Option<String>,
}

impl FrameRenderer for HeadlessRenderer {
    fn begin_frame(&mut self, _effects: &PostEffects) {
        self.entities = 0;
        self.particles = 0;
        self.quads.clear();
        self.banner = None;
    }

    fn draw_entity(&mut self, entity: &Entity) {
        self.entities += 1;
        self.quads.push(QuadInstance::from(entity));
    }

    fn draw_particles(&mut self, particles: &[ParticleInstance]) {
        self.particles += particles.len();
    }

    fn end_frame(&mut self, effects: &PostEffects) {
        self.frames += 1;
        if effects.shake {
            self.shaken_frames += 1;
        }
    }

    fn draw_scores(&mut self, left: u32, right: u32) {
        self.scores = (left, right);
    }

    fn draw_banner(&mut self, text: &str) {
        self.banner = Some(text.to_string());
    }
}
