//! Transient impact feedback
//!
//! A paddle hit starts a short countdown; while it runs the post-processing
//! collaborator shakes the screen.

use glam::Vec2;

/// Countdown gating the "shake active" flag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImpactTimer {
    remaining: f32,
    shake: bool,
}

impl ImpactTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the countdown and raise the shake flag
    pub fn trigger(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
        self.shake = true;
    }

    /// Count down; the flag drops on the frame the timer runs out
    pub fn tick(&mut self, dt: f32) {
        if !self.shake {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.shake = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.shake
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn clear(&mut self) {
        self.remaining = 0.0;
        self.shake = false;
    }
}

/// Post-processing state handed to the renderer each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostEffects {
    pub shake: bool,
    /// Host clock in seconds, drives the shake phase
    pub time: f32,
}

impl PostEffects {
    /// Clip-space offset for the shaken frame
    pub fn shake_offset(&self) -> Vec2 {
        if self.shake {
            Vec2::new((self.time * 10.0).cos(), (self.time * 15.0).cos()) * 0.01
        } else {
            Vec2::ZERO
        }
    }
}
