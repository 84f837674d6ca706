//! Entities that live on the play field
//!
//! `Entity` is the shared data record. The ball and the paddles wrap it
//! rather than extending it, so there is no dynamic dispatch anywhere in the
//! per-frame path.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Which side of the field a paddle (or player) defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Index into per-side arrays (paddles, scores)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// 1-based player number, as shown to humans
    pub fn player_number(self) -> u32 {
        self.index() as u32 + 1
    }
}

/// Positioned, sized, velocity-bearing object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
    /// Units per second
    pub velocity: Vec2,
    /// Tint for the renderer; the simulation never reads it
    pub color: Vec3,
}

impl Entity {
    pub fn new(position: Vec2, size: Vec2, color: Vec3, velocity: Vec2) -> Self {
        Self {
            position,
            size,
            velocity,
            color,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }
}

/// The ball: an entity whose box is always `2 * radius` square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Entity,
    pub radius: f32,
}

impl Ball {
    pub fn new(position: Vec2, radius: f32, velocity: Vec2) -> Self {
        debug_assert!(radius > 0.0, "ball radius must be positive");
        Self {
            body: Entity::new(position, Vec2::splat(radius * 2.0), Vec3::ONE, velocity),
            radius,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.body.position + Vec2::splat(self.radius)
    }

    /// Integrate one explicit Euler step and bounce off the top/bottom walls.
    ///
    /// Horizontal bounds are left alone: leaving the field sideways is a
    /// scoring event and belongs to the session.
    pub fn move_in_field(&mut self, dt: f32, field_height: f32) -> Vec2 {
        let body = &mut self.body;
        body.position += body.velocity * dt;

        if body.position.y <= 0.0 {
            body.velocity.y = -body.velocity.y;
            body.position.y = 0.0;
        } else if body.position.y + body.size.y >= field_height {
            body.velocity.y = -body.velocity.y;
            body.position.y = field_height - body.size.y;
        }

        body.position
    }

    /// Overwrite position and velocity (after a point is scored)
    pub fn reset(&mut self, position: Vec2, velocity: Vec2) {
        self.body.position = position;
        self.body.velocity = velocity;
    }
}

/// A player-controlled paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Entity,
    pub side: Side,
}

impl Paddle {
    pub fn new(side: Side, position: Vec2, size: Vec2, color: Vec3) -> Self {
        Self {
            body: Entity::new(position, size, color, Vec2::ZERO),
            side,
        }
    }

    /// X coordinate of the face that returns the ball
    pub fn leading_edge(&self) -> f32 {
        match self.side {
            Side::Left => self.body.position.x + self.body.size.x,
            Side::Right => self.body.position.x,
        }
    }

    /// Move vertically by `dy`, staying inside `[0, field_height - height]`
    pub fn shift(&mut self, dy: f32, field_height: f32) {
        let max_y = (field_height - self.body.size.y).max(0.0);
        self.body.position.y = (self.body.position.y + dy).clamp(0.0, max_y);
    }
}
