//! Collision detection and response between the ball and paddles
//!
//! Detection is a circle vs. axis-aligned box test. Response lets the player
//! aim: the further from the paddle centre the ball lands, the steeper the
//! return, while the ball keeps its speed.

use glam::Vec2;

use super::entity::{Ball, Entity, Paddle, Side};

/// Compass direction of a collision offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    const COMPASS: [(Direction, Vec2); 4] = [
        (Direction::Up, Vec2::new(0.0, 1.0)),
        (Direction::Right, Vec2::new(1.0, 0.0)),
        (Direction::Down, Vec2::new(0.0, -1.0)),
        (Direction::Left, Vec2::new(-1.0, 0.0)),
    ];
}

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Which way the box-to-ball offset points (None for a zero offset)
    pub direction: Option<Direction>,
    /// Vector from the ball centre to the closest point on the box
    pub difference: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            direction: None,
            difference: Vec2::ZERO,
        }
    }
}

/// Classify a vector as the nearest of up/right/down/left.
///
/// Returns `None` for a zero-length vector, which has no direction.
pub fn vector_direction(target: Vec2) -> Option<Direction> {
    let unit = target.try_normalize()?;
    let mut best = Direction::Up;
    let mut max = f32::NEG_INFINITY;
    for (direction, compass) in Direction::COMPASS {
        let dot = unit.dot(compass);
        if dot > max {
            max = dot;
            best = direction;
        }
    }
    Some(best)
}

/// Circle (ball) vs. axis-aligned box test
///
/// The hit test is strict: a ball resting exactly against the box after
/// being pushed out does not collide again.
pub fn check_ball_collision(ball: &Ball, target: &Entity) -> CollisionResult {
    let center = ball.center();
    let half = target.half_extents();
    let box_center = target.center();

    let offset = center - box_center;
    let clamped = offset.clamp(-half, half);
    let closest = box_center + clamped;
    let difference = closest - center;

    if difference.length() < ball.radius {
        CollisionResult {
            hit: true,
            direction: vector_direction(difference),
            difference,
        }
    } else {
        CollisionResult::miss()
    }
}

/// Resolve a ball/paddle hit. Returns true if the paddle was hit.
///
/// Vertical velocity is rebuilt from where the ball struck the paddle,
/// then the whole vector is rescaled back to the pre-hit speed and the
/// horizontal component is reversed. The ball is finally placed against the
/// paddle's leading edge so it cannot sink in on the next frame.
pub fn resolve_paddle_collision(
    ball: &mut Ball,
    paddle: &Paddle,
    initial_velocity: Vec2,
    aim_strength: f32,
) -> bool {
    if !check_ball_collision(ball, &paddle.body).hit {
        return false;
    }

    let paddle_center = paddle.body.center().y;
    let half_height = paddle.body.half_extents().y;
    let distance = ball.center().y - paddle_center;
    let percentage = if half_height > 0.0 {
        distance / half_height
    } else {
        0.0
    };

    let old_velocity = ball.body.velocity;
    let speed = old_velocity.length();

    let mut velocity = old_velocity;
    velocity.y = initial_velocity.y * percentage * aim_strength;
    // A zero vector has no direction to rescale; keep what was assigned
    if let Some(dir) = velocity.try_normalize() {
        velocity = dir * speed;
    }
    velocity.x = -velocity.x;
    ball.body.velocity = velocity;

    ball.body.position.x = match paddle.side {
        Side::Left => paddle.leading_edge(),
        Side::Right => paddle.leading_edge() - ball.body.size.x,
    };

    log::trace!(
        "{:?} paddle hit at {:.2} of half-height, velocity {:?} -> {:?}",
        paddle.side,
        percentage,
        old_velocity,
        velocity
    );

    true
}
