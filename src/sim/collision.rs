//! Collision detection and response for axis-aligned shapes
//!
//! Paddles, the ball and the player are all rectangles; collectibles are
//! circles tested against the player's center.

use glam::Vec2;

use super::geom::Rect;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Surface normal at the contact (pointing toward the moving body, for reflection)
    pub normal: Vec2,
    /// Penetration depth along the normal (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }

    /// Push a body out of the surface it hit
    pub fn separate(&self, body: &mut Rect) {
        if self.hit {
            body.translate(self.normal * self.penetration);
        }
    }
}

/// Check a ball against a paddle face
///
/// `face_normal` points from the paddle toward the half of the field it
/// defends against. A contact only counts while the ball overlaps the paddle
/// and is still closing on it, so a single contact reflects exactly once.
pub fn ball_paddle_collision(ball: &Rect, vel: Vec2, paddle: &Rect, face_normal: Vec2) -> CollisionResult {
    if !ball.overlaps(paddle) {
        return CollisionResult::miss();
    }
    if vel.dot(face_normal) >= 0.0 {
        return CollisionResult::miss();
    }

    let penetration = if face_normal.x > 0.0 {
        paddle.right() - ball.left()
    } else {
        ball.right() - paddle.left()
    };

    CollisionResult {
        hit: true,
        normal: face_normal,
        penetration: penetration.max(0.0),
    }
}

/// Check a ball against the top and bottom walls of the field
pub fn ball_wall_collision(ball: &Rect, top: f32, bottom: f32) -> CollisionResult {
    if ball.top() <= top {
        return CollisionResult {
            hit: true,
            normal: Vec2::Y,
            penetration: top - ball.top(),
        };
    }
    if ball.bottom() >= bottom {
        return CollisionResult {
            hit: true,
            normal: Vec2::NEG_Y,
            penetration: ball.bottom() - bottom,
        };
    }
    CollisionResult::miss()
}

/// Reflect velocity off a surface so it leaves along the normal
///
/// Standard reflection: v' = v - 2(v·n)n, applied only when moving into the surface.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    if velocity.dot(normal) < 0.0 {
        velocity - 2.0 * velocity.dot(normal) * normal
    } else {
        velocity
    }
}

/// Check if two centers are within reach of each other
#[inline]
pub fn within_reach(a: Vec2, b: Vec2, reach: f32) -> bool {
    a.distance(b) <= reach
}
