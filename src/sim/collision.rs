//! Collision detection and response for axis-aligned geometry
//!
//! The ball is tested by its center against bricks and screen edges, and by
//! its vertical extent against the paddle band. There is no swept test: speeds
//! stay well below the smallest brick dimension.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Point containment, edges inclusive
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }
}

/// Bounce the ball off the left, right and top edges.
///
/// The overshoot is mirrored back inside the screen and the matching velocity
/// component is forced to point inward. The bottom edge is open.
/// Returns true if any edge was hit.
pub fn reflect_off_walls(ball: &mut Ball, screen_width: f32) -> bool {
    let mut hit = false;

    if ball.pos.x < 0.0 {
        ball.pos.x = -ball.pos.x;
        ball.vel.x = ball.vel.x.abs();
        hit = true;
    } else if ball.pos.x > screen_width {
        ball.pos.x = 2.0 * screen_width - ball.pos.x;
        ball.vel.x = -ball.vel.x.abs();
        hit = true;
    }
    // Overshoot larger than the screen itself
    ball.pos.x = ball.pos.x.clamp(0.0, screen_width.max(0.0));

    if ball.pos.y < 0.0 {
        ball.pos.y = -ball.pos.y;
        ball.vel.y = ball.vel.y.abs();
        hit = true;
    }

    hit
}

/// Whether the ball's vertical extent overlaps the paddle band while its
/// center is within the paddle's horizontal extent
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let overlaps_band = ball.bottom() >= paddle.y && ball.top() <= paddle.bottom();
    let within_span = ball.pos.x >= paddle.x && ball.pos.x <= paddle.right();
    overlaps_band && within_span
}

/// Ball fell past the bottom of the screen
#[inline]
pub fn ball_missed(ball: &Ball, screen_height: f32) -> bool {
    ball.pos.y > screen_height
}
