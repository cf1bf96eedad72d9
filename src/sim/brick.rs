//! Destructible bricks
//!
//! A brick is static. Its only behavior is [`Brick::resolve_collision`], which
//! both detects an overlap with the ball and responds to it: the ball's velocity
//! is reflected on the axis it is least embedded along, and the brick loses one
//! point of health. No positional correction is applied to the ball.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::{Axis, Extent, boxes_overlap, penetration, reflection_axis};

/// Brick variant; selects the sprite and therefore the footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrickColor {
    #[default]
    Grey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Center position, fixed for the brick's lifetime
    pub pos: Vec2,
    pub extent: Extent,
    pub health: u32,
    pub color: BrickColor,
}

impl Brick {
    pub fn new(pos: Vec2, color: BrickColor, extent: Extent) -> Self {
        Self::with_health(pos, color, extent, 1)
    }

    pub fn with_health(pos: Vec2, color: BrickColor, extent: Extent, health: u32) -> Self {
        Self {
            pos,
            extent,
            health,
            color,
        }
    }

    /// Returns true while the brick takes part in collisions and drawing
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Test the ball against this brick and bounce it on a hit.
    ///
    /// Returns true if the ball hit. A dead brick never reports a hit.
    pub fn resolve_collision(&mut self, ball: &mut Ball) -> bool {
        if !self.is_alive() {
            return false;
        }
        if !boxes_overlap(self.pos, &self.extent, ball.pos, &ball.extent) {
            return false;
        }

        let pen = penetration(ball.pos, &ball.extent, self.pos, &self.extent);
        match reflection_axis(pen) {
            Axis::X => ball.vel.x = -ball.vel.x,
            Axis::Y => ball.vel.y = -ball.vel.y,
        }

        self.health = self.health.saturating_sub(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_SPEED;

    fn brick() -> Brick {
        Brick::new(
            Vec2::new(100.0, 100.0),
            BrickColor::Grey,
            Extent::new(16.0, 4.5),
        )
    }

    fn free_ball(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(pos, Extent::new(4.0, 4.0), BALL_SPEED);
        ball.resting = false;
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_hit_from_below_reflects_vy() {
        let mut brick = brick();
        let mut ball = free_ball(Vec2::new(100.0, 96.0), Vec2::new(0.0, -2.0));

        assert!(brick.resolve_collision(&mut ball));
        assert_eq!(ball.vel, Vec2::new(0.0, 2.0));
        assert_eq!(brick.health, 0);
        assert!(!brick.is_alive());
    }

    #[test]
    fn test_hit_on_side_reflects_vx() {
        let mut brick = brick();
        let mut ball = free_ball(Vec2::new(118.0, 101.0), Vec2::new(-1.2, 1.6));

        assert!(brick.resolve_collision(&mut ball));
        assert_eq!(ball.vel, Vec2::new(1.2, 1.6));
    }

    #[test]
    fn test_dead_brick_is_inert() {
        let mut brick = brick();
        brick.health = 0;
        let mut ball = free_ball(Vec2::new(100.0, 100.0), Vec2::new(0.0, -2.0));

        assert!(!brick.resolve_collision(&mut ball));
        assert_eq!(ball.vel, Vec2::new(0.0, -2.0));
        assert_eq!(brick.health, 0);
    }

    #[test]
    fn test_miss_leaves_everything_untouched() {
        let mut brick = brick();
        let mut ball = free_ball(Vec2::new(100.0, 120.0), Vec2::new(0.0, -2.0));

        assert!(!brick.resolve_collision(&mut ball));
        assert_eq!(ball.vel, Vec2::new(0.0, -2.0));
        assert_eq!(brick.health, 1);
    }

    #[test]
    fn test_sturdy_brick_loses_one_point_per_hit() {
        let mut brick = Brick::with_health(
            Vec2::new(100.0, 100.0),
            BrickColor::Grey,
            Extent::new(16.0, 4.5),
            3,
        );
        let mut ball = free_ball(Vec2::new(100.0, 96.0), Vec2::new(0.0, -2.0));

        assert!(brick.resolve_collision(&mut ball));
        assert_eq!(brick.health, 2);
        // Still overlapping next tick: hits again, flips back
        assert!(brick.resolve_collision(&mut ball));
        assert_eq!(brick.health, 1);
        assert_eq!(ball.vel, Vec2::new(0.0, -2.0));
    }
}
