//! World state: one ball, one paddle, the bricks of the current level
//!
//! Entities are plain owned records living side by side. None of them holds a
//! reference to another; interactions borrow for a single call.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BounceMode};
use super::brick::Brick;
use super::collision::Playfield;
use super::paddle::Paddle;
use crate::settings::Settings;

/// Discrete outcomes of a tick, for collaborators keeping score or playing sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball left the paddle
    Launched,
    PaddleBounce,
    WallBounce,
    BrickHit { index: usize },
    BrickDestroyed { index: usize },
    /// Ball crossed the bottom edge and is back on the paddle
    BallLost,
    /// The last live brick was destroyed this tick
    BricksCleared,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub playfield: Playfield,
    pub bounce_mode: BounceMode,
    /// Angle used when the ball leaves the paddle
    pub launch_angle_deg: f32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Dead bricks stay in place (indices are stable) but no longer collide
    pub bricks: Vec<Brick>,
    /// Ticks simulated so far
    pub ticks: u64,
}

impl World {
    /// Empty level: ball resting on a centered paddle
    pub fn new(settings: &Settings) -> Self {
        let playfield = settings.playfield;
        let paddle = Paddle::new(&playfield, settings.paddle_extent());
        let mut ball = Ball::new(
            Vec2::new(settings.ball_start.0, settings.ball_start.1),
            settings.ball_extent(),
            settings.ball_speed,
        );
        ball.set_velocity_from_angle(settings.launch_angle_deg);

        Self {
            playfield,
            bounce_mode: settings.bounce_mode(),
            launch_angle_deg: settings.launch_angle_deg,
            ball,
            paddle,
            bricks: Vec::new(),
            ticks: 0,
        }
    }

    pub fn with_bricks(settings: &Settings, bricks: Vec<Brick>) -> Self {
        let mut world = Self::new(settings);
        world.bricks = bricks;
        world
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_alive()).count()
    }

    /// JSON snapshot of the current state for collaborators
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
