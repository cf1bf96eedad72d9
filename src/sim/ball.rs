//! The ball: motion, wall and paddle response, brick dispatch

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::brick::Brick;
use super::collision::{Extent, Playfield};
use super::paddle::Paddle;
use crate::consts::{BOUNCE_CENTER_DEG, BOUNCE_SPREAD_DEG, LAUNCH_ANGLE_DEG};
use crate::screen_direction;

/// How the paddle bounce treats an offset wider than the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BounceMode {
    /// Use the offset ratio as is. Past the paddle edge the angle leaves
    /// the [10°, 170°] range.
    #[default]
    Unclamped,
    /// Clamp the offset to the paddle span first, capping the angle at [10°, 170°]
    Clamped,
}

/// Outgoing paddle bounce angle in degrees (0 = +x, 90 = straight up).
///
/// `diff` is `paddle.x - ball.x`, `half_span` the combined half widths.
/// A ball left of center (positive diff) leaves toward the left.
pub fn bounce_angle(diff: f32, half_span: f32, mode: BounceMode) -> f32 {
    let diff = match mode {
        BounceMode::Unclamped => diff,
        BounceMode::Clamped => diff.clamp(-half_span, half_span),
    };
    BOUNCE_CENTER_DEG + BOUNCE_SPREAD_DEG * diff / half_span
}

/// What happened to the ball during one [`Ball::advance`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Bounced off the paddle
    pub paddle: bool,
    /// Bounced off a side or the top wall
    pub wall: bool,
    /// Crossed the bottom edge and returned to the paddle
    pub lost: bool,
    /// Indices of bricks hit, in test order
    pub bricks: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub extent: Extent,
    /// Speed scalar; |vel| equals this while the ball is free
    pub speed: f32,
    /// Carried by the paddle rather than moving on its own
    pub resting: bool,
}

impl Ball {
    /// New resting ball aimed along the default launch angle
    pub fn new(pos: Vec2, extent: Extent, speed: f32) -> Self {
        let mut ball = Self {
            pos,
            vel: Vec2::ZERO,
            extent,
            speed,
            resting: true,
        };
        ball.set_velocity_from_angle(LAUNCH_ANGLE_DEG);
        ball
    }

    /// Point the ball along `angle_deg` at its configured speed
    pub fn set_velocity_from_angle(&mut self, angle_deg: f32) {
        self.vel = screen_direction(angle_deg) * self.speed;
    }

    /// Leave the paddle along `angle_deg`. No-op if already free.
    pub fn launch(&mut self, angle_deg: f32) -> bool {
        if !self.resting {
            return false;
        }
        self.set_velocity_from_angle(angle_deg);
        self.resting = false;
        true
    }

    /// Redirect the ball by where it struck the paddle
    pub fn bounce_off_paddle(&mut self, paddle: &Paddle, mode: BounceMode) {
        let diff = paddle.pos.x - self.pos.x;
        let angle = bounce_angle(diff, paddle.half_span(self), mode);
        self.set_velocity_from_angle(angle);
    }

    /// Advance one tick against the paddle and the bricks.
    ///
    /// A resting ball only follows the paddle. A free ball moves by its
    /// velocity once, then checks, in this order:
    /// 1. paddle, only while moving down (`vy > 0`)
    /// 2. right wall, then left wall
    /// 3. top wall
    /// 4. bottom edge, which returns the ball to resting
    /// 5. every brick, in slice order
    ///
    /// Later steps see and may override the position and velocity left by
    /// earlier ones. Callers must not reorder them.
    pub fn advance(
        &mut self,
        paddle: &Paddle,
        bricks: &mut [Brick],
        field: &Playfield,
        mode: BounceMode,
    ) -> Contacts {
        let mut contacts = Contacts::default();

        if self.resting {
            self.pos = Vec2::new(paddle.pos.x, paddle.rest_y(&self.extent));
            return contacts;
        }

        self.pos += self.vel;
        let Extent {
            half_width: hw,
            half_height: hh,
        } = self.extent;

        if paddle.overlaps(self) && self.vel.y > 0.0 {
            self.bounce_off_paddle(paddle, mode);
            contacts.paddle = true;
        }

        if self.pos.x + hw > field.xmax {
            self.vel.x = -self.vel.x;
            self.pos.x = field.xmax - hw;
            contacts.wall = true;
        }
        if self.pos.x - hw < field.xmin {
            self.vel.x = -self.vel.x;
            self.pos.x = field.xmin + hw;
            contacts.wall = true;
        }

        if self.pos.y - hh < field.ymin {
            self.vel.y = -self.vel.y;
            self.pos.y = field.ymin + hh;
            contacts.wall = true;
        }

        if self.pos.y + hh > field.ymax {
            self.resting = true;
            contacts.lost = true;
        }

        for (index, brick) in bricks.iter_mut().enumerate() {
            if brick.resolve_collision(self) {
                contacts.bricks.push(index);
            }
        }

        contacts
    }
}
