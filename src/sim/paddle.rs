//! The player's paddle: horizontal-only, clamped to the playfield

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::{Extent, Playfield, boxes_overlap};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position; y is fixed at creation
    pub pos: Vec2,
    pub extent: Extent,
}

impl Paddle {
    /// Paddle centered horizontally, resting on the bottom edge of the playfield
    pub fn new(field: &Playfield, extent: Extent) -> Self {
        Self {
            pos: Vec2::new(field.center_x(), field.ymax - extent.half_height),
            extent,
        }
    }

    /// Move toward `target_x`, clamping so both edges stay inside the playfield.
    ///
    /// An in-range target is taken exactly. A NaN target leaves the paddle
    /// where it is.
    pub fn move_to(&mut self, field: &Playfield, target_x: f32) {
        if target_x.is_nan() {
            return;
        }
        let hw = self.extent.half_width;
        self.pos.x = if target_x + hw > field.xmax {
            field.xmax - hw
        } else if target_x - hw < field.xmin {
            field.xmin + hw
        } else {
            target_x
        };
    }

    /// Box overlap with the ball. Detection only; the ball owns the response.
    pub fn overlaps(&self, ball: &Ball) -> bool {
        boxes_overlap(self.pos, &self.extent, ball.pos, &ball.extent)
    }

    /// Horizontal distance between centers at which paddle and ball touch
    pub fn half_span(&self, ball: &Ball) -> f32 {
        self.extent.half_width + ball.extent.half_width
    }

    /// Height at which a ball of the given extent sits on top of the paddle
    pub fn rest_y(&self, ball_extent: &Extent) -> f32 {
        self.pos.y - ball_extent.half_height - self.extent.half_height
    }
}
