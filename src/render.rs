//! Drawable capability for the rendering collaborator
//!
//! The core never draws. It hands out one [`DrawCommand`] per visible entity,
//! anchored at the sprite's top-left corner, through a [`DrawSink`] the
//! collaborator implements. Sprite sheets and screens live on the other side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BALL_SIZE, BRICK_SIZE, PADDLE_SIZE};
use crate::sim::{Ball, Brick, BrickColor, Extent, Paddle, World};

/// Sprite catalogue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    Ball,
    Paddle,
    Brick(BrickColor),
}

impl Sprite {
    /// Default footprint (width, height) of the sprite
    pub fn size(&self) -> (f32, f32) {
        match self {
            Sprite::Ball => BALL_SIZE,
            Sprite::Paddle => PADDLE_SIZE,
            Sprite::Brick(BrickColor::Grey) => BRICK_SIZE,
        }
    }

    pub fn extent(&self) -> Extent {
        Extent::from_size(self.size())
    }
}

/// An entity the collaborator can draw
pub trait Drawable {
    fn sprite(&self) -> Sprite;
    fn center(&self) -> Vec2;
    fn extent(&self) -> Extent;

    fn is_visible(&self) -> bool {
        true
    }

    /// Draw anchor: center minus half extents
    fn top_left(&self) -> Vec2 {
        self.center() - self.extent().as_vec2()
    }
}

impl Drawable for Ball {
    fn sprite(&self) -> Sprite {
        Sprite::Ball
    }

    fn center(&self) -> Vec2 {
        self.pos
    }

    fn extent(&self) -> Extent {
        self.extent
    }
}

impl Drawable for Paddle {
    fn sprite(&self) -> Sprite {
        Sprite::Paddle
    }

    fn center(&self) -> Vec2 {
        self.pos
    }

    fn extent(&self) -> Extent {
        self.extent
    }
}

impl Drawable for Brick {
    fn sprite(&self) -> Sprite {
        Sprite::Brick(self.color)
    }

    fn center(&self) -> Vec2 {
        self.pos
    }

    fn extent(&self) -> Extent {
        self.extent
    }

    fn is_visible(&self) -> bool {
        self.is_alive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub sprite: Sprite,
    pub top_left: Vec2,
}

/// Receives draw commands; implemented by whatever owns the screen
pub trait DrawSink {
    fn draw(&mut self, cmd: DrawCommand);

    /// Emit a command for `entity` if it is visible
    fn submit(&mut self, entity: &impl Drawable) {
        if entity.is_visible() {
            self.draw(DrawCommand {
                sprite: entity.sprite(),
                top_left: entity.top_left(),
            });
        }
    }
}

/// Collects commands in draw order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawSink for DrawList {
    fn draw(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

impl World {
    /// Emit draw commands: bricks, then paddle, then ball on top
    pub fn draw(&self, sink: &mut impl DrawSink) {
        for brick in &self.bricks {
            sink.submit(brick);
        }
        sink.submit(&self.paddle);
        sink.submit(&self.ball);
    }
}
