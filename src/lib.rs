//! Brickfall - paddle, ball and bricks arcade core
//!
//! Core modules:
//! - `sim`: Per-tick motion and collision resolution (pure, no I/O)
//! - `render`: Drawable capability consumed by a rendering collaborator
//! - `settings`: Session configuration (playfield bounds, speed, footprints)

pub mod render;
pub mod settings;
pub mod sim;

pub use render::{DrawCommand, DrawList, DrawSink, Drawable, Sprite};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield bounds (screen coordinates, y grows downward)
    pub const XMIN: f32 = 0.0;
    pub const XMAX: f32 = 800.0;
    pub const YMIN: f32 = 0.0;
    pub const YMAX: f32 = 600.0;

    /// Ball speed in units per tick (no dt scaling)
    pub const BALL_SPEED: f32 = 2.0;
    /// Ball spawn point before it first snaps to the paddle
    pub const BALL_START: (f32, f32) = (400.0, 400.0);
    /// Launch direction in degrees (0 = +x, 90 = straight up)
    pub const LAUNCH_ANGLE_DEG: f32 = 60.0;

    /// Paddle bounce: angle at the paddle center and swing toward the edges
    pub const BOUNCE_CENTER_DEG: f32 = 90.0;
    pub const BOUNCE_SPREAD_DEG: f32 = 80.0;

    /// Sprite footprints (width, height)
    pub const BALL_SIZE: (f32, f32) = (8.0, 8.0);
    pub const PADDLE_SIZE: (f32, f32) = (32.0, 9.0);
    pub const BRICK_SIZE: (f32, f32) = (32.0, 9.0);
}

/// Unit direction for an angle in degrees, with screen y pointing down.
///
/// 90° maps to `(0, -1)`, i.e. straight up on screen.
#[inline]
pub fn screen_direction(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

/// Inverse of [`screen_direction`]: angle in degrees of a screen-space vector
#[inline]
pub fn screen_angle(v: Vec2) -> f32 {
    (-v.y).atan2(v.x).to_degrees()
}
