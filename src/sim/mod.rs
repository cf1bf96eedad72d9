//! Per-tick motion and collision resolution
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-tick integration, no dt
//! - No I/O, no rendering, no global state
//! - Stable iteration order (bricks in slice order)

pub mod ball;
pub mod brick;
pub mod collision;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, BounceMode, Contacts, bounce_angle};
pub use brick::{Brick, BrickColor};
pub use collision::{Axis, Extent, Playfield, boxes_overlap, penetration, reflection_axis};
pub use paddle::Paddle;
pub use state::{GameEvent, World};
pub use tick::{TickInput, tick};
