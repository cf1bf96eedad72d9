//! One simulation tick
//!
//! The frame loop calls [`tick`] exactly once per rendered frame. There is no
//! dt: velocities are in units per tick.

use super::state::{GameEvent, World};
use crate::screen_angle;

/// Input for a single tick, already translated from raw mouse/keyboard
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Desired paddle center x (e.g. pointer position)
    pub target_x: Option<f32>,
    /// Launch the ball if it is resting
    pub launch: bool,
}

/// Advance the world by one tick.
///
/// Paddle first, then launch, then the ball against the paddle's new position
/// and the current bricks.
pub fn tick(world: &mut World, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    world.ticks += 1;

    if let Some(target_x) = input.target_x {
        world.paddle.move_to(&world.playfield, target_x);
    }

    if input.launch && world.ball.launch(world.launch_angle_deg) {
        log::debug!("tick {}: launched at x={:.1}", world.ticks, world.ball.pos.x);
        events.push(GameEvent::Launched);
    }

    let alive_before = world.bricks_remaining();
    let contacts = world.ball.advance(
        &world.paddle,
        &mut world.bricks,
        &world.playfield,
        world.bounce_mode,
    );

    if contacts.paddle {
        log::trace!(
            "tick {}: paddle bounce at {:.1}°",
            world.ticks,
            screen_angle(world.ball.vel)
        );
        events.push(GameEvent::PaddleBounce);
    }
    if contacts.wall {
        events.push(GameEvent::WallBounce);
    }
    if contacts.lost {
        log::debug!("tick {}: ball lost", world.ticks);
        events.push(GameEvent::BallLost);
    }

    for &index in &contacts.bricks {
        events.push(GameEvent::BrickHit { index });
        if !world.bricks[index].is_alive() {
            log::debug!("tick {}: brick {} destroyed", world.ticks, index);
            events.push(GameEvent::BrickDestroyed { index });
        }
    }

    if alive_before > 0 && world.bricks_remaining() == 0 {
        log::debug!("tick {}: all bricks cleared", world.ticks);
        events.push(GameEvent::BricksCleared);
    }

    events
}
