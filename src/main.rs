//! Brickfall headless driver
//!
//! Stands in for the real frame loop: lays out a brick grid, steers the paddle
//! with a simple autopilot, and runs a bounded number of ticks.
//!
//! Usage: `brickfall [settings.json] [seed]`

use std::path::Path;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use brickfall::Settings;
use brickfall::render::DrawList;
use brickfall::sim::{Brick, BrickColor, GameEvent, TickInput, World, tick};

/// Upper bound on simulated ticks (about five minutes at 60 fps)
const MAX_TICKS: u64 = 60 * 60 * 5;
const GRID_COLUMNS: usize = 20;
const GRID_ROWS: usize = 6;
const GRID_TOP: f32 = 60.0;
/// Ticks the ball rests on the paddle before the autopilot launches it
const SERVE_DELAY: u64 = 30;
const MAX_LIVES: u32 = 3;

/// Level layout: full-width rows of grey bricks below the top margin
fn brick_grid(settings: &Settings) -> Vec<Brick> {
    let extent = settings.brick_extent();
    let (width, height) = settings.brick_size;
    let field = settings.playfield;
    let columns = GRID_COLUMNS.min((field.width() / width) as usize);
    let left = field.center_x() - columns as f32 * width / 2.0 + extent.half_width;

    (0..GRID_ROWS)
        .flat_map(|row| {
            (0..columns).map(move |col| {
                let pos = Vec2::new(
                    left + col as f32 * width,
                    field.ymin + GRID_TOP + row as f32 * height,
                );
                Brick::new(pos, BrickColor::Grey, extent)
            })
        })
        .collect()
}

/// Follow the ball with a jittered aim so bounces vary
fn autopilot(world: &World, rng: &mut Pcg32, resting_ticks: u64) -> TickInput {
    let ball = &world.ball;
    if ball.resting {
        return TickInput {
            target_x: Some(world.paddle.pos.x + rng.random_range(-2.0_f32..2.0)),
            launch: resting_ticks >= SERVE_DELAY,
        };
    }

    let reach = world.paddle.extent.half_width * 0.8;
    let jitter = if reach > 0.0 {
        rng.random_range(-reach..reach)
    } else {
        0.0
    };
    TickInput {
        target_x: Some(ball.pos.x + jitter),
        launch: false,
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    log::info!("Brickfall starting (seed {})", seed);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut world = World::with_bricks(&settings, brick_grid(&settings));
    log::info!("Level has {} bricks", world.bricks.len());

    let mut score = 0u64;
    let mut lives = MAX_LIVES;
    let mut resting_ticks = 0u64;
    let mut cleared = false;

    while world.ticks < MAX_TICKS && lives > 0 && !cleared {
        resting_ticks = if world.ball.resting { resting_ticks + 1 } else { 0 };
        let input = autopilot(&world, &mut rng, resting_ticks);

        for event in tick(&mut world, &input) {
            match event {
                GameEvent::BrickDestroyed { .. } => score += 10,
                GameEvent::BallLost => {
                    lives -= 1;
                    log::info!("Ball lost at tick {}, {} lives left", world.ticks, lives);
                }
                GameEvent::BricksCleared => cleared = true,
                _ => {}
            }
        }
    }

    let mut frame = DrawList::default();
    world.draw(&mut frame);

    log::info!(
        "Finished after {} ticks: score {}, {} bricks left, {} lives, {} sprites on screen",
        world.ticks,
        score,
        world.bricks_remaining(),
        lives,
        frame.commands.len()
    );

    match world.snapshot_json() {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}
