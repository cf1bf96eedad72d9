//! Property tests for the motion and collision invariants

use glam::Vec2;
use proptest::prelude::*;

use brickfall::Settings;
use brickfall::sim::{Ball, Brick, BrickColor, Extent, Paddle, Playfield, TickInput, World, tick};

const EPS: f32 = 1e-3;

fn free_ball(settings: &Settings, pos: Vec2, angle_deg: f32) -> Ball {
    let mut ball = Ball::new(pos, settings.ball_extent(), settings.ball_speed);
    ball.launch(angle_deg);
    ball
}

fn row_of_bricks(settings: &Settings, y: f32) -> Vec<Brick> {
    (0..10)
        .map(|i| {
            Brick::new(
                Vec2::new(250.0 + 32.0 * i as f32, y),
                BrickColor::Grey,
                settings.brick_extent(),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn speed_is_preserved_by_every_bounce(
        x in 4.0f32..796.0,
        y in 4.0f32..590.0,
        angle in 0.0f32..360.0,
        paddle_x in 0.0f32..800.0,
        brick_y in 20.0f32..580.0,
    ) {
        let settings = Settings::default();
        let field = settings.playfield;
        let mut paddle = Paddle::new(&field, settings.paddle_extent());
        paddle.move_to(&field, paddle_x);
        let mut bricks = row_of_bricks(&settings, brick_y);
        let mut ball = free_ball(&settings, Vec2::new(x, y), angle);

        ball.advance(&paddle, &mut bricks, &field, settings.bounce_mode());

        prop_assert!((ball.vel.length() - settings.ball_speed).abs() < EPS);
    }

    #[test]
    fn advance_keeps_ball_inside_side_and_top_walls(
        x in 4.0f32..796.0,
        y in 4.0f32..590.0,
        angle in 0.0f32..360.0,
        paddle_x in 0.0f32..800.0,
    ) {
        let settings = Settings::default();
        let field = settings.playfield;
        let mut paddle = Paddle::new(&field, settings.paddle_extent());
        paddle.move_to(&field, paddle_x);
        let mut ball = free_ball(&settings, Vec2::new(x, y), angle);

        ball.advance(&paddle, &mut [], &field, settings.bounce_mode());

        let half = ball.extent;
        prop_assert!(ball.pos.x + half.half_width <= field.xmax + EPS);
        prop_assert!(ball.pos.x - half.half_width >= field.xmin - EPS);
        prop_assert!(ball.pos.y - half.half_height >= field.ymin - EPS);
    }

    #[test]
    fn paddle_stays_inside_playfield(target in -5000.0f32..5000.0) {
        let field = Playfield::default();
        let extent = Extent::new(16.0, 4.5);
        let mut paddle = Paddle::new(&field, extent);

        paddle.move_to(&field, target);

        prop_assert!(paddle.pos.x - extent.half_width >= field.xmin);
        prop_assert!(paddle.pos.x + extent.half_width <= field.xmax);
        let in_range = target - extent.half_width >= field.xmin
            && target + extent.half_width <= field.xmax;
        if in_range {
            prop_assert_eq!(paddle.pos.x, target);
        }
    }

    #[test]
    fn brick_health_never_increases(
        health in 0u32..4,
        hits in prop::collection::vec((60.0f32..140.0, 80.0f32..120.0, 0.0f32..360.0), 1..20),
    ) {
        let settings = Settings::default();
        let mut brick = Brick::with_health(
            Vec2::new(100.0, 100.0),
            BrickColor::Grey,
            settings.brick_extent(),
            health,
        );

        for (x, y, angle) in hits {
            let before = brick.health;
            let mut ball = free_ball(&settings, Vec2::new(x, y), angle);
            let hit = brick.resolve_collision(&mut ball);

            prop_assert!(brick.health <= before);
            if before == 0 {
                prop_assert!(!hit);
            }
            if hit {
                prop_assert_eq!(brick.health, before - 1);
            }
        }
    }

    #[test]
    fn long_runs_keep_speed_and_walls(
        targets in prop::collection::vec(0.0f32..800.0, 200),
        clamp in any::<bool>(),
    ) {
        let settings = Settings {
            clamp_bounce_offset: clamp,
            ..Settings::default()
        };
        let mut world = World::with_bricks(&settings, row_of_bricks(&settings, 200.0));

        for (i, target) in targets.into_iter().enumerate() {
            let input = TickInput { target_x: Some(target), launch: i == 0 };
            tick(&mut world, &input);

            let ball = &world.ball;
            prop_assert!((ball.vel.length() - settings.ball_speed).abs() < EPS);
            prop_assert!(ball.pos.x + ball.extent.half_width <= world.playfield.xmax + EPS);
            prop_assert!(ball.pos.x - ball.extent.half_width >= world.playfield.xmin - EPS);
            prop_assert!(ball.pos.y - ball.extent.half_height >= world.playfield.ymin - EPS);
        }
    }
}
