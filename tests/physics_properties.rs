//! Property tests for the physics invariants.

use paddle::{config, update_ball, update_paddle, Body, Field, GameState, Side};
use proptest::prelude::*;

fn field() -> Field {
    Field::default()
}

prop_compose! {
    /// A ball anywhere inside the field with any reasonable velocity.
    fn ball_in_bounds()(
        x in 0.0f32..=780.0,
        y in 0.0f32..=580.0,
        vx in -2_000.0f32..2_000.0,
        vy in -2_000.0f32..2_000.0,
    ) -> Body {
        Body::new(config::BALL_SIZE, config::BALL_SIZE, x, y, vx, vy)
    }
}

prop_compose! {
    fn any_body()(
        x in -1_000.0f32..1_000.0,
        y in -1_000.0f32..1_000.0,
        w in 0.5f32..300.0,
        h in 0.5f32..300.0,
    ) -> Body {
        Body::new(h, w, x, y, 0.0, 0.0)
    }
}

proptest! {
    #[test]
    fn ball_stays_in_field(mut ball in ball_in_bounds(), dt in 0.0f32..5.0) {
        let left = Body::paddle_at_start(Side::Left, field());
        let right = Body::paddle_at_start(Side::Right, field());

        update_ball(&mut ball, &left, &right, field(), dt);

        prop_assert!(ball.x >= 0.0 && ball.x <= field().width - ball.width);
        prop_assert!(ball.y >= 0.0 && ball.y <= field().height - ball.height);
    }

    #[test]
    fn paddle_contact_respects_speed_cap(mut ball in ball_in_bounds(), dt in 0.0f32..0.05) {
        let left = Body::paddle_at_start(Side::Left, field());
        let right = Body::paddle_at_start(Side::Right, field());

        let events = update_ball(&mut ball, &left, &right, field(), dt);

        if events.hit_paddle.is_some() {
            prop_assert!(ball.x_velocity.abs() <= config::MAX_BALL_X_VELOCITY);
        }
        match events.hit_paddle {
            Some(Side::Left) => prop_assert!(ball.x_velocity >= 0.0),
            Some(Side::Right) => prop_assert!(ball.x_velocity <= 0.0),
            _ => {}
        }
    }

    #[test]
    fn collision_is_symmetric(a in any_body(), b in any_body()) {
        prop_assert_eq!(a.collides(&b), b.collides(&a));
    }

    #[test]
    fn body_always_collides_with_itself(a in any_body()) {
        prop_assert!(a.collides(&a));
    }

    #[test]
    fn goal_scores_exactly_once(mut ball in ball_in_bounds(), dt in 0.0f32..1.0) {
        let mut state = GameState::new();
        // head toward the nearer side wall
        ball.x_velocity = ball.x_velocity.abs().max(1.0)
            * if ball.x < 390.0 { -1.0 } else { 1.0 };
        state.ball = ball;
        let before = state.score;

        let events = state.update(dt);

        let goals = (state.score.left - before.left) + (state.score.right - before.right);
        match events.scored {
            Some(_) => {
                prop_assert_eq!(goals, 1);
                prop_assert_eq!(state.ball, Body::ball_at_center(state.field));
                prop_assert_eq!(events.hit_paddle, None);
            }
            None => prop_assert_eq!(goals, 0),
        }
    }

    #[test]
    fn paddles_never_leave_field(
        vx in -5_000.0f32..5_000.0,
        vy in -5_000.0f32..5_000.0,
        ticks in 1usize..500,
        dt in 0.0f32..0.1,
    ) {
        let mut paddle = Body::paddle_at_start(Side::Left, field());
        paddle.x_velocity = vx;
        paddle.y_velocity = vy;

        for _ in 0..ticks {
            update_paddle(&mut paddle, field(), dt);
            prop_assert!(paddle.x >= 0.0 && paddle.x <= field().width - paddle.width);
            prop_assert!(paddle.y >= 0.0 && paddle.y <= field().height - paddle.height);
        }
    }
}
