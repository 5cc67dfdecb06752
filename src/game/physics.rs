//! # Physics
//!
//! Integration, clamping and collision response for the ball and paddles.
//!
//! Each function handles exactly one body and reports what happened through
//! [`BallEvents`]; applying goals to the score is the round controller's job.

use crate::config;
use crate::game::{Body, Field, Side};
use log::debug;

/// What happened to the ball during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BallEvents {
    /// Player credited with a goal this tick
    pub scored: Option<Side>,
    /// Ball bounced off the top or bottom wall
    pub hit_wall: bool,
    /// Paddle the ball touched
    pub hit_paddle: Option<Side>,
}

/// Horizontal speed after a paddle contact: sped up and capped.
pub fn sped_up(x_velocity: f32) -> f32 {
    (x_velocity.abs() * config::BALL_SPEED_UP).min(config::MAX_BALL_X_VELOCITY)
}

/// Advances the ball one tick and resolves its collisions.
///
/// Exiting the left bound credits the right player and vice versa; the two
/// exits are exclusive within a tick. A goal puts the ball back at the center
/// at rest and skips the wall and paddle checks.
///
/// Paddle contact is tested on every tick the bodies overlap, so a ball that
/// lingers inside a paddle keeps speeding up until it reaches the cap.
pub fn update_ball(
    ball: &mut Body,
    paddle_left: &Body,
    paddle_right: &Body,
    field: Field,
    delta_time: f32,
) -> BallEvents {
    let mut events = BallEvents::default();

    ball.integrate(delta_time);

    if ball.x < 0.0 {
        events.scored = Some(Side::Right);
    } else if ball.right() > field.width {
        events.scored = Some(Side::Left);
    }

    // A goal ends the tick with the ball back at rest in the center
    if events.scored.is_some() {
        *ball = Body::ball_at_center(field);
        return events;
    }

    if ball.y < 0.0 {
        ball.y = 0.0;
        ball.y_velocity = -ball.y_velocity;
        events.hit_wall = true;
    } else if ball.bottom() > field.height {
        ball.y = field.height - ball.height;
        ball.y_velocity = -ball.y_velocity;
        events.hit_wall = true;
    }

    if ball.collides(paddle_left) {
        ball.x_velocity = sped_up(ball.x_velocity);
        events.hit_paddle = Some(Side::Left);
        debug!("ball hit left paddle, x velocity now {}", ball.x_velocity);
    }

    if ball.collides(paddle_right) {
        ball.x_velocity = -sped_up(ball.x_velocity);
        events.hit_paddle = Some(Side::Right);
        debug!("ball hit right paddle, x velocity now {}", ball.x_velocity);
    }

    events
}

/// Advances a paddle one tick. A paddle pressed against a bound stops there.
pub fn update_paddle(paddle: &mut Body, field: Field, delta_time: f32) {
    paddle.integrate(delta_time);
    paddle.clamp_into(field);
}
