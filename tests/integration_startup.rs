//! Integration test to ensure a game can be set up and served without a window.

use macroquad::input::KeyCode;
use paddle::{
    config, Body, Field, GameState, InputEvent, ManualClock, PaddleResult, RoundState, RunOptions,
    Session, Side,
};

#[test]
fn test_basic_startup() -> PaddleResult<()> {
    let session = Session::new(&RunOptions::default(), ManualClock::new(0))?;
    let state = &session.state;

    // Everything at rest in its canonical place
    assert!(session.is_running());
    assert_eq!(state.round, RoundState::Paused);
    assert_eq!(state.score.to_string(), "0 - 0");
    assert_eq!(state.ball, Body::ball_at_center(Field::default()));
    assert_eq!(state.paddle_left.x, config::PADDLE_MARGIN);
    assert_eq!(
        state.paddle_right.right(),
        config::FIELD_WIDTH - config::PADDLE_MARGIN
    );
    assert_eq!(session.scheduler().frame_budget_ms(), 8);

    Ok(())
}

#[test]
fn test_serve_from_rest() {
    let mut state = GameState::new();
    assert_eq!((state.ball.x_velocity, state.ball.y_velocity), (0.0, 0.0));

    assert!(state.serve());

    assert_eq!(
        (state.ball.x_velocity, state.ball.y_velocity),
        (config::BALL_X_VELOCITY, config::BALL_Y_VELOCITY)
    );
    assert_eq!(state.round, RoundState::Active);
}

#[test]
fn test_paused_ball_stays_put_while_paddles_move() -> PaddleResult<()> {
    let mut session = Session::new(&RunOptions::default(), ManualClock::new(0))?;

    session.tick([InputEvent::KeyDown(KeyCode::W)]);
    for _ in 0..10 {
        session.tick(std::iter::empty());
    }

    let state = &session.state;
    assert_eq!(state.ball, Body::ball_at_center(state.field));
    assert!(state.paddle_left.y < Body::paddle_at_start(Side::Left, state.field).y);
    assert_eq!(state.frames, 11);

    Ok(())
}

#[test]
fn test_invalid_fps_is_rejected() {
    let options = RunOptions {
        target_fps: 0,
        ..Default::default()
    };
    assert!(Session::new(&options, ManualClock::new(0)).is_err());
}
