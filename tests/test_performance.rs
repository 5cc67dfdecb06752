//! Performance tests for the simulation tick

use macroquad::input::KeyCode;
use paddle::{GameState, InputEvent, InputHandler, PaddleResult};
use std::time::Instant;

#[test]
fn test_physics_tick_performance() -> PaddleResult<()> {
    let mut game_state = GameState::new();
    game_state.serve();

    let start = Instant::now();
    let iterations: u32 = 100_000;

    for _ in 0..iterations {
        game_state.update(1.0 / 120.0);
        if game_state.round == paddle::RoundState::Paused {
            game_state.serve();
        }
    }

    let elapsed = start.elapsed();
    let avg_tick_time = elapsed / iterations;

    println!("Average physics tick time: {:?}", avg_tick_time);
    println!("Goals scored: {}", game_state.score);

    // A tick must fit comfortably inside the 8 ms frame budget
    assert!(
        avg_tick_time.as_micros() < 100,
        "Physics tick too slow: {:?}",
        avg_tick_time
    );
    assert_eq!(game_state.frames, u64::from(iterations));

    Ok(())
}

#[test]
fn test_input_dispatch_performance() -> PaddleResult<()> {
    let handler = InputHandler::new();
    let mut game_state = GameState::new();
    let keys = [KeyCode::W, KeyCode::S, KeyCode::Up, KeyCode::Down];

    let start = Instant::now();
    let iterations: u32 = 100_000;

    for i in 0..iterations {
        let key = keys[i as usize % keys.len()];
        handler.handle_events(
            &mut game_state,
            [InputEvent::KeyDown(key), InputEvent::KeyUp(key)],
        );
    }

    let elapsed = start.elapsed();
    let avg_dispatch_time = elapsed / iterations;

    println!("Average input dispatch time: {:?}", avg_dispatch_time);

    assert!(
        avg_dispatch_time.as_micros() < 50,
        "Input dispatch too slow: {:?}",
        avg_dispatch_time
    );
    assert_eq!(game_state.paddle_left.y_velocity, 0.0);
    assert_eq!(game_state.paddle_right.y_velocity, 0.0);

    Ok(())
}
