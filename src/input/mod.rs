//! # Input Module
//!
//! Key events mapped onto paddle velocities and round commands.

pub mod events;

pub use events::*;

use crate::config;
use crate::game::{GameState, Side};
use log::debug;
use macroquad::input::KeyCode;

/// A raw event from the windowing layer, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close or other shutdown request
    Quit,
    /// A key went down (repeats included)
    KeyDown(KeyCode),
    /// A key was released
    KeyUp(KeyCode),
}

/// Maps key events onto the simulation context.
///
/// The last key pressed for a paddle wins, and releasing either of a paddle's
/// keys stops it even while the other one is still held.
pub struct InputHandler {
    /// Paddle speed while a movement key is held
    pub paddle_velocity: f32,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use macroquad::input::KeyCode;
    /// use paddle::{GameState, InputHandler};
    ///
    /// let input_handler = InputHandler::new();
    /// let mut state = GameState::new();
    /// input_handler.on_key_down(&mut state, KeyCode::W);
    /// assert!(state.paddle_left.y_velocity < 0.0);
    /// ```
    pub fn new() -> Self {
        Self {
            paddle_velocity: config::PADDLE_VELOCITY,
        }
    }

    /// Applies one event.
    pub fn handle_event(&self, state: &mut GameState, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                debug!("quit requested");
                state.quit();
            }
            InputEvent::KeyDown(key) => self.on_key_down(state, key),
            InputEvent::KeyUp(key) => self.on_key_up(state, key),
        }
    }

    /// Applies a batch of events in the order given.
    pub fn handle_events<I>(&self, state: &mut GameState, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.handle_event(state, event);
        }
    }

    /// Handles a key press. Unmapped keys are ignored.
    pub fn on_key_down(&self, state: &mut GameState, key: KeyCode) {
        match key {
            KeyCode::Escape => state.quit(),
            KeyCode::Space => {
                if !state.serve() {
                    debug!("serve ignored, ball already in play");
                }
            }
            KeyCode::W => state.paddle_mut(Side::Left).y_velocity = -self.paddle_velocity,
            KeyCode::S => state.paddle_mut(Side::Left).y_velocity = self.paddle_velocity,
            KeyCode::Up => state.paddle_mut(Side::Right).y_velocity = -self.paddle_velocity,
            KeyCode::Down => state.paddle_mut(Side::Right).y_velocity = self.paddle_velocity,
            _ => {}
        }
    }

    /// Handles a key release. Unmapped keys are ignored.
    pub fn on_key_up(&self, state: &mut GameState, key: KeyCode) {
        match key {
            KeyCode::W | KeyCode::S => state.paddle_mut(Side::Left).y_velocity = 0.0,
            KeyCode::Up | KeyCode::Down => state.paddle_mut(Side::Right).y_velocity = 0.0,
            _ => {}
        }
    }
}
