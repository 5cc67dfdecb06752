//! # Event Queue
//!
//! Drains macroquad's raw key stream in arrival order.
//!
//! macroquad's polling API (`is_key_pressed` and friends) collapses a frame's
//! events into sets, which loses ordering and drops a press and release that
//! land in the same frame. Subscribing to the miniquad stream keeps both.

use crate::input::InputEvent;
use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyCode, KeyMods};
use macroquad::prelude::{is_quit_requested, prevent_quit};

/// Collects key events replayed from the miniquad stream.
#[derive(Default)]
struct EventSink {
    events: Vec<InputEvent>,
}

impl EventHandler for EventSink {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        self.events.push(InputEvent::KeyDown(keycode));
    }

    fn key_up_event(&mut self, keycode: KeyCode, _keymods: KeyMods) {
        self.events.push(InputEvent::KeyUp(keycode));
    }
}

/// Input subscription owned by the game loop.
///
/// Must be created inside the macroquad main future.
pub struct EventQueue {
    subscriber: usize,
}

impl EventQueue {
    /// Registers the subscription and takes over window close requests.
    pub fn new() -> Self {
        prevent_quit();
        Self {
            subscriber: register_input_subscriber(),
        }
    }

    /// Everything that arrived since the last drain, oldest first.
    ///
    /// A pending window close request is appended as [`InputEvent::Quit`].
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let mut sink = EventSink::default();
        repeat_all_miniquad_input(&mut sink, self.subscriber);
        if is_quit_requested() {
            sink.events.push(InputEvent::Quit);
        }
        sink.events
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
