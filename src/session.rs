//! # Session
//!
//! The per-tick pipeline: drain input, pace the frame, step the physics, hand
//! the frame to the renderer. [`Session`] holds everything a tick needs and is
//! driven either by [`run`] inside the macroquad window or directly by tests.

use crate::game::{BallEvents, GameState, Score};
use crate::input::{EventQueue, InputEvent, InputHandler};
use crate::rendering::{render_frame, FrameStats, MacroquadDisplay, RenderTarget};
use crate::scheduler::{Clock, FrameScheduler, SystemClock};
use crate::{config, frame_budget_ms, PaddleError, PaddleResult};
use log::info;
use macroquad::window::next_frame;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Highest frame rate accepted at launch.
pub const MAX_FPS: u32 = 1000;

/// Launch options. Game rules are not part of these.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Frame pacing target
    pub target_fps: u32,
    /// TTF font for the score line
    pub font_path: Option<PathBuf>,
    /// Draw the frame statistics overlay
    pub show_frame_stats: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            target_fps: config::TARGET_FPS,
            font_path: None,
            show_frame_stats: false,
        }
    }
}

impl RunOptions {
    /// Checks the options are usable.
    pub fn validate(&self) -> PaddleResult<()> {
        if self.target_fps == 0 || self.target_fps > MAX_FPS {
            return Err(PaddleError::InvalidConfig(format!(
                "target fps must be between 1 and {}, got {}",
                MAX_FPS, self.target_fps
            )));
        }
        Ok(())
    }
}

/// What a session amounted to, logged at shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: Score,
    pub frames: u64,
    pub serves: u32,
}

impl SessionSummary {
    /// Summary of the given state.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            frames: state.frames,
            serves: state.serves,
        }
    }

    /// JSON form of the summary.
    pub fn to_json(&self) -> PaddleResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A running game: simulation context plus the input mapper and scheduler.
pub struct Session<C: Clock> {
    pub state: GameState,
    input_handler: InputHandler,
    scheduler: FrameScheduler<C>,
    show_frame_stats: bool,
}

impl<C: Clock> Session<C> {
    /// Sets up the game and starts the frame clock.
    pub fn new(options: &RunOptions, clock: C) -> PaddleResult<Self> {
        options.validate()?;
        Ok(Self {
            state: GameState::new(),
            input_handler: InputHandler::new(),
            scheduler: FrameScheduler::new(clock, frame_budget_ms(options.target_fps)),
            show_frame_stats: options.show_frame_stats,
        })
    }

    /// False once a quit command has been processed.
    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    /// Runs one tick: apply `events` in order, wait out the frame budget,
    /// then advance the physics by the measured delta.
    pub fn tick<I>(&mut self, events: I) -> BallEvents
    where
        I: IntoIterator<Item = InputEvent>,
    {
        self.input_handler.handle_events(&mut self.state, events);
        let delta_time = self.scheduler.wait_for_next_frame();
        self.state.update(delta_time)
    }

    /// Draws the current state.
    pub fn render<T: RenderTarget>(&self, target: &mut T) -> PaddleResult<()> {
        let stats = self.show_frame_stats.then(|| FrameStats {
            delta_time: self.scheduler.last_delta(),
            frames: self.state.frames,
        });
        render_frame(target, &self.state, stats.as_ref())
    }

    /// Summary of the session so far.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_state(&self.state)
    }

    /// The frame scheduler.
    pub fn scheduler(&self) -> &FrameScheduler<C> {
        &self.scheduler
    }

    /// Mutable access to the frame scheduler.
    pub fn scheduler_mut(&mut self) -> &mut FrameScheduler<C> {
        &mut self.scheduler
    }
}

/// Runs the game in the current macroquad window until quit.
///
/// Must be awaited from the macroquad main future.
pub async fn run(options: &RunOptions) -> PaddleResult<SessionSummary> {
    let mut display = MacroquadDisplay::new(options.font_path.as_deref()).await?;
    let mut event_queue = EventQueue::new();
    let mut session = Session::new(options, SystemClock::new())?;

    info!(
        "Game loop starting at {} fps ({} ms budget)",
        options.target_fps,
        session.scheduler().frame_budget_ms()
    );

    while session.is_running() {
        session.tick(event_queue.drain());
        session.render(&mut display)?;
        next_frame().await;
    }

    let summary = session.summary();
    info!("Game loop ended: {}", summary.to_json()?);
    Ok(summary)
}
