//! # Paddle
//!
//! A two-player Pong built around a fixed-cadence simulation loop.
//!
//! ## Architecture Overview
//!
//! The crate separates the simulation core from the macroquad collaborator that
//! owns the window, the input queue and the pixels:
//!
//! - **Game**: bodies, the playfield, physics and the round controller
//! - **Input**: key events mapped to paddle velocities and round commands
//! - **Scheduler**: frame pacing and delta-time computation
//! - **Rendering**: a thin `RenderTarget` seam drawn by macroquad
//! - **Session**: the per-tick pipeline input → physics → render
//!
//! Everything except `rendering::display`, `input::events` and `Session::run`
//! works without a window, which is how the tests drive it.

pub mod game;
pub mod input;
pub mod rendering;
pub mod scheduler;
pub mod session;

pub use game::*;
pub use input::*;
pub use rendering::*;
pub use scheduler::*;
pub use session::*;

/// Core error type for the Paddle game.
#[derive(thiserror::Error, Debug)]
pub enum PaddleError {
    /// Font could not be loaded
    #[error("Font error: {0}")]
    Font(String),

    /// Launch options are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the Paddle codebase.
pub type PaddleResult<T> = Result<T, PaddleError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game rule constants. Rules are fixed; only pacing is tunable at launch.
pub mod config {
    /// Playfield width in pixels
    pub const FIELD_WIDTH: f32 = 800.0;

    /// Playfield height in pixels
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Frames per second target for the game loop
    pub const TARGET_FPS: u32 = 120;

    /// Ball edge length in pixels
    pub const BALL_SIZE: f32 = 20.0;

    /// Horizontal serve speed, pixels per second
    pub const BALL_X_VELOCITY: f32 = 250.0;

    /// Vertical serve speed, pixels per second
    pub const BALL_Y_VELOCITY: f32 = 250.0;

    /// Multiplier applied to the ball's horizontal speed on paddle contact
    pub const BALL_SPEED_UP: f32 = 1.1;

    /// Cap on the ball's horizontal speed after a paddle contact
    pub const MAX_BALL_X_VELOCITY: f32 = 3.0 * BALL_X_VELOCITY;

    /// Paddle width in pixels
    pub const PADDLE_WIDTH: f32 = 20.0;

    /// Paddle height in pixels
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Paddle speed while a movement key is held, pixels per second
    pub const PADDLE_VELOCITY: f32 = 300.0;

    /// Font size of the score line
    pub const SCORE_FONT_SIZE: u16 = 48;
}

/// Frame budget in whole milliseconds for a given frame rate.
///
/// # Examples
///
/// ```
/// assert_eq!(paddle::frame_budget_ms(120), 8);
/// assert_eq!(paddle::frame_budget_ms(60), 16);
/// ```
pub fn frame_budget_ms(fps: u32) -> u64 {
    1000 / u64::from(fps.max(1))
}
