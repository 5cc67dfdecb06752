//! # Game State Module
//!
//! The simulation context and the round controller.
//!
//! `GameState` owns every body, the score and the round state. It is created
//! once at startup and passed by reference to the input mapper, the physics
//! tick and the renderer; nothing lives in globals.

use crate::config;
use crate::game::{update_ball, update_paddle, BallEvents, Body, Field, Side};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Goals scored by each player. Never decremented and has no ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits one goal to `side`.
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

impl fmt::Display for Score {
    /// Formats as `"<left> - <right>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.left, self.right)
    }
}

/// Whether the ball is in play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Ball at rest in the center, waiting for a serve
    #[default]
    Paused,
    /// Ball in play
    Active,
}

/// Central simulation context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub ball: Body,
    pub paddle_left: Body,
    pub paddle_right: Body,
    pub score: Score,
    pub round: RoundState,
    /// Cleared by a quit command; the loop exits at the top of the next tick
    pub is_running: bool,
    /// Physics ticks run so far
    pub frames: u64,
    /// Serves accepted so far
    pub serves: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Sets up a fresh game on the default field: bodies at their start
    /// positions, score zero, round paused.
    ///
    /// # Examples
    ///
    /// ```
    /// use paddle::{GameState, RoundState};
    ///
    /// let state = GameState::new();
    /// assert_eq!(state.round, RoundState::Paused);
    /// assert_eq!(state.score.to_string(), "0 - 0");
    /// ```
    pub fn new() -> Self {
        Self::with_field(Field::default())
    }

    /// Sets up a fresh game on the given field.
    pub fn with_field(field: Field) -> Self {
        Self {
            field,
            ball: Body::ball_at_center(field),
            paddle_left: Body::paddle_at_start(Side::Left, field),
            paddle_right: Body::paddle_at_start(Side::Right, field),
            score: Score::new(),
            round: RoundState::Paused,
            is_running: true,
            frames: 0,
            serves: 0,
        }
    }

    /// Mutable access to one paddle.
    pub fn paddle_mut(&mut self, side: Side) -> &mut Body {
        match side {
            Side::Left => &mut self.paddle_left,
            Side::Right => &mut self.paddle_right,
        }
    }

    /// Puts the ball in play if the round is paused. Returns whether it did.
    pub fn serve(&mut self) -> bool {
        if self.round != RoundState::Paused {
            return false;
        }
        self.ball.x_velocity = config::BALL_X_VELOCITY;
        self.ball.y_velocity = config::BALL_Y_VELOCITY;
        self.round = RoundState::Active;
        self.serves += 1;
        info!("serve #{}", self.serves);
        true
    }

    /// Requests the loop to stop.
    pub fn quit(&mut self) {
        self.is_running = false;
    }

    /// Restores ball and paddle geometry and velocity, keeping the score.
    pub fn reset_round(&mut self) {
        self.ball = Body::ball_at_center(self.field);
        self.paddle_left = Body::paddle_at_start(Side::Left, self.field);
        self.paddle_right = Body::paddle_at_start(Side::Right, self.field);
        self.round = RoundState::Paused;
    }

    /// Runs one physics tick: ball first, then both paddles.
    ///
    /// A goal is credited and the round reset before the paddles move, so the
    /// paddles of the next round start from rest.
    pub fn update(&mut self, delta_time: f32) -> BallEvents {
        let events = update_ball(
            &mut self.ball,
            &self.paddle_left,
            &self.paddle_right,
            self.field,
            delta_time,
        );

        if let Some(side) = events.scored {
            self.score.increment(side);
            info!("{:?} player scored, {}", side, self.score);
            self.reset_round();
        } else if events.hit_wall {
            debug!("ball bounced off a wall at x={:.1}", self.ball.x);
        }

        update_paddle(&mut self.paddle_left, self.field, delta_time);
        update_paddle(&mut self.paddle_right, self.field, delta_time);

        self.frames += 1;
        events
    }

    /// Score line as shown on screen.
    pub fn score_text(&self) -> String {
        self.score.to_string()
    }
}
