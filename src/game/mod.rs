//! # Game Module
//!
//! Bodies, the playfield and the simulation core.
//!
//! - Geometry: axis-aligned rectangles with position and velocity
//! - Physics: integration, clamping, collision response
//! - State: the simulation context, score and round controller

pub mod physics;
pub mod state;

pub use physics::*;
pub use state::*;

use crate::config;
use macroquad::math::Rect;
use serde::{Deserialize, Serialize};

/// Dimensions of the playfield in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    /// Creates a field with the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(config::FIELD_WIDTH, config::FIELD_HEIGHT)
    }
}

/// Which half of the field, or which player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// An axis-aligned rectangle moving through the playfield.
///
/// The ball and both paddles are bodies. Dimensions are fixed after
/// construction; position and velocity are mutated by the physics tick.
///
/// # Examples
///
/// ```
/// use paddle::Body;
///
/// let ball = Body::new(20.0, 20.0, 390.0, 290.0, 0.0, 0.0);
/// assert_eq!(ball.right(), 410.0);
/// assert_eq!(ball.bottom(), 310.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub height: f32,
    pub width: f32,
    pub x: f32,
    pub y: f32,
    pub x_velocity: f32,
    pub y_velocity: f32,
}

impl Body {
    /// Creates a body. Dimensions must be positive; that is the caller's job.
    pub fn new(height: f32, width: f32, x: f32, y: f32, x_velocity: f32, y_velocity: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "body dimensions must be positive");
        Self {
            height,
            width,
            x,
            y,
            x_velocity,
            y_velocity,
        }
    }

    /// The ball at rest in the center of the field.
    pub fn ball_at_center(field: Field) -> Self {
        Self::new(
            config::BALL_SIZE,
            config::BALL_SIZE,
            field.width / 2.0 - config::BALL_SIZE / 2.0,
            field.height / 2.0 - config::BALL_SIZE / 2.0,
            0.0,
            0.0,
        )
    }

    /// A paddle at rest, vertically centered next to its side wall.
    pub fn paddle_at_start(side: Side, field: Field) -> Self {
        let x = match side {
            Side::Left => config::PADDLE_MARGIN,
            Side::Right => field.width - config::PADDLE_WIDTH - config::PADDLE_MARGIN,
        };
        Self::new(
            config::PADDLE_HEIGHT,
            config::PADDLE_WIDTH,
            x,
            field.height / 2.0 - config::PADDLE_HEIGHT / 2.0,
            0.0,
            0.0,
        )
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Moves the body by its velocity over `delta_time` seconds.
    pub fn integrate(&mut self, delta_time: f32) {
        self.x += self.x_velocity * delta_time;
        self.y += self.y_velocity * delta_time;
    }

    /// AABB overlap test. Touching edges count as a collision.
    ///
    /// # Examples
    ///
    /// ```
    /// use paddle::Body;
    ///
    /// let a = Body::new(10.0, 10.0, 0.0, 0.0, 0.0, 0.0);
    /// let b = Body::new(10.0, 10.0, 10.0, 0.0, 0.0, 0.0);
    /// let c = Body::new(10.0, 10.0, 10.5, 0.0, 0.0, 0.0);
    /// assert!(a.collides(&b));
    /// assert!(!a.collides(&c));
    /// ```
    pub fn collides(&self, other: &Body) -> bool {
        !(self.y > other.bottom()
            || other.y > self.bottom()
            || self.x > other.right()
            || other.x > self.right())
    }

    /// Clamps the position into the field, independently per axis.
    ///
    /// Velocity is untouched. On a field smaller than the body the body is
    /// pinned to the top-left corner.
    pub fn clamp_into(&mut self, field: Field) {
        self.x = self.x.min(field.width - self.width).max(0.0);
        self.y = self.y.min(field.height - self.height).max(0.0);
    }

    /// Screen rectangle handed to the renderer, snapped to whole pixels.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x.trunc(),
            self.y.trunc(),
            self.width.trunc(),
            self.height.trunc(),
        )
    }
}
