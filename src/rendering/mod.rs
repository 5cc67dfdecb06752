//! # Rendering Module
//!
//! The render hand-off: the core describes a frame as rectangles and text on a
//! [`RenderTarget`], and macroquad puts the pixels on screen.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;

use crate::game::GameState;
use crate::PaddleResult;
use macroquad::color::{Color, BLACK, WHITE};
use macroquad::math::Rect;

/// Size of a piece of rendered text in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

/// Drawing surface the simulation renders onto.
pub trait RenderTarget {
    /// Fills the whole surface.
    fn clear(&mut self, color: Color);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Size `text` would occupy at `font_size`.
    fn measure_text(&self, text: &str, font_size: u16) -> TextSize;

    /// Draws `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font_size: u16, color: Color)
        -> PaddleResult<()>;
}

/// Background color.
pub const CLEAR_COLOR: Color = BLACK;

/// Color of the bodies and the text.
pub const FOREGROUND_COLOR: Color = WHITE;

/// Draws one complete frame of `state`.
///
/// The score line is formatted fresh on every call.
pub fn render_frame<T: RenderTarget>(
    target: &mut T,
    state: &GameState,
    overlay: Option<&FrameStats>,
) -> PaddleResult<()> {
    target.clear(CLEAR_COLOR);

    ui::draw_net(target, state.field);

    target.fill_rect(state.ball.rect(), FOREGROUND_COLOR);
    target.fill_rect(state.paddle_left.rect(), FOREGROUND_COLOR);
    target.fill_rect(state.paddle_right.rect(), FOREGROUND_COLOR);

    ui::draw_score(target, state)?;
    ui::draw_serve_hint(target, state)?;

    if let Some(stats) = overlay {
        ui::draw_frame_stats(target, stats)?;
    }

    Ok(())
}
