//! # User Interface Elements
//!
//! Score line, serve hint, center net and the frame statistics overlay.

use crate::config;
use crate::game::{Field, GameState, RoundState};
use crate::rendering::{RenderTarget, FOREGROUND_COLOR};
use crate::PaddleResult;
use macroquad::color::{Color, GRAY};
use macroquad::math::Rect;

/// Distance from the top of the field to the score line.
pub const SCORE_TOP_MARGIN: f32 = 20.0;

const HINT_TEXT: &str = "Press SPACE to serve";
const HINT_FONT_SIZE: u16 = 24;
const STATS_FONT_SIZE: u16 = 16;

const NET_WIDTH: f32 = 4.0;
const NET_DASH: f32 = 20.0;
const NET_GAP: f32 = 15.0;
const NET_COLOR: Color = Color::new(0.3, 0.3, 0.3, 1.0);

/// Per-frame numbers shown by the development overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub delta_time: f32,
    pub frames: u64,
}

/// X coordinate that centers something `width` wide on the field.
pub fn centered_x(field: Field, width: f32) -> f32 {
    (field.width - width) / 2.0
}

/// Score line, centered horizontally near the top.
pub fn draw_score<T: RenderTarget>(target: &mut T, state: &GameState) -> PaddleResult<()> {
    let text = state.score_text();
    let size = target.measure_text(&text, config::SCORE_FONT_SIZE);
    target.draw_text(
        &text,
        centered_x(state.field, size.width),
        SCORE_TOP_MARGIN,
        config::SCORE_FONT_SIZE,
        FOREGROUND_COLOR,
    )
}

/// Hint under the ball while waiting for a serve.
pub fn draw_serve_hint<T: RenderTarget>(target: &mut T, state: &GameState) -> PaddleResult<()> {
    if state.round != RoundState::Paused {
        return Ok(());
    }
    let size = target.measure_text(HINT_TEXT, HINT_FONT_SIZE);
    let y = state.ball.bottom() + 40.0;
    target.draw_text(
        HINT_TEXT,
        centered_x(state.field, size.width),
        y,
        HINT_FONT_SIZE,
        GRAY,
    )
}

/// Dashed vertical line down the middle of the field.
pub fn draw_net<T: RenderTarget>(target: &mut T, field: Field) {
    let x = centered_x(field, NET_WIDTH);
    let mut y = 0.0;
    while y < field.height {
        let dash = NET_DASH.min(field.height - y);
        target.fill_rect(Rect::new(x, y, NET_WIDTH, dash), NET_COLOR);
        y += NET_DASH + NET_GAP;
    }
}

/// Delta time and frame count in the top-left corner.
pub fn draw_frame_stats<T: RenderTarget>(target: &mut T, stats: &FrameStats) -> PaddleResult<()> {
    let text = format!(
        "dt {:.1} ms | frame {}",
        stats.delta_time * 1000.0,
        stats.frames
    );
    target.draw_text(&text, 8.0, 8.0, STATS_FONT_SIZE, GRAY)
}
