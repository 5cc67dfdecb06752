//! # Display Management
//!
//! macroquad implementation of [`RenderTarget`].

use crate::rendering::{RenderTarget, TextSize};
use crate::{PaddleError, PaddleResult};
use log::info;
use macroquad::prelude::*;
use std::path::Path;

/// Macroquad display manager for the game.
///
/// Draws into the current macroquad frame; presenting happens when the loop
/// awaits `next_frame`.
pub struct MacroquadDisplay {
    /// Font for text rendering, `None` for macroquad's built-in font
    pub font: Option<Font>,
}

impl MacroquadDisplay {
    /// Creates a display, loading a TTF font if a path is given.
    ///
    /// A font that fails to load is fatal to the caller.
    pub async fn new(font_path: Option<&Path>) -> PaddleResult<Self> {
        let font = match font_path {
            Some(path) => {
                let path = path.to_string_lossy();
                let font = load_ttf_font(&path)
                    .await
                    .map_err(|e| PaddleError::Font(format!("{}: {}", path, e)))?;
                info!("Loaded font from {}", path);
                Some(font)
            }
            None => None,
        };

        Ok(Self { font })
    }
}

impl RenderTarget for MacroquadDisplay {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn measure_text(&self, text: &str, font_size: u16) -> TextSize {
        let dimensions = measure_text(text, self.font.as_ref(), font_size, 1.0);
        TextSize {
            width: dimensions.width,
            height: dimensions.height,
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        font_size: u16,
        color: Color,
    ) -> PaddleResult<()> {
        // macroquad positions text by its baseline
        let dimensions = measure_text(text, self.font.as_ref(), font_size, 1.0);
        draw_text_ex(
            text,
            x,
            y + dimensions.offset_y,
            TextParams {
                font: self.font.as_ref(),
                font_size,
                color,
                ..Default::default()
            },
        );
        Ok(())
    }
}
