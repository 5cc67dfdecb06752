//! # Paddle Main Entry Point
//!
//! Parses launch options, sets up logging and runs the game loop in a
//! macroquad window.

use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use paddle::{config, PaddleResult, RunOptions};
use std::path::PathBuf;

/// Command line arguments for Paddle.
#[derive(Parser, Debug)]
#[command(name = "paddle")]
#[command(about = "A two-player Pong with a fixed-cadence simulation loop")]
#[command(version)]
struct Args {
    /// Frame pacing target in frames per second
    #[arg(long, default_value_t = config::TARGET_FPS)]
    fps: u32,

    /// TTF font used for the score line
    #[arg(long)]
    font: Option<PathBuf>,

    /// Show frame statistics
    #[arg(long)]
    dev_mode: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            target_fps: self.fps,
            font_path: self.font.clone(),
            show_frame_stats: self.dev_mode,
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Paddle".to_string(),
        window_width: config::FIELD_WIDTH as i32,
        window_height: config::FIELD_HEIGHT as i32,
        window_resizable: false,
        platform: macroquad::miniquad::conf::Platform {
            // pacing is done by the frame scheduler, not vsync
            swap_interval: Some(0),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Paddle v{}", paddle::VERSION);

    if let Err(e) = run_game(&args).await {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system. `RUST_LOG` takes precedence over the flag.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Runs the game until the players quit.
async fn run_game(args: &Args) -> PaddleResult<()> {
    let options = args.run_options();
    options.validate()?;

    let summary = paddle::run(&options).await?;
    info!("Final score {}", summary.score);
    Ok(())
}
