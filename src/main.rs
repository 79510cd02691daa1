use std::error::Error;
use std::fs::File;
use std::sync::Arc;

mod app;
mod config;
mod game;
mod ui;

pub use config::{
    BOARD_H, BOARD_W, CELL_H, CELL_W, FRAME_MS, GAP, INTRO_GROUP_FRAMES, INTRO_GROUP_SIZE,
    MIN_PANE_WIDTH, MISMATCH_HOLD_FRAMES, PLAY_H, PLAY_W, REVEAL_FLASH_FRAMES, WIN_FLASH_FRAMES,
    WIN_FLASH_PERIOD,
};
pub use game::{Game, PickOutcome};

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;
    app::run()
}

// The TUI owns the terminal, so logs go to a file.
fn init_logging() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("pairs-game.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
