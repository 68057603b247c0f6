//! Main entry point for the terminal game.
//!
//! Initializes logging, takes over the terminal, and runs the round controller until
//! the player quits.

use std::io;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use term_2048::config::GameConfig;
use term_2048::game::RoundController;
use term_2048::terminal::{KeyboardInput, TerminalRenderer, TerminalSession};
use term_2048::GameError;

#[tokio::main]
async fn main() -> Result<(), GameError> {
    // Initialize logger from environment variable (stderr, silent unless RUST_LOG is set).
    env_logger::init();

    let config = GameConfig::default();

    // Restores the terminal when dropped, before any error is printed.
    let _terminal = TerminalSession::enter()?;

    let renderer = TerminalRenderer::new(io::stdout(), config.grid_size);
    let mut controller = RoundController::new(
        config,
        renderer,
        KeyboardInput::new(),
        StdRng::from_os_rng(),
    )?;

    controller.run().await?;
    info!(
        "Final score {} in {} steps",
        controller.state().score,
        controller.state().step
    );
    Ok(())
}
