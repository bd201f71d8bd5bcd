//! Entry point: load config, start logging, take over the terminal, play.

mod config;
mod domain;
mod game;
mod logging;
mod sim;
mod ui;

use std::process::ExitCode;

use anyhow::{Context, Result};

use config::GameConfig;
use game::Game;
use sim::world::WorldState;
use ui::clock::FrameClock;
use ui::gamepad::GamepadState;
use ui::input::TerminalInput;
use ui::renderer::TerminalRenderer;

fn main() -> ExitCode {
    let config = GameConfig::load();

    if let Err(e) = logging::init(&config.log) {
        eprintln!("Logging init failed: {e:#}");
        return ExitCode::FAILURE;
    }
    tracing::info!(?config, "starting");

    match run(&config) {
        Ok(length) => {
            println!("Final length: {length}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("snake: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Play until quit. Returns the snake's final length.
fn run(config: &GameConfig) -> Result<usize> {
    let mut renderer = TerminalRenderer::new();
    if let Err(e) = renderer.init() {
        // init may fail halfway through; put the terminal back regardless.
        let _ = renderer.cleanup();
        return Err(e).context("terminal init failed");
    }

    let mut gamepad = GamepadState::new();
    gamepad.load_button_config(&config.gamepad);
    if gamepad.connected {
        tracing::info!("gamepad detected");
    }

    let world = WorldState::new(config.seed);
    let mut game = Game::new(world, renderer, TerminalInput::new(gamepad), FrameClock::new());

    let result = game.run();

    if let Err(e) = game.renderer_mut().cleanup() {
        tracing::warn!("terminal cleanup failed: {e}");
        eprintln!("Terminal cleanup failed: {e}");
    }

    result.map(|()| game.world().snake.length())
}
