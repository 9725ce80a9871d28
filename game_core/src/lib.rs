pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod params;
pub mod resources;
pub mod sinks;
pub mod systems;
pub mod timer;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use sinks::*;
pub use timer::*;

pub use systems::{check_crash, Bird, Crash, InputOutcome, Key, Pipes, ScrollingLayer};

/// Build a game from an optional JSON config, falling back to defaults
pub fn create_game(config_json: Option<&str>, sinks: Sinks, seed: u64) -> Result<Game, String> {
    let config = match config_json {
        Some(json) => Config::from_json(json)?,
        None => Config::new(),
    };
    log::info!(
        "Creating game on a {}x{} stage",
        config.stage_width,
        config.stage_height
    );
    Ok(Game::new(config, sinks, seed))
}
