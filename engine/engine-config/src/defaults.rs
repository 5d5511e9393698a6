//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time so every binary and test
//! sees the same values.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    board: BoardDefaults,
    mcts: MctsDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct BoardDefaults {
    height: usize,
    width: usize,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    num_playouts: u32,
    num_trials: u32,
    exploration: f64,
    win_reward: f64,
    loss_reward: f64,
    draw_reward: f64,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Board
pub fn board_height() -> usize {
    DEFAULTS.board.height
}
pub fn board_width() -> usize {
    DEFAULTS.board.width
}

// MCTS
pub fn num_playouts() -> u32 {
    DEFAULTS.mcts.num_playouts
}
pub fn num_trials() -> u32 {
    DEFAULTS.mcts.num_trials
}
pub fn exploration() -> f64 {
    DEFAULTS.mcts.exploration
}
pub fn win_reward() -> f64 {
    DEFAULTS.mcts.win_reward
}
pub fn loss_reward() -> f64 {
    DEFAULTS.mcts.loss_reward
}
pub fn draw_reward() -> f64 {
    DEFAULTS.mcts.draw_reward
}
