//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_height() -> usize {
    defaults::board_height()
}
fn d_width() -> usize {
    defaults::board_width()
}
fn d_num_playouts() -> u32 {
    defaults::num_playouts()
}
fn d_num_trials() -> u32 {
    defaults::num_trials()
}
fn d_exploration() -> f64 {
    defaults::exploration()
}
fn d_win_reward() -> f64 {
    defaults::win_reward()
}
fn d_loss_reward() -> f64 {
    defaults::loss_reward()
}
fn d_draw_reward() -> f64 {
    defaults::draw_reward()
}

/// Root configuration, one field per config.toml section
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub mcts: MctsConfig,
}

/// Settings shared by every component
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Board dimensions
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BoardConfig {
    #[serde(default = "d_height")]
    pub height: usize,
    #[serde(default = "d_width")]
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            height: defaults::board_height(),
            width: defaults::board_width(),
        }
    }
}

/// Search budget, exploration constant and rollout rewards
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MctsConfig {
    #[serde(default = "d_num_playouts")]
    pub num_playouts: u32,
    #[serde(default = "d_num_trials")]
    pub num_trials: u32,
    #[serde(default = "d_exploration")]
    pub exploration: f64,
    #[serde(default = "d_win_reward")]
    pub win_reward: f64,
    #[serde(default = "d_loss_reward")]
    pub loss_reward: f64,
    #[serde(default = "d_draw_reward")]
    pub draw_reward: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_playouts: defaults::num_playouts(),
            num_trials: defaults::num_trials(),
            exploration: defaults::exploration(),
            win_reward: defaults::win_reward(),
            loss_reward: defaults::loss_reward(),
            draw_reward: defaults::draw_reward(),
        }
    }
}
