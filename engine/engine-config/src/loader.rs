//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::Path;
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a crate directory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by the CONNECT4_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    if let Ok(path) = std::env::var("CONNECT4_CONFIG") {
        let path = Path::new(&path);
        if path.exists() {
            info!("Loading config from CONNECT4_CONFIG: {}", path.display());
            return load_from_path(path);
        }
        warn!(
            "CONNECT4_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// Unreadable or malformed files fall back to the built-in defaults.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, usize, f64, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        match std::env::var($key).map(|s| s.parse()) {
            Ok(Ok(v)) => $config.$section.$field = v,
            Ok(Err(_)) => warn!("Ignoring unparseable value in {}", $key),
            Err(_) => {}
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: CONNECT4_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "CONNECT4_COMMON_LOG_LEVEL");

    // Board
    env_override!(config, board.height, "CONNECT4_BOARD_HEIGHT", parse);
    env_override!(config, board.width, "CONNECT4_BOARD_WIDTH", parse);

    // MCTS
    env_override!(
        config,
        mcts.num_playouts,
        "CONNECT4_MCTS_NUM_PLAYOUTS",
        parse
    );
    env_override!(config, mcts.num_trials, "CONNECT4_MCTS_NUM_TRIALS", parse);
    env_override!(config, mcts.exploration, "CONNECT4_MCTS_EXPLORATION", parse);
    env_override!(config, mcts.win_reward, "CONNECT4_MCTS_WIN_REWARD", parse);
    env_override!(config, mcts.loss_reward, "CONNECT4_MCTS_LOSS_REWARD", parse);
    env_override!(config, mcts.draw_reward, "CONNECT4_MCTS_DRAW_REWARD", parse);

    config
}
