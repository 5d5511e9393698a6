//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic shared
//! by the Connect 4 engine crates.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`CONNECT4_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! CONNECT4_<SECTION>_<KEY>=value
//!
//! Examples:
//!     CONNECT4_COMMON_LOG_LEVEL=debug
//!     CONNECT4_BOARD_WIDTH=8
//!     CONNECT4_MCTS_NUM_PLAYOUTS=1000
//!     CONNECT4_MCTS_DRAW_REWARD=0.0
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;
