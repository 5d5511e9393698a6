//! MCTS configuration parameters.

use engine_config::CentralConfig;
use games_connect4::{Board, BoardError};

use crate::rollout::Rewards;
use crate::search::SearchError;

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Number of playouts (select, expand, rollout, backpropagate) per trial.
    pub num_playouts: u32,

    /// Number of independent trials whose answers are majority-voted.
    pub num_trials: u32,

    /// Exploration constant `c` for UCB1. Must be positive; 0 is reserved
    /// for the final visit-count vote.
    pub exploration: f64,

    /// Rollout rewards from the perspective of the player to move at the root.
    pub rewards: Rewards,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_playouts: 250,
            num_trials: 1,
            exploration: 1.414,
            rewards: Rewards::default(),
        }
    }
}

impl MctsConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            num_playouts: 50,
            ..Self::default()
        }
    }

    /// Build a config from the `[mcts]` section of the central config.
    pub fn from_central(config: &CentralConfig) -> Self {
        let mcts = &config.mcts;
        Self {
            num_playouts: mcts.num_playouts,
            num_trials: mcts.num_trials,
            exploration: mcts.exploration,
            rewards: Rewards {
                win: mcts.win_reward,
                loss: mcts.loss_reward,
                draw: mcts.draw_reward,
            },
        }
    }

    /// Load config.toml (with environment overrides) and build a config from it.
    pub fn load() -> Self {
        Self::from_central(&engine_config::load_config())
    }

    /// Builder pattern: set number of playouts per trial.
    pub fn with_playouts(mut self, n: u32) -> Self {
        self.num_playouts = n;
        self
    }

    /// Builder pattern: set number of trials.
    pub fn with_trials(mut self, n: u32) -> Self {
        self.num_trials = n;
        self
    }

    /// Builder pattern: set the UCB1 exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set rollout rewards.
    pub fn with_rewards(mut self, rewards: Rewards) -> Self {
        self.rewards = rewards;
        self
    }

    /// Reject configurations the search cannot run with.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.num_playouts == 0 {
            return Err(SearchError::InvalidConfig(
                "num_playouts must be at least 1".to_string(),
            ));
        }
        if self.num_trials == 0 {
            return Err(SearchError::InvalidConfig(
                "num_trials must be at least 1".to_string(),
            ));
        }
        if !self.exploration.is_finite() || self.exploration <= 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "exploration must be a positive finite number, got {}",
                self.exploration
            )));
        }
        let r = &self.rewards;
        if !(r.win.is_finite() && r.loss.is_finite() && r.draw.is_finite()) {
            return Err(SearchError::InvalidConfig(format!(
                "rewards must be finite, got {:?}",
                r
            )));
        }
        Ok(())
    }
}

/// Empty board with the dimensions from the `[board]` section.
pub fn board_from_central(config: &CentralConfig) -> Result<Board, BoardError> {
    Board::new(config.board.height, config.board.width)
}
