//! Monte Carlo Tree Search (MCTS) for Connect 4.
//!
//! This crate picks moves for the `games-connect4` rules engine under a
//! fixed playout budget, using UCB1 selection and uniformly random
//! rollouts.
//!
//! # Overview
//!
//! Each playout consists of four phases:
//!
//! 1. **Selection**: Descend the tree with UCB1 while every legal move of
//!    the current node already has a child
//! 2. **Expansion**: Add one child for the lowest untried legal column
//! 3. **Simulation**: Play random columns to the end of the game and score
//!    the result for the player to move at the root
//! 4. **Backpropagation**: Update visit counts and rewards along the path
//!    from the new node to the root
//!
//! After the budget is spent, the most visited root child is the trial's
//! answer. [`MoveSelector`] repeats independent trials and majority-votes.
//!
//! # Usage
//!
//! ```rust
//! use games_connect4::Board;
//! use mcts::{choose_move_with_rng, MctsConfig, MoveSelector};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let board = Board::standard().apply_move(3);
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! // Single trial with the default config
//! let column = choose_move_with_rng(&board, 100, &mut rng).unwrap();
//! assert!(column < 7);
//!
//! // Three trials, majority vote
//! let selector = MoveSelector::new(MctsConfig::for_testing().with_trials(3)).unwrap();
//! let column = selector.choose_move(&board, &mut rng).unwrap();
//! assert!(board.legal_moves().contains(&column));
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `num_playouts`: Playouts per trial (default: 250)
//! - `num_trials`: Independent trials to vote over (default: 1)
//! - `exploration`: UCB1 exploration constant (default: 1.414)
//! - `rewards`: Win / loss / draw rewards (default: 1.0 / -1.0 / 0.5)
//!
//! [`MctsConfig::load`] reads the same values from `config.toml`.
//!
//! # Architecture
//!
//! ```text
//! +-------------------------------------------------------+
//! |                     MoveSelector                      |
//! |             (trials + majority vote)                  |
//! +---------------------------+---------------------------+
//!                             |
//!                             v
//! +-------------------------------------------------------+
//! |                      MctsSearch                       |
//! |  +------------+   +-------------+   +--------------+  |
//! |  |  MctsTree  |   |   rollout   |   |    Board     |  |
//! |  |  (arena)   |   | (simulate)  |   | (rules)      |  |
//! |  +------------+   +-------------+   +--------------+  |
//! |      select -> expand -> simulate -> backpropagate    |
//! +-------------------------------------------------------+
//! ```

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod selector;
pub mod tree;

// Re-export main types
pub use config::{board_from_central, MctsConfig};
pub use node::{MctsNode, NodeId};
pub use rollout::Rewards;
pub use search::{run_mcts, MctsSearch, SearchError, SearchResult};
pub use selector::{choose_move, choose_move_with_rng, MoveSelector};
pub use tree::{MctsTree, TreeStats};
