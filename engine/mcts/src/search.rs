//! MCTS search implementation.
//!
//! Implements one search trial:
//! 1. Selection: Descend with UCB1 until a node with an untried move
//! 2. Expansion: Add one child for the first untried legal column
//! 3. Simulation: Random rollout to the end of the game
//! 4. Backpropagation: Update statistics along the path to the root
//!
//! Rewards are signed relative to the perspective player, the player to
//! move at the root, which is fixed for the whole trial.

use games_connect4::{Board, BoardError, Player};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::rollout;
use crate::tree::MctsTree;

/// Errors that can occur during MCTS search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Cannot search from a finished game")]
    TerminalPosition,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Board error: {0}")]
    Board(#[from] BoardError),
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best column to play (most visited child of the root)
    pub action: usize,

    /// Visit count of the chosen child
    pub action_visits: u32,

    /// Visit counts of every root child, indexed by column
    pub child_visits: Vec<u32>,

    /// Total visits at the root
    pub root_visits: u32,

    /// Number of playouts performed by this run
    pub playouts: u32,
}

/// MCTS search state for one trial.
#[derive(Debug)]
pub struct MctsSearch {
    tree: MctsTree,
    config: MctsConfig,
    perspective: Player,
}

impl MctsSearch {
    /// Create a new MCTS search from the given board.
    ///
    /// Fails fast on finished games and unusable configs instead of
    /// returning an arbitrary column.
    pub fn new(board: Board, config: MctsConfig) -> Result<Self, SearchError> {
        config.validate()?;
        if board.is_terminal() {
            return Err(SearchError::TerminalPosition);
        }

        let perspective = board.next_to_move();
        Ok(Self {
            tree: MctsTree::new(board),
            config,
            perspective,
        })
    }

    /// The player to move at the root.
    pub fn perspective(&self) -> Player {
        self.perspective
    }

    /// Run the configured number of playouts and pick the most visited column.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchResult, SearchError> {
        for _ in 0..self.config.num_playouts {
            self.playout(rng);
        }

        let root_id = self.tree.root();
        let (action, child_id) = self
            .tree
            .best_child(root_id, 0.0, rng)
            .ok_or(SearchError::NoLegalMoves)?;

        let stats = self.tree.stats();
        debug!(
            action,
            nodes = stats.total_nodes,
            depth = stats.max_depth,
            root_visits = stats.root_visits,
            "MCTS search complete"
        );

        Ok(SearchResult {
            action,
            action_visits: self.tree.get(child_id).visit_count,
            child_visits: self.tree.child_visits(),
            root_visits: self.tree.get(root_id).visit_count,
            playouts: self.config.num_playouts,
        })
    }

    /// Run a single playout (select -> expand -> simulate -> backpropagate).
    pub fn playout(&mut self, rng: &mut ChaCha20Rng) {
        let leaf_id = self.select(rng);

        let reward = rollout::simulate(
            &self.tree.get(leaf_id).state,
            self.perspective,
            &self.config.rewards,
            rng,
        );

        self.tree.backpropagate(leaf_id, reward, self.perspective);

        trace!(leaf = leaf_id.0, reward, "MCTS playout complete");
    }

    /// Descend from the root until a terminal node or a node with an untried
    /// move, expanding the latter. Returns the node to roll out from.
    fn select(&mut self, rng: &mut ChaCha20Rng) -> NodeId {
        let mut current = self.tree.root();

        loop {
            let node = self.tree.get(current);

            if node.is_terminal {
                return current;
            }

            if !node.is_fully_expanded() {
                return self.expand(current, rng);
            }

            match self.tree.best_child(current, self.config.exploration, rng) {
                Some((_, child_id)) => current = child_id,
                None => return current, // No legal moves (only if terminal)
            }
        }
    }

    /// Add a child for the lowest untried legal column and return it.
    ///
    /// If every legal column already has a child, falls back to the most
    /// visited child.
    fn expand(&mut self, node_id: NodeId, rng: &mut ChaCha20Rng) -> NodeId {
        let node = self.tree.get(node_id);
        let untried = node
            .untried_moves()
            .next()
            .map(|column| (column, node.state.apply_move(column)));

        match untried {
            Some((column, state)) => self.tree.add_child(node_id, column, state),
            None => self
                .tree
                .best_child(node_id, 0.0, rng)
                .map_or(node_id, |(_, child_id)| child_id),
        }
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }
}

/// Convenience function to run a single MCTS trial.
pub fn run_mcts(
    board: &Board,
    config: MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<SearchResult, SearchError> {
    let mut search = MctsSearch::new(board.clone(), config)?;
    search.run(rng)
}
