//! Move selection across independent search trials.
//!
//! Each trial builds a fresh tree from the same board and runs a full MCTS
//! search. The column recommended most often wins; ties go to the column
//! whose first vote came earliest.

use games_connect4::Board;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::config::MctsConfig;
use crate::search::{MctsSearch, SearchError};

/// Runs `num_trials` independent searches and majority-votes their answers.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    config: MctsConfig,
}

impl MoveSelector {
    pub fn new(config: MctsConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Pick a column for the player to move on `board`.
    pub fn choose_move(&self, board: &Board, rng: &mut ChaCha20Rng) -> Result<usize, SearchError> {
        if board.is_terminal() {
            return Err(SearchError::TerminalPosition);
        }

        let mut votes = Vec::with_capacity(self.config.num_trials as usize);
        for trial in 0..self.config.num_trials {
            let mut search = MctsSearch::new(board.clone(), self.config.clone())?;
            let result = search.run(rng)?;
            debug!(
                trial,
                action = result.action,
                visits = result.action_visits,
                "Trial finished"
            );
            votes.push(result.action);
        }

        majority_vote(&votes).ok_or(SearchError::NoLegalMoves)
    }
}

/// Most frequent vote; ties resolved by first appearance.
fn majority_vote(votes: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;

    for &vote in votes {
        let count = votes.iter().filter(|&&v| v == vote).count();
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((vote, count)),
        }
    }

    best.map(|(vote, _)| vote)
}

/// Choose a column with the default config and `num_playouts` per trial,
/// using an entropy-seeded RNG.
pub fn choose_move(board: &Board, num_playouts: u32) -> Result<usize, SearchError> {
    let mut rng = ChaCha20Rng::from_entropy();
    choose_move_with_rng(board, num_playouts, &mut rng)
}

/// Reproducible variant of [`choose_move`].
pub fn choose_move_with_rng(
    board: &Board,
    num_playouts: u32,
    rng: &mut ChaCha20Rng,
) -> Result<usize, SearchError> {
    let config = MctsConfig::default().with_playouts(num_playouts);
    MoveSelector::new(config)?.choose_move(board, rng)
}
