//! Random rollouts.
//!
//! A rollout plays uniformly random columns from a board until the game
//! ends and scores the final position for the perspective player.

use games_connect4::{Board, Player};
use rand::Rng;
use rand_chacha::ChaCha20Rng;

/// Reward values for a finished rollout, seen from the perspective player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rewards {
    pub win: f64,
    pub loss: f64,
    pub draw: f64,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            win: 1.0,
            loss: -1.0,
            draw: 0.5,
        }
    }
}

/// Score a terminal board for `perspective`.
///
/// Non-terminal boards score 0.0.
pub fn score(board: &Board, perspective: Player, rewards: &Rewards) -> f64 {
    if board.has_won(perspective) {
        rewards.win
    } else if board.has_won(perspective.opponent()) {
        rewards.loss
    } else if board.is_draw() {
        rewards.draw
    } else {
        0.0
    }
}

/// Play uniformly random moves from `board` to the end of the game and
/// return the reward for `perspective`.
///
/// Columns are drawn from `[0, width)`; a full column is redrawn without
/// counting as a move. A board that is already terminal is scored directly.
pub fn simulate(
    board: &Board,
    perspective: Player,
    rewards: &Rewards,
    rng: &mut ChaCha20Rng,
) -> f64 {
    let mut state = board.clone();
    let width = state.width();

    while !state.is_terminal() {
        let column = rng.gen_range(0..width);
        if state.is_column_full(column) {
            continue;
        }
        state = state.apply_move(column);
    }

    score(&state, perspective, rewards)
}
