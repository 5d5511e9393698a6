//! End-to-end move selection on real Connect 4 positions.

use games_connect4::{Board, Player};
use mcts::{choose_move, choose_move_with_rng, MctsConfig, MoveSelector, SearchError};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

/// Route search logs through the test harness; `RUST_LOG=mcts=debug` shows trials.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn play(moves: &[usize]) -> Board {
    moves
        .iter()
        .fold(Board::standard(), |b, &m| b.apply_move(m))
}

/// Full board minus the top disc of column 0; player two must play there.
fn one_column_left() -> Board {
    let grid = vec![
        vec![0, 1, 2, 1, 2, 1, 2],
        vec![2, 1, 2, 1, 2, 1, 2],
        vec![1, 2, 1, 2, 1, 2, 1],
        vec![1, 2, 1, 2, 1, 2, 1],
        vec![2, 1, 2, 1, 2, 1, 2],
        vec![1, 2, 1, 2, 1, 2, 1],
    ];
    Board::from_grid(&grid).unwrap()
}

#[test]
fn empty_board_small_budget_returns_valid_column() {
    for _ in 0..20 {
        let column = choose_move(&Board::standard(), 10).unwrap();
        assert!(column < 7);
    }
}

#[test]
fn single_legal_column_is_always_chosen() {
    let board = one_column_left();
    assert_eq!(board.legal_moves(), vec![0]);
    assert_eq!(board.winner(), None);

    for playouts in [1, 2, 10, 100] {
        let mut rng = ChaCha20Rng::seed_from_u64(playouts as u64);
        assert_eq!(choose_move_with_rng(&board, playouts, &mut rng).unwrap(), 0);
    }
}

#[test]
fn immediate_win_is_found_with_high_frequency() {
    // Player one holds columns 1-3 on the bottom row, player two has
    // blocked column 0, so only column 4 completes the line.
    let board = play(&[1, 1, 2, 2, 3, 0]);
    assert_eq!(board.next_to_move(), Player::One);
    assert!(board.apply_move(4).has_won(Player::One));
    assert!(!board.apply_move(0).has_won(Player::One));

    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let hits = (0..30)
        .filter(|_| choose_move_with_rng(&board, 250, &mut rng).unwrap() == 4)
        .count();

    assert!(hits >= 25, "winning column chosen {} / 30 times", hits);
}

#[test]
fn immediate_win_for_player_two() {
    init_tracing();
    // Player two stacks three in column 6; player one's discs are scattered
    let board = play(&[0, 6, 2, 6, 4, 6, 0]);
    assert_eq!(board.next_to_move(), Player::Two);
    assert!(board.apply_move(6).has_won(Player::Two));

    let selector = MoveSelector::new(MctsConfig::default().with_playouts(300).with_trials(3))
        .unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    let hits = (0..10)
        .filter(|_| selector.choose_move(&board, &mut rng).unwrap() == 6)
        .count();

    assert!(hits >= 9, "winning column chosen {} / 10 times", hits);
}

#[test]
fn chosen_move_is_always_legal() {
    init_tracing();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let mut board = Board::standard();

    // Self-play a whole game with a small budget
    while !board.is_terminal() {
        let column = choose_move_with_rng(&board, 20, &mut rng).unwrap();
        assert!(board.legal_moves().contains(&column));
        board = board.try_apply_move(column).unwrap();
    }

    assert!(board.winner().is_some() || board.is_draw());
}

#[test]
fn finished_game_is_rejected() {
    let board = play(&[0, 0, 1, 1, 2, 2, 3]);
    let err = choose_move(&board, 50).unwrap_err();
    assert!(matches!(err, SearchError::TerminalPosition));

    let drawn = one_column_left().apply_move(0);
    assert!(drawn.is_draw());
    assert!(matches!(
        choose_move(&drawn, 50),
        Err(SearchError::TerminalPosition)
    ));
}

#[test]
fn smaller_boards_are_supported() {
    let board = Board::new(4, 5).unwrap().apply_move(2);
    let mut rng = ChaCha20Rng::seed_from_u64(9);

    let column = choose_move_with_rng(&board, 60, &mut rng).unwrap();
    assert!(column < 5);
}
