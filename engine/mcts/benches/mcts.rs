//! MCTS benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p mcts`
//!
//! These benchmarks measure:
//! - Full MCTS search with varying playout counts
//! - Search from different positions (opening, midgame, near-terminal)
//! - Single random rollouts
//! - Tree operations (best child, backpropagation)

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use games_connect4::{Board, Player};
use mcts::{rollout, MctsConfig, MctsSearch, MctsTree, MoveSelector, Rewards};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn play(moves: &[usize]) -> Board {
    moves
        .iter()
        .fold(Board::standard(), |b, &m| b.apply_move(m))
}

// =============================================================================
// Full MCTS Search Benchmarks
// =============================================================================

fn bench_mcts_search_playouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_search_playouts");

    for playouts in [50u32, 100, 250, 500, 1000] {
        group.throughput(Throughput::Elements(playouts as u64));
        group.bench_with_input(
            BenchmarkId::new("connect4", playouts),
            &playouts,
            |b, &playouts| {
                let config = MctsConfig::default().with_playouts(playouts);

                b.iter(|| {
                    let mut rng = ChaCha20Rng::seed_from_u64(42);
                    let mut search = MctsSearch::new(Board::standard(), config.clone()).unwrap();
                    black_box(search.run(&mut rng).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_mcts_game_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_game_phases");
    let config = MctsConfig::default().with_playouts(200);

    let positions = [
        ("opening", Board::standard()),
        ("midgame", play(&[3, 3, 2, 4, 4, 2, 5, 1, 1, 6])),
        // Player one wins at column 3
        ("near_terminal", play(&[0, 0, 1, 1, 2, 2])),
    ];

    for (name, board) in positions {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                let mut search = MctsSearch::new(board.clone(), config.clone()).unwrap();
                black_box(search.run(&mut rng).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_trials(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_trials");

    for trials in [1u32, 3, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, &trials| {
            let selector =
                MoveSelector::new(MctsConfig::default().with_playouts(100).with_trials(trials))
                    .unwrap();

            b.iter(|| {
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                black_box(selector.choose_move(&Board::standard(), &mut rng).unwrap())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Rollout Benchmarks
// =============================================================================

fn bench_rollout(c: &mut Criterion) {
    let rewards = Rewards::default();

    c.bench_function("rollout_from_empty", |b| {
        let board = Board::standard();
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        b.iter(|| black_box(rollout::simulate(&board, Player::One, &rewards, &mut rng)));
    });
}

// =============================================================================
// Tree Operation Benchmarks
// =============================================================================

fn bench_tree_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_tree_ops");

    group.bench_function("best_child_ucb1", |b| {
        let mut tree = MctsTree::new(Board::standard());
        for column in 0..7 {
            let id = tree.add_child(tree.root(), column, Board::standard().apply_move(column));
            let child = tree.get_mut(id);
            child.visit_count = (column as u32 + 1) * 10;
            child.reward = (column as f64 - 3.0) * 0.1 * child.visit_count as f64;
        }
        tree.get_mut(tree.root()).visit_count = 280;
        let mut rng = ChaCha20Rng::seed_from_u64(42);

        b.iter(|| black_box(tree.best_child(tree.root(), 1.414, &mut rng)));
    });

    group.bench_function("backpropagate_depth_8", |b| {
        b.iter_batched(
            || {
                let mut tree = MctsTree::new(Board::standard());
                let mut parent = tree.root();
                for column in 0..8 {
                    let column = column % 7;
                    let state = tree.get(parent).state.apply_move(column);
                    parent = tree.add_child(parent, column, state);
                }
                (tree, parent)
            },
            |(mut tree, leaf)| {
                tree.backpropagate(leaf, 1.0, Player::One);
                black_box(tree)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_mcts_search_playouts,
    bench_mcts_game_phases,
    bench_trials,
    bench_rollout,
    bench_tree_operations,
);

criterion_main!(benches);
