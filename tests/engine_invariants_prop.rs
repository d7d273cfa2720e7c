//! Property tests for the move resolver and the spawner.
//!
//! Invariants covered:
//! - Slides keep the total value on the board (every fusion rule is value-preserving).
//! - Slides never add tiles and never produce a value outside the denominations.
//! - Right/Up/Down agree with Left applied through reverse/transpose.
//! - A slide that changes nothing is rejected without a spawn.
//! - A spawn adds exactly one coin unless the board is full.

use coin_fusion::core::grid::Grid;
use coin_fusion::core::{merge_line, resolve_turn, shift, spawn, Board};
use coin_fusion::types::{is_valid_tile, Direction, Tile, DENOMINATIONS, STARTING_TILES};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tile() -> impl Strategy<Value = Tile> {
    prop_oneof![
        3 => Just(0u32),
        1 => proptest::sample::select(DENOMINATIONS.to_vec()),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform4(proptest::array::uniform4(tile())).prop_map(Board::from_rows)
}

fn direction() -> impl Strategy<Value = Direction> {
    proptest::sample::select(Direction::ALL.to_vec())
}

fn total(board: &Board) -> u64 {
    board.tiles().map(u64::from).sum()
}

proptest! {
    #[test]
    fn shift_preserves_total_value(b in board(), dir in direction()) {
        let moved = shift(&b, dir);
        prop_assert_eq!(total(&moved), total(&b));
        prop_assert!(moved.count_occupied() <= b.count_occupied());
        prop_assert!(moved.tiles().all(is_valid_tile));
    }

    #[test]
    fn shift_left_is_merge_line_per_row(b in board()) {
        let moved = shift(&b, Direction::Left);
        for (row, out) in b.rows().iter().zip(moved.rows()) {
            prop_assert_eq!(merge_line(*row), *out);
        }
    }

    #[test]
    fn directions_agree_through_transforms(b in board()) {
        prop_assert_eq!(
            shift(&b, Direction::Right),
            shift(&b.reverse_rows(), Direction::Left).reverse_rows()
        );
        prop_assert_eq!(
            shift(&b, Direction::Up),
            shift(&b.transpose(), Direction::Left).transpose()
        );
        prop_assert_eq!(
            shift(&b, Direction::Down),
            shift(&b.transpose(), Direction::Right).transpose()
        );
    }

    #[test]
    fn repeated_shift_keeps_value(b in board(), dir in direction()) {
        let once = shift(&b, dir);
        let twice = shift(&once, dir);
        // A second slide can only fuse coins produced by the first one
        prop_assert!(twice.count_occupied() <= once.count_occupied());
        prop_assert_eq!(total(&twice), total(&b));
    }

    #[test]
    fn turn_spawns_only_when_moved(b in board(), dir in direction(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = resolve_turn(&b, dir, &mut rng);
        if outcome.moved {
            let slid = shift(&b, dir);
            prop_assert_ne!(slid, b);
            prop_assert_eq!(outcome.board.count_occupied(), slid.count_occupied() + 1);
            let added = total(&outcome.board) - total(&slid);
            prop_assert!(STARTING_TILES.iter().any(|&t| u64::from(t) == added));
        } else {
            prop_assert_eq!(outcome.board, b);
        }
    }

    #[test]
    fn spawn_adds_one_coin_unless_full(b in board(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let next = spawn(&b, &mut rng);
        if b.is_full() {
            prop_assert_eq!(next, b);
        } else {
            prop_assert_eq!(next.count_occupied(), b.count_occupied() + 1);
            let changed: Vec<_> = b
                .tiles()
                .zip(next.tiles())
                .filter(|(before, after)| before != after)
                .collect();
            prop_assert_eq!(changed.len(), 1);
            prop_assert_eq!(changed[0].0, 0);
            prop_assert!(STARTING_TILES.contains(&changed[0].1));
        }
    }

    #[test]
    fn wide_lines_preserve_value(line in proptest::array::uniform7(tile())) {
        let merged = merge_line(line);
        let sum = |l: &[Tile; 7]| l.iter().map(|&t| u64::from(t)).sum::<u64>();
        prop_assert_eq!(sum(&merged), sum(&line));
        // Zeros only at the tail
        let first_zero = merged.iter().position(|&t| t == 0).unwrap_or(7);
        prop_assert!(merged[first_zero..].iter().all(|&t| t == 0));
    }

    #[test]
    fn wide_grid_directions_agree(rows in proptest::array::uniform5(proptest::array::uniform5(tile()))) {
        let g = Grid::<5>::from_rows(rows);
        prop_assert_eq!(
            shift(&g, Direction::Down),
            shift(&g.transpose(), Direction::Right).transpose()
        );
    }
}
