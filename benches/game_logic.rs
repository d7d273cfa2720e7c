use criterion::{black_box, criterion_group, criterion_main, Criterion};
use coin_fusion::core::{apply_move, merge_line, new_game, shift, spawn, Board, SimpleRng};
use coin_fusion::types::Direction;

fn busy_board() -> Board {
    Board::from_rows([
        [5, 5, 10, 0],
        [25, 0, 25, 5],
        [0, 50, 50, 10],
        [5, 10, 0, 5],
    ])
}

fn bench_merge_line(c: &mut Criterion) {
    c.bench_function("merge_line_4", |b| {
        b.iter(|| merge_line(black_box([5, 5, 25, 25])))
    });
}

fn bench_shift(c: &mut Criterion) {
    let board = busy_board();

    c.bench_function("shift_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(shift(black_box(&board), dir));
            }
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let board = busy_board();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("spawn", |b| b.iter(|| spawn(black_box(&board), &mut rng)));
}

fn bench_turn(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let start = new_game(&mut rng);

    c.bench_function("apply_move_cycle", |b| {
        b.iter(|| {
            let mut board = start;
            for dir in Direction::ALL {
                board = apply_move(&board, dir, &mut rng);
            }
            board
        })
    });
}

criterion_group!(benches, bench_merge_line, bench_shift, bench_spawn, bench_turn);
criterion_main!(benches);
