use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{can_place, Board, GameSession};
use blockfall::types::{GameAction, PieceKind};

fn bench_fall_step(c: &mut Criterion) {
    c.bench_function("fall_until_game_over", |b| {
        b.iter(|| {
            let mut session = GameSession::new(black_box(12345));
            while !session.game_over() {
                session.fall();
            }
            session.score()
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_full_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(13, 20);
            for y in 16..20 {
                board.fill_row(y, PieceKind::I);
            }
            board.clear_full_rows()
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let board = Board::new(13, 20);
    c.bench_function("can_place_sweep", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for kind in PieceKind::ALL {
                for rot in 0..4 {
                    for x in 0..13 {
                        if can_place(&board, kind, rot, black_box(x), 10) {
                            hits += 1;
                        }
                    }
                }
            }
            hits
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    c.bench_function("shift_left_right", |b| {
        let mut session = GameSession::new(777);
        b.iter(|| {
            session.apply(GameAction::MoveLeft);
            session.apply(GameAction::MoveRight);
        })
    });
}

criterion_group!(
    benches,
    bench_fall_step,
    bench_line_clear,
    bench_can_place,
    bench_shift
);
criterion_main!(benches);
