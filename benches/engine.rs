use criterion::{black_box, criterion_group, criterion_main, Criterion};

use neon_drop::core::{Engine, Grid};
use neon_drop::types::{PieceKind, GRID_COLS, GRID_ROWS};

fn bench_soft_drop(c: &mut Criterion) {
    c.bench_function("soft_drop", |b| {
        b.iter_batched(
            || Engine::with_defaults(1),
            |mut engine| {
                black_box(engine.soft_drop());
                engine
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_shift_and_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("movement");
    group.bench_function("try_shift", |b| {
        let mut engine = Engine::with_defaults(2);
        let mut dir = 1i16;
        b.iter(|| {
            if !engine.try_shift(black_box(dir)) {
                dir = -dir;
            }
        })
    });
    group.bench_function("rotate", |b| {
        let mut engine = Engine::with_defaults(3);
        b.iter(|| black_box(engine.rotate()))
    });
    group.finish();
}

fn bench_hard_drop_cycle(c: &mut Criterion) {
    // Full drop, lock and respawn, the per-piece cost of a game.
    c.bench_function("hard_drop_lock_spawn", |b| {
        b.iter_batched(
            || Engine::with_defaults(4),
            |mut engine| {
                black_box(engine.hard_drop());
                engine
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_full_rows_tetris", |b| {
        b.iter_batched(
            || {
                let mut grid = Grid::new(GRID_COLS, GRID_ROWS);
                for y in GRID_ROWS - 4..GRID_ROWS {
                    grid.fill_row(y, PieceKind::I);
                }
                grid
            },
            |mut grid| {
                black_box(grid.clear_full_rows());
                grid
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_ghost(c: &mut Criterion) {
    c.bench_function("ghost_y", |b| {
        let engine = Engine::with_defaults(5);
        b.iter(|| black_box(engine.ghost_y()))
    });
}

criterion_group!(
    benches,
    bench_soft_drop,
    bench_shift_and_rotate,
    bench_hard_drop_cycle,
    bench_clear_four_rows,
    bench_ghost
);
criterion_main!(benches);
