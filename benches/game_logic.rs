use criterion::{black_box, criterion_group, criterion_main, Criterion};
use brick_tetris::core::{shape_for, Board, GameSession, GameSnapshot};
use brick_tetris::term::{FrameBuffer, GameView, Viewport};
use brick_tetris::types::{GameCommand, GamePhase, TetrominoKind};

fn running_session() -> GameSession {
    let mut session = GameSession::seeded(12345);
    session.start();
    session
}

fn bench_tick(c: &mut Criterion) {
    let mut session = running_session();

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if session.phase() != GamePhase::Playing {
                session = running_session();
            }
            session.tick();
            session.drain_events().for_each(drop);
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, 1);
                }
            }
            black_box(board.clear_full_lines());
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, 2);
    }
    let t = shape_for(TetrominoKind::T);

    c.bench_function("collision", |b| {
        b.iter(|| black_box(board.collision(black_box(&t), 4, 18)))
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut session = running_session();

    c.bench_function("move_rotate", |b| {
        b.iter(|| {
            session.apply(GameCommand::MoveRight);
            session.apply(GameCommand::Rotate);
            session.apply(GameCommand::MoveLeft);
            session.drain_events().for_each(drop);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = running_session();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collision,
    bench_move_and_rotate,
    bench_render
);
criterion_main!(benches);
