use criterion::{black_box, criterion_group, criterion_main, Criterion};
use duel_tetris::core::{Playfield, Session, SessionConfig};
use duel_tetris::input::InputDecoder;
use duel_tetris::types::{PlayerAction, PlayerId, ESC};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::new(12345));
    let mut now = 0u64;

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            now += 1_000_000;
            if !session.is_running() {
                session = Session::new(SessionConfig::new(12345));
                now = 1_000_000;
            }
            session.tick(black_box(now));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut playfield = Playfield::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    playfield.set_cell(x, y, 3);
                }
            }
            black_box(playfield.process_complete_lines());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::new(12345));

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if !session.is_running() {
                session = Session::new(SessionConfig::new(12345));
            }
            session.apply_action(PlayerId::One, PlayerAction::HardDrop, 0);
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::new(12345));

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            session.apply_action(PlayerId::Two, PlayerAction::MoveLeft, 0);
            session.apply_action(PlayerId::Two, PlayerAction::Rotate, 0);
            session.apply_action(PlayerId::Two, PlayerAction::MoveRight, 0);
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut decoder = InputDecoder::default();
    let bytes = [ESC, b'[', b'A', b'd', b'G', b'4', b'p', ESC, b'[', b'D'];

    c.bench_function("decode_bytes", |b| {
        b.iter(|| black_box(decoder.decode_all(black_box(&bytes))))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_move_and_rotate,
    bench_decode
);
criterion_main!(benches);
