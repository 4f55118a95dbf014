use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_runner::core::{GameSession, MenuStateMachine, SessionConfig, SessionSnapshot};
use tui_runner::term::{encode_frame_into, FrameBuffer, SceneView, Viewport};
use tui_runner::types::{InputEvent, TICK_MS};

const T: u64 = TICK_MS as u64;

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default(), 0);
    let mut now = 0;

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            now += T;
            session.tick(black_box(now), &[]);
        })
    });
}

fn bench_tick_with_jumps(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default(), 0);
    let mut now = 0;
    let jump = [InputEvent::Jump];

    c.bench_function("session_tick_jumping", |b| {
        b.iter(|| {
            now += T;
            session.tick(black_box(now), &jump);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default(), 0);
    for i in 1..=200 {
        session.tick(i * T, &[InputEvent::Jump]);
    }
    let mut snap = SessionSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut menu = MenuStateMachine::default();
    menu.tick(T, &[InputEvent::Confirm]);
    for i in 2..=200 {
        menu.tick(i * T, &[InputEvent::Jump]);
    }
    let snap = menu.session().map(|s| s.snapshot());
    let view = SceneView::new();
    let mut fb = FrameBuffer::new(120, 40);
    let prev = view.render(&menu.snapshot(), snap.as_ref(), Viewport::new(120, 40));
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("render_and_diff_120x40", |b| {
        b.iter(|| {
            view.render_into(&menu.snapshot(), snap.as_ref(), Viewport::new(120, 40), &mut fb);
            out.clear();
            encode_frame_into(Some(&prev), black_box(&fb), &mut out).ok();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_tick_with_jumps,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
