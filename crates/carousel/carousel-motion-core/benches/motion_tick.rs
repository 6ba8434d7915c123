use carousel_motion_core::{
    CarouselLayout, CellId, CellTrack, ManualFrames, MotionConfig, MotionEngine, Slide,
    TrackGeometry,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn wrapped_engine(cells: usize) -> MotionEngine {
    let extent = 250.0;
    let total = extent * cells as f64;
    let mut eng = MotionEngine::new(MotionConfig {
        wrap_around: true,
        ..MotionConfig::default()
    });
    let half = cells / 2;
    let track = CellTrack::from_extents(std::iter::repeat(extent).take(cells)).with_shift_cells(
        (half..cells).rev().map(|i| CellId(i as u32)).collect(),
        (0..half).map(|i| CellId(i as u32)).collect(),
    );
    eng.set_layout(CarouselLayout {
        geometry: TrackGeometry {
            slideable_extent: total,
            cursor_offset: 0.0,
            viewport_extent: 1000.0,
            slides_extent: total,
        },
        track,
        slides: (0..cells)
            .map(|i| Slide {
                target: i as f64 * extent,
            })
            .collect(),
        selected_index: 0,
    })
    .expect("bench layout");
    eng
}

fn bench_release_to_settle(c: &mut Criterion) {
    c.bench_function("release_to_settle_32_cells", |b| {
        b.iter(|| {
            let mut eng = wrapped_engine(32);
            let mut frames = ManualFrames::default();
            eng.set_position(-600.0);
            eng.start_animation(&mut frames);
            while frames.take_pending() {
                black_box(eng.on_frame(&mut frames));
            }
        })
    });
}

fn bench_drag_tick(c: &mut Criterion) {
    let mut eng = wrapped_engine(32);
    let mut frames = ManualFrames::default();
    eng.set_pointer_down(true);
    eng.start_animation(&mut frames);
    let mut target = 0.0;
    c.bench_function("drag_tick_32_cells", |b| {
        b.iter(|| {
            target -= 7.0;
            eng.set_drag_target(target);
            frames.take_pending();
            black_box(eng.on_frame(&mut frames));
        })
    });
}

criterion_group!(benches, bench_release_to_settle, bench_drag_tick);
criterion_main!(benches);
