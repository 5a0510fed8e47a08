// SPDX-License-Identifier: MPL-2.0
use coffee_wallet::ui::animation::SpringConfig;
use coffee_wallet::ui::sheet::{ReleaseHeuristic, SheetController, SheetGeometry};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn controller() -> SheetController {
    let geometry = SheetGeometry {
        min_height: 80.0,
        max_height: 580.0,
        open_width: 380.0,
        closed_width: 256.0,
        max_backdrop_opacity: 1.0,
    };
    SheetController::new(geometry, ReleaseHeuristic::PROJECTED, SpringConfig::sheet())
}

fn sheet_frames_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_frames");

    group.bench_function("drag_60_frames", |b| {
        b.iter(|| {
            let mut sheet = controller();
            sheet.drag_begin();
            for frame in 0..60 {
                sheet.drag_update(black_box(-(frame as f32) * 5.0));
                black_box((sheet.width(), sheet.backdrop_opacity()));
            }
            sheet.drag_end(-300.0, -200.0)
        });
    });

    group.bench_function("settle_to_rest", |b| {
        b.iter(|| {
            let mut sheet = controller();
            sheet.tap_header();
            let mut frames = 0_u32;
            while sheet.tick(black_box(FRAME)) {
                black_box(sheet.horizontal_offset());
                frames += 1;
            }
            frames
        });
    });

    group.finish();
}

criterion_group!(benches, sheet_frames_benchmark);
criterion_main!(benches);
