// Copyright 2026 the Pagefoot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pagefoot::{MAX_SAFE_PAGE, StripParams, compute_visible_pages, render_footer};

/// Selection cost must not depend on the total page count; the small and
/// huge totals here should land within noise of each other.
fn strip_selection_benchmark(c: &mut Criterion) {
    c.bench_function("select_small_total", |b| {
        b.iter(|| {
            compute_visible_pages(StripParams::new(
                black_box(50),
                black_box(100),
                black_box(5),
                black_box(5),
            ))
        });
    });

    c.bench_function("select_huge_total", |b| {
        b.iter(|| {
            compute_visible_pages(StripParams::new(
                black_box(MAX_SAFE_PAGE / 2),
                black_box(MAX_SAFE_PAGE),
                black_box(5),
                black_box(5),
            ))
        });
    });
}

fn strip_render_benchmark(c: &mut Criterion) {
    c.bench_function("render_footer_widest", |b| {
        b.iter(|| {
            render_footer(
                black_box(MAX_SAFE_PAGE / 2),
                black_box(MAX_SAFE_PAGE),
                black_box(20),
                black_box(20),
            )
        });
    });
}

criterion_group!(benches, strip_selection_benchmark, strip_render_benchmark);
criterion_main!(benches);
