// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the page's hot state machines.
//!
//! Measures:
//! - Lightbox navigation (next/previous over the catalog)
//! - A full reveal-observer sweep over a scroll session
//! - Carousel layout resolution and autoplay ticks

use criterion::{criterion_group, criterion_main, Criterion};
use iced_vitrine::motion::{ObserverOptions, Region, RevealObserver, Viewport};
use iced_vitrine::showcase::carousel::{layout_for_width, Carousel};
use iced_vitrine::showcase::{page_height, Lightbox, ProjectCollection, SectionId};
use std::hint::black_box;
use std::time::Instant;

/// Benchmark lightbox navigation over the sample catalog.
fn bench_lightbox_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase_navigation");

    let collection = ProjectCollection::sample();
    let len = collection.len();

    group.bench_function("lightbox_lap", |b| {
        b.iter(|| {
            let mut lightbox = Lightbox::new();
            lightbox.open(0, len);
            for _ in 0..len {
                lightbox.next(len);
            }
            for _ in 0..len {
                lightbox.previous(len);
            }
            black_box(lightbox.current());
        });
    });

    group.finish();
}

/// Benchmark a reveal sweep across the entire page.
fn bench_reveal_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase_navigation");

    group.bench_function("reveal_sweep", |b| {
        b.iter(|| {
            let mut reveal = RevealObserver::new(ObserverOptions::entrance_for_width(1280.0));
            for section in SectionId::ALL {
                reveal.observe(Region::new(section.anchor_offset(), section.design_height()));
            }

            let mut offset = 0.0;
            while offset < page_height() {
                black_box(reveal.on_viewport(Viewport::new(offset, 760.0)));
                offset += 40.0; // wheel-notch sized steps
            }
            black_box(reveal.observing_count());
        });
    });

    group.finish();
}

/// Benchmark carousel breakpoint resolution and autoplay ticking.
fn bench_carousel(c: &mut Criterion) {
    let mut group = c.benchmark_group("showcase_navigation");

    group.bench_function("layout_for_width", |b| {
        b.iter(|| {
            for width in [320.0, 640.0, 768.0, 1024.0, 1440.0] {
                black_box(layout_for_width(black_box(width)));
            }
        });
    });

    group.bench_function("autoplay_ticks", |b| {
        let now = Instant::now();
        b.iter(|| {
            let mut carousel = Carousel::new(6, 1280.0);
            carousel.start_autoplay(now);
            for i in 0..100u32 {
                black_box(carousel.tick(now + std::time::Duration::from_millis(u64::from(i) * 100)));
            }
            black_box(carousel.current());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lightbox_navigation,
    bench_reveal_sweep,
    bench_carousel
);
criterion_main!(benches);
