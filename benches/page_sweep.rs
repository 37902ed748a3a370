//! Page change benchmarks.
//!
//! Measures a full sweep across every page and the cost of drawing a frame
//! mid-animation, for small and large page counts.
//!
//! Run with: cargo bench --bench page_sweep

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pagedots::state::PageControl;
use pagedots::view::{ColorConfig, PageIndicator};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::time::Duration;

const PAGE_COUNTS: [usize; 3] = [20, 1_000, 100_000];

fn control(pages: usize) -> PageControl {
    let mut control = PageControl::new();
    control.set_number_of_pages(pages);
    control
}

/// Step from the first page to the last one and back.
fn benchmark_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_sweep");

    for pages in PAGE_COUNTS {
        group.bench_with_input(BenchmarkId::new("pages", pages), &pages, |b, &pages| {
            b.iter_batched(
                || control(pages),
                |mut control| {
                    for page in 1..pages {
                        control.set_current_page(page);
                    }
                    for page in (0..pages).rev() {
                        control.set_current_page(page);
                    }
                    black_box(control.offset())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Tick halfway through a transition and draw the strip.
fn benchmark_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("animated_frame");
    let area = Rect::new(0, 0, 20, 1);

    for pages in PAGE_COUNTS {
        group.bench_with_input(BenchmarkId::new("pages", pages), &pages, |b, &pages| {
            b.iter_batched(
                || {
                    let mut control = control(pages);
                    for page in 1..10.min(pages) {
                        control.set_current_page(page);
                    }
                    control
                },
                |mut control| {
                    control.tick(Duration::from_millis(16));
                    let mut buf = Buffer::empty(area);
                    PageIndicator::new(&control)
                        .colors(ColorConfig::disabled())
                        .render(area, &mut buf);
                    black_box(buf)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sweep, benchmark_frame);
criterion_main!(benches);
