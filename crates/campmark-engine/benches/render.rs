use campmark_engine::{render, to_html};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
mod common;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let content = common::generate_post(100);
    group.bench_function("tree", |b| {
        b.iter(|| black_box(render(black_box(&content), false)));
    });

    let tree = render(&content, true);
    group.bench_function("html", |b| {
        b.iter(|| black_box(to_html(black_box(&tree))));
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
