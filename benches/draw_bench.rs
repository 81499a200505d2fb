//! Benchmarks for plaintable drawing and compositing.

use criterion::{Criterion, criterion_group, criterion_main};
use plaintable::compose::{composite, composite_spec};
use plaintable::content::add_row_content;
use plaintable::prelude::*;
use std::hint::black_box;

fn benchmark_draw(c: &mut Criterion) {
    let spec = TableSpec::new(5, 4, 20);

    c.bench_function("draw_5x4_block", |b| {
        b.iter(|| {
            black_box(spec.draw().unwrap());
        });
    });
}

fn benchmark_composite(c: &mut Criterion) {
    let spec = TableSpec::new(5, 4, 20).origin(Point::new(0, 15));
    let block = spec.draw().unwrap();
    let canvas = Canvas::new(150, 150).unwrap();

    c.bench_function("composite_150x150", |b| {
        b.iter(|| {
            let mut target = canvas.clone();
            composite(&mut target, &block, spec.origin).unwrap();
            black_box(target);
        });
    });
}

fn benchmark_full_document(c: &mut Criterion) {
    let spec = TableSpec::new(5, 4, 20).origin(Point::new(0, 15)).indent(3);
    let header = ["Part_Number", "Description", "Quantity", "Unit_Price", "Total"];

    c.bench_function("invoice_document_render", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(150, 150).unwrap();
            composite_spec(&mut canvas, &spec).unwrap();
            add_row_content(&mut canvas, &spec, 0, &header).unwrap();
            black_box(canvas.render());
        });
    });
}

criterion_group!(
    benches,
    benchmark_draw,
    benchmark_composite,
    benchmark_full_document
);
criterion_main!(benches);
