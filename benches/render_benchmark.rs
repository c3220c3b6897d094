//! Benchmarks for classification and rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use harvardcv::render::{render, to_fragment, to_word_document};
use harvardcv::{BlockKind, Classifier, Field, RenderOptions, ResumeRecord};

/// A record whose experience block repeats the sample jobs `copies` times.
fn create_record(copies: usize) -> ResumeRecord {
    let example = ResumeRecord::example();
    let experience = vec![example.experience.as_str(); copies].join("\n\n");
    example.with(Field::Experience, experience)
}

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::default();
    let block = create_record(20).experience;

    c.bench_function("classify_experience_block", |b| {
        b.iter(|| classifier.classify_block(BlockKind::Experience, black_box(&block)))
    });
}

fn bench_render(c: &mut Criterion) {
    let options = RenderOptions::default();
    let mut group = c.benchmark_group("render");

    for copies in [1, 10, 50] {
        let record = create_record(copies);
        group.bench_function(format!("fragment_{}", copies), |b| {
            b.iter(|| {
                let doc = render(black_box(&record), &options);
                to_fragment(&doc, &options)
            })
        });
        group.bench_function(format!("word_document_{}", copies), |b| {
            b.iter(|| {
                let doc = render(black_box(&record), &options);
                to_word_document(&doc, &options)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_render);
criterion_main!(benches);
