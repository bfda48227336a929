//! Benchmarks for fluidsheet clone and parse performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic stylesheets with a fixed rule mix.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fluidsheet::{clone_document, parse_css, CssomDocument, CssomStyleSheet};

/// Creates a synthetic stylesheet with `block_count` repetitions of a
/// baseline block followed by a media block.
fn create_test_css(block_count: usize) -> String {
    let mut css = String::from("@media (min-width: 360px) {}\n");

    for i in 0..block_count {
        css.push_str(&format!(
            ".item-{i} {{ font-size: 1rem; padding: 1rem 2rem; color: #333; display: block }}\n\
             .item-{i} h2 {{ margin: 0 0 1rem; line-height: 1.2 }}\n"
        ));
        css.push_str(&format!(
            "@media (min-width: {}px) {{ .item-{i} {{ font-size: 1.25rem; gap: 2rem }} }}\n",
            480 + (i % 8) * 120
        ));
    }

    css
}

/// Benchmark parsing CSS text into the in-memory object model.
fn bench_cssom_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("cssom_parsing");

    for block_count in [10, 100, 1000].iter() {
        let css = create_test_css(*block_count);

        group.bench_function(format!("{}_blocks", block_count), |b| {
            b.iter(|| CssomStyleSheet::parse(black_box(&css)));
        });
    }

    group.finish();
}

/// Benchmark cloning and parsing an already built document.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for block_count in [10, 100, 1000].iter() {
        let document =
            CssomDocument::new().with_style_sheet(CssomStyleSheet::parse(&create_test_css(*block_count)));

        group.bench_function(format!("clone_{}_blocks", block_count), |b| {
            b.iter(|| clone_document(black_box(&document)));
        });

        let clone = clone_document(&document);
        group.bench_function(format!("parse_{}_blocks", block_count), |b| {
            b.iter(|| parse_css(black_box(&clone)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cssom_parsing, bench_pipeline);
criterion_main!(benches);
