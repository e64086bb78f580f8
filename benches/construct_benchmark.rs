//! Benchmarks for prosetree construction performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prosetree::builtin::{blocks, inliners, paragraph, text};
use prosetree::{children, Child, DocumentBuilder, Element, Props};

/// Builds a blocks root with `count` two-run paragraphs.
fn build_wide(count: usize) -> prosetree::Result<Element> {
    let paragraph = paragraph();
    let text = text();
    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let run = text.with_children(format!("run {}", i))?;
        entries.push(Child::from(paragraph.with_children(children!["Paragraph ", run])?));
    }
    blocks().with_children(entries)
}

/// Builds `depth` nested inliner groups around a single text leaf.
fn build_deep(depth: usize) -> prosetree::Result<Element> {
    let group = inliners();
    let mut current = text().with_children("leaf")?;
    for _ in 0..depth {
        current = group.with_children(current)?;
    }
    paragraph().with_children(current)
}

/// Benchmark wide trees.
fn bench_wide_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_tree");

    for count in [10, 100, 1000].iter() {
        group.bench_function(format!("{}_paragraphs", count), |b| {
            b.iter(|| build_wide(black_box(*count)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark deep trees.
fn bench_deep_trees(c: &mut Criterion) {
    c.bench_function("deep_tree_200", |b| {
        b.iter(|| build_deep(black_box(200)).unwrap());
    });
}

/// Benchmark a document with many references embedded twice each.
fn bench_referenced_document(c: &mut Criterion) {
    let names: Vec<String> = (0..50).map(|i| format!("ref{}", i)).collect();
    let paragraph = paragraph();

    c.bench_function("document_50_references", |b| {
        b.iter(|| {
            DocumentBuilder::new()
                .references(names.iter().map(|name| (name.as_str(), &paragraph)))
                .build(|refs| {
                    let mut entries = Vec::new();
                    for name in &names {
                        let bound = paragraph.call(
                            Props::new().children(name.as_str()).bind_to(&refs[name.as_str()]),
                        )?;
                        entries.push(Child::from(bound));
                        entries.push(Child::from(&refs[name.as_str()]));
                    }
                    blocks().with_children(entries)
                })
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_wide_trees,
    bench_deep_trees,
    bench_referenced_document,
);
criterion_main!(benches);
