//! Benchmarks for unadf rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic ADF documents at various sizes and
//! nesting depths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use unadf::{Mark, MarkdownRenderer, Node, RenderOptions};

/// Creates a synthetic document with the given number of paragraphs,
/// mixing marked text, links, and list blocks.
fn create_test_document(paragraph_count: usize) -> Node {
    let mut blocks = Vec::with_capacity(paragraph_count + 2);

    blocks.push(
        Node::container("heading", vec![Node::text("Benchmark Document")]).with_attr("level", 1),
    );

    for i in 0..paragraph_count {
        blocks.push(Node::container(
            "paragraph",
            vec![
                Node::text(format!("This is paragraph {i} with ")),
                Node::text("emphasized").with_marks(vec![Mark::em()]),
                Node::text(" and "),
                Node::text("bold").with_marks(vec![Mark::strong()]),
                Node::text(" content for benchmarking purposes."),
            ],
        ));
    }

    blocks.push(Node::container(
        "bulletList",
        (0..5)
            .map(|i| {
                Node::container(
                    "listItem",
                    vec![Node::container(
                        "paragraph",
                        vec![Node::text(format!("item {i}"))],
                    )],
                )
            })
            .collect(),
    ));

    Node::container("doc", blocks)
}

/// Creates a chain of nested lists `depth` levels deep.
fn create_nested_lists(depth: usize) -> Node {
    let mut node = Node::container(
        "listItem",
        vec![Node::container(
            "paragraph",
            vec![Node::text("innermost")],
        )],
    );
    for _ in 0..depth {
        node = Node::container(
            "bulletList",
            vec![Node::container("listItem", vec![node])],
        );
    }
    node
}

/// Benchmark flat document rendering at various sizes.
fn bench_flat_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_rendering");

    for para_count in [10, 100, 500, 1000].iter() {
        let document = create_test_document(*para_count);
        let renderer = MarkdownRenderer::new(RenderOptions::default());

        group.throughput(Throughput::Elements(*para_count as u64));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", para_count),
            &document,
            |b, document| {
                b.iter(|| renderer.render(black_box(document)));
            },
        );
    }

    group.finish();
}

/// Benchmark nested list rendering, including past the recursion ceiling.
fn bench_nested_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_rendering");

    for depth in [2, 5, 20].iter() {
        let document = create_nested_lists(*depth);
        let renderer = MarkdownRenderer::new(RenderOptions::default());

        group.bench_with_input(
            BenchmarkId::new("depth", depth),
            &document,
            |b, document| {
                b.iter(|| renderer.render(black_box(document)));
            },
        );
    }

    group.finish();
}

/// Benchmark full conversion including input classification.
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let document = create_test_document(100);
    let value = serde_json::to_value(&document).unwrap();

    group.bench_function("classify_and_render", |b| {
        b.iter(|| unadf::convert(black_box(&value)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_flat_rendering,
    bench_nested_rendering,
    bench_conversion
);
criterion_main!(benches);
