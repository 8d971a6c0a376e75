use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use dsi_progress_logger::no_logging;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tree_analyzer::algo::Analysis;
use tree_analyzer::graph::Tree;
use tree_analyzer::parser::GraphReader;

const NUM_VERTICES: usize = 100_000;

/// A random recursive tree rooted at 0.
fn description(num_vertices: usize) -> String {
    let mut rng = StdRng::seed_from_u64(0);
    let mut children = vec![Vec::new(); num_vertices];
    for vertex in 1..num_vertices {
        children[rng.random_range(0..vertex)].push(vertex);
    }

    let mut description = format!("{num_vertices}\n");
    for list in children {
        if list.is_empty() {
            description.push('-');
        } else {
            let list: Vec<String> = list.iter().map(usize::to_string).collect();
            description.push_str(&list.join(" "));
        }
        description.push('\n');
    }
    description
}

fn parse(description: &str) -> Tree {
    let graph = GraphReader::new(description.as_bytes())
        .max_line_len(usize::MAX)
        .read(no_logging![])
        .unwrap();
    Tree::from_graph(graph, no_logging![]).unwrap()
}

fn bench_pipeline(c: &mut Criterion) {
    let description = description(NUM_VERTICES);
    let mut group = c.benchmark_group("tree_analyzer");

    group.bench_function("read", |b| {
        b.iter(|| {
            GraphReader::new(black_box(description.as_bytes()))
                .max_line_len(usize::MAX)
                .read(no_logging![])
                .unwrap()
        })
    });

    group.bench_function("validate", |b| {
        b.iter_batched(
            || {
                GraphReader::new(description.as_bytes())
                    .max_line_len(usize::MAX)
                    .read(no_logging![])
                    .unwrap()
            },
            |graph| Tree::from_graph(graph, no_logging![]).unwrap(),
            BatchSize::LargeInput,
        )
    });

    let tree = parse(&description);
    group.bench_function("analysis", |b| {
        b.iter(|| {
            Analysis::compute(
                &tree,
                black_box(NUM_VERTICES - 1),
                black_box(NUM_VERTICES / 2),
                no_logging![],
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
