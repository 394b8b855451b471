use campus_core::{
    graph::{node_index, Graph, GraphBuilder},
    search::{dijkstra::Dijkstra, heap_dijkstra::HeapDijkstra},
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

criterion_group!(benches, reference_campus, linear_vs_heap);
criterion_main!(benches);

fn gen_rand_graph(number_nodes: usize) -> Graph {
    let mut rng = rand::thread_rng();

    // 2.5 edges per node on average
    let number_edges: usize = (number_nodes as f32 * 2.5) as usize;

    let mut b = GraphBuilder::with_capacity(number_nodes, number_edges);

    for i in 0..number_nodes {
        b.add_location(i, &format!("L{i}")).unwrap();
    }

    for _ in 0..number_edges {
        let source = rng.gen_range(0..number_nodes);
        let target = rng.gen_range(0..number_nodes);
        if source == target {
            continue;
        }
        let weight = rng.gen_range(1..500);
        b.add_edge(source, target, weight).unwrap();
    }

    b.build()
}

fn reference_campus(c: &mut Criterion) {
    let campus = Graph::reference().unwrap();

    c.bench_with_input(
        BenchmarkId::new("dijkstra_on_campus", "tuck_shop_to_quick_bite"),
        &campus,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                dijkstra.search(black_box(node_index(0)), black_box(node_index(14)))
            })
        },
    );
}

fn linear_vs_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_vs_heap");
    for size in [23, 100, 1000].iter() {
        let g = gen_rand_graph(*size);
        let mut rng = rand::thread_rng();
        let s = node_index(rng.gen_range(0..*size));
        let t = node_index(rng.gen_range(0..*size));

        group.bench_with_input(BenchmarkId::new("linear", size), &g, |b, g| {
            b.iter(|| Dijkstra::new(g).search(s, t))
        });
        group.bench_with_input(BenchmarkId::new("heap", size), &g, |b, g| {
            b.iter(|| HeapDijkstra::new(g).search(s, t))
        });
    }
    group.finish();
}
