use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spath::algorithm::dijkstra::ShortestPaths;
use spath::graph::generators::{generate_grid, generate_random};
use spath::{DecreaseKeyHeap, VertexId};

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    let mut rng = StdRng::seed_from_u64(7);

    for &n in &[1_000usize, 10_000] {
        let (graph, weights) = generate_random(n, 4.0, 100, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("random", n), &n, |b, _| {
            b.iter(|| {
                let mut engine = ShortestPaths::new(&graph, &weights, VertexId(0)).unwrap();
                engine.run().unwrap();
                black_box(engine.distance(VertexId(n - 1)).unwrap())
            })
        });
    }

    let (grid, grid_weights) = generate_grid(100, 100, 10, &mut rng).unwrap();
    group.bench_function("grid_100x100", |b| {
        b.iter(|| {
            let mut engine = ShortestPaths::new(&grid, &grid_weights, VertexId(0)).unwrap();
            engine.run().unwrap();
            black_box(engine.return_length(VertexId(9_999)).unwrap())
        })
    });

    group.finish();
}

fn bench_heap(c: &mut Criterion) {
    c.bench_function("heap_insert_decrease_extract_10k", |b| {
        b.iter(|| {
            let mut heap = DecreaseKeyHeap::with_capacity(10_000);
            let handles: Vec<_> = (0..10_000u64).map(|i| heap.insert(1_000_000 + i).unwrap()).collect();
            for (i, handle) in handles.iter().enumerate().step_by(3) {
                heap.decrease(*handle, i as u64).unwrap();
            }
            while let Ok(value) = heap.extract_min() {
                black_box(value);
            }
        })
    });
}

criterion_group!(benches, bench_dijkstra, bench_heap);
criterion_main!(benches);
