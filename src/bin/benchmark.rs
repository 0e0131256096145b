use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use spath::algorithm::dijkstra::{RunStats, ShortestPaths};
use spath::graph::generators::generate_random;
use spath::graph::{DirectedGraph, EdgeWeights, Graph, VertexId};
use std::env;
use std::time::{Duration, Instant};

// Runs one Dijkstra from `source` and returns the elapsed time and counters
fn benchmark_run(graph: &DirectedGraph, weights: &EdgeWeights<u64>, source: VertexId) -> spath::Result<(Duration, RunStats, usize)> {
    let start = Instant::now();
    let mut engine = ShortestPaths::new(graph, weights, source)?;
    engine.run()?;
    let duration = start.elapsed();

    let mut reachable = 0;
    for v in graph.vertices() {
        if engine.distance(v)?.is_finite() {
            reachable += 1;
        }
    }

    Ok((duration, engine.stats(), reachable))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: benchmark [edge_factor] [seed] [sources_per_sweep]
    let args: Vec<String> = env::args().collect();
    let edge_factor: f64 = args.get(1).map(|a| a.parse()).transpose()?.unwrap_or(2.0);
    let seed: u64 = args.get(2).map(|a| a.parse()).transpose()?.unwrap_or(42);
    let sweep_sources: usize = args.get(3).map(|a| a.parse()).transpose()?.unwrap_or(16);

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    println!("=====================================================");
    println!("Benchmark: Dijkstra with decrease-key binary heap");
    println!("Edge factor: {} edges per vertex (on average), seed {}", edge_factor, seed);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        info!("Generating random graph with {} vertices", size);
        let (graph, weights) = generate_random(size, edge_factor, 100, &mut rng)?;
        println!("\nGraph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (single_time, stats, reachable) = benchmark_run(&graph, &weights, VertexId(0))?;
        println!("  - Single source: {} reachable vertices in {:?}", reachable, single_time);
        println!(
            "  - Heap: {} inserts, {} extractions, {} decreases, {} swaps",
            stats.heap.inserts, stats.heap.extractions, stats.heap.decreases, stats.heap.swaps
        );

        // Independent engines over the same immutable graph
        let sources: Vec<VertexId> = (0..sweep_sources.min(size)).map(|i| VertexId(i * size / sweep_sources.max(1))).collect();
        let sweep_start = Instant::now();
        let sweep = sources
            .par_iter()
            .map(|&source| benchmark_run(&graph, &weights, source))
            .collect::<spath::Result<Vec<_>>>()?;
        let sweep_time = sweep_start.elapsed();
        println!("  - Parallel sweep: {} sources in {:?}", sweep.len(), sweep_time);

        results.push((size, graph.edge_count(), single_time, sweep_time, sweep.len()));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Edges", "Single (ms)", "Sweep (ms)", "Sources");
    println!("-----------------------------------------------------");

    for (size, edges, single_time, sweep_time, sources) in &results {
        println!(
            "{:<10} | {:<10} | {:<15.2} | {:<15.2} | {:<10}",
            size,
            edges,
            single_time.as_secs_f64() * 1000.0,
            sweep_time.as_secs_f64() * 1000.0,
            sources
        );
    }

    Ok(())
}
