use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spath::algorithm::dijkstra::ShortestPaths;
use spath::graph::generators::{generate_grid, generate_random};
use spath::graph::{DirectedGraph, EdgeWeights, Graph, MutableGraph};
use spath::{BellmanFord, Dijkstra, Distance, EdgeId, Error, ShortestPathAlgorithm, VertexId};

const A: VertexId = VertexId(0);
const B: VertexId = VertexId(1);
const C: VertexId = VertexId(2);

// Builds a graph with `n` vertices from (from, to, weight) triples.
// Edge i of the list gets EdgeId(i).
fn build(n: usize, edges: &[(usize, usize, u64)]) -> (DirectedGraph, EdgeWeights<u64>) {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut weights = EdgeWeights::new();
    for &(from, to, weight) in edges {
        let id = graph.add_edge(VertexId(from), VertexId(to)).unwrap();
        weights.set(id, weight);
    }
    (graph, weights)
}

// Checks that the path is a contiguous chain from `source` to `target`
fn assert_chain(path: &[spath::Edge], source: VertexId, target: VertexId) {
    if path.is_empty() {
        assert_eq!(source, target, "Only the source has an empty path");
        return;
    }
    assert_eq!(path[0].from, source, "Path should start at source");
    assert_eq!(path[path.len() - 1].to, target, "Path should end at target");
    for pair in path.windows(2) {
        assert_eq!(pair[0].to, pair[1].from, "Path should be contiguous");
    }
}

#[test]
fn test_triangle_graph() {
    let (graph, weights) = build(3, &[(0, 1, 1), (0, 2, 4), (1, 2, 1)]);
    let mut engine = ShortestPaths::new(&graph, &weights, A).unwrap();
    engine.run().unwrap();

    assert_eq!(engine.distance(B).unwrap(), Distance::Finite(1));
    assert_eq!(engine.distance(C).unwrap(), Distance::Finite(2));
    assert_eq!(engine.return_length(B).unwrap(), 1);
    assert_eq!(engine.return_length(C).unwrap(), 2);

    let path: Vec<EdgeId> = engine.return_path(C).unwrap().iter().map(|e| e.id).collect();
    assert_eq!(path, vec![EdgeId(0), EdgeId(2)]);
}

#[test]
fn test_source_has_empty_path() {
    let (graph, weights) = build(3, &[(0, 1, 1), (1, 0, 1)]);
    let mut engine = ShortestPaths::new(&graph, &weights, A).unwrap();
    engine.run().unwrap();

    assert!(engine.return_path(A).unwrap().is_empty());
    assert_eq!(engine.return_length(A).unwrap(), 0);
    assert_eq!(engine.distance(A).unwrap(), Distance::Finite(0));
    assert_eq!(engine.parent_edge(A).unwrap(), None);
}

#[test]
fn test_disconnected_vertex_is_unreachable() {
    let (graph, weights) = build(2, &[]);
    let mut engine = ShortestPaths::new(&graph, &weights, A).unwrap();
    engine.run().unwrap();

    assert_eq!(engine.return_path(B), Err(Error::Unreachable(1)));
    assert_eq!(engine.return_length(B), Err(Error::Unreachable(1)));
    assert!(engine.return_path(B).unwrap_err().is_unreachable());
    assert_eq!(engine.distance(B).unwrap(), Distance::Infinite);
    assert_eq!(engine.parent_edge(B).unwrap(), None);
}

#[test]
fn test_tie_keeps_first_edge_reaching_minimum() {
    // A->B (2), A->C (1), C->B (1): both routes reach B at distance 2
    let (graph, weights) = build(3, &[(0, 1, 2), (0, 2, 1), (2, 1, 1)]);

    let mut parents = Vec::new();
    for _ in 0..3 {
        let mut engine = ShortestPaths::new(&graph, &weights, A).unwrap();
        engine.run().unwrap();
        assert_eq!(engine.distance(B).unwrap(), Distance::Finite(2));
        parents.push(engine.parent_edge(B).unwrap());
    }

    // A is settled first, so A->B is recorded before C->B offers an equal candidate
    assert_eq!(parents[0], Some(EdgeId(0)));
    assert!(parents.iter().all(|p| *p == parents[0]), "Repeated runs should agree");
}

#[test]
fn test_parallel_and_zero_weight_edges() {
    // two parallel A->B edges, then a free B->C edge
    let (graph, weights) = build(3, &[(0, 1, 5), (0, 1, 3), (1, 2, 0)]);
    let mut engine = ShortestPaths::new(&graph, &weights, A).unwrap();
    engine.run().unwrap();

    let path: Vec<EdgeId> = engine.return_path(C).unwrap().iter().map(|e| e.id).collect();
    assert_eq!(path, vec![EdgeId(1), EdgeId(2)]);
    assert_eq!(engine.return_length(C).unwrap(), 3);
}

#[test]
fn test_self_loops_are_ignored() {
    let (graph, weights) = build(2, &[(0, 0, 1), (0, 1, 4), (1, 1, 0)]);
    let mut engine = ShortestPaths::new(&graph, &weights, A).unwrap();
    engine.run().unwrap();

    assert_eq!(engine.return_length(B).unwrap(), 4);
    assert_eq!(engine.stats().extractions, 2);
}

#[test]
fn test_overflowing_path_is_unreachable() {
    let mut graph = DirectedGraph::with_capacity(3);
    let mut weights: EdgeWeights<u8> = EdgeWeights::new();
    let ab = graph.add_edge(A, B).unwrap();
    let bc = graph.add_edge(B, C).unwrap();
    weights.set(ab, 200);
    weights.set(bc, 100);

    let mut engine = ShortestPaths::new(&graph, &weights, A).unwrap();
    engine.run().unwrap();

    assert_eq!(engine.distance(B).unwrap(), Distance::Finite(200));
    assert_eq!(engine.distance(C).unwrap(), Distance::Infinite);
    assert_eq!(engine.return_path(C), Err(Error::Unreachable(2)));
}

#[test]
fn test_grid_distances_are_manhattan() {
    let mut rng = StdRng::seed_from_u64(1);
    let (graph, weights) = generate_grid(10, 10, 1, &mut rng).unwrap();
    let mut engine = ShortestPaths::new(&graph, &weights, VertexId(0)).unwrap();
    engine.run().unwrap();

    for y in 0..10 {
        for x in 0..10 {
            let v = VertexId(y * 10 + x);
            assert_eq!(engine.return_length(v).unwrap(), (x + y) as u64);
            assert_chain(&engine.return_path(v).unwrap(), VertexId(0), v);
        }
    }
}

#[test]
fn test_matches_bellman_ford_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..25 {
        let n = rng.gen_range(2..60);
        let edge_factor = rng.gen_range(0.5..4.0);
        let (graph, weights) = generate_random(n, edge_factor, 20, &mut rng).unwrap();
        let source = VertexId(rng.gen_range(0..n));

        let reference = BellmanFord::new().compute_shortest_paths(&graph, &weights, source).unwrap();
        let mut engine = ShortestPaths::new(&graph, &weights, source).unwrap();
        engine.run().unwrap();

        for v in graph.vertices() {
            let expected = reference.distance(v).unwrap();
            assert_eq!(engine.distance(v).unwrap(), expected, "distance to {} from {}", v, source);

            match expected {
                Distance::Finite(d) => {
                    let path = engine.return_path(v).unwrap();
                    assert_chain(&path, source, v);
                    assert_eq!(engine.return_length(v).unwrap(), d);
                    assert_eq!(engine.parent_edge(v).unwrap(), path.last().map(|e| e.id));
                }
                Distance::Infinite => {
                    assert!(engine.return_path(v).unwrap_err().is_unreachable());
                }
            }
        }
    }
}

#[test]
fn test_each_vertex_settled_once_in_distance_order() {
    let mut rng = StdRng::seed_from_u64(5);
    let (graph, weights) = generate_random(200, 3.0, 50, &mut rng).unwrap();
    let mut engine = ShortestPaths::new(&graph, &weights, VertexId(0)).unwrap();
    engine.run().unwrap();

    let order = engine.settled_order().unwrap().to_vec();
    assert_eq!(order.len(), graph.vertex_count());
    let mut seen = vec![false; graph.vertex_count()];
    for v in &order {
        assert!(!seen[v.index()], "vertex {} extracted twice", v);
        seen[v.index()] = true;
    }

    let distances: Vec<Distance<u64>> = order.iter().map(|&v| engine.distance(v).unwrap()).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]), "extraction order should follow distance");

    let stats = engine.stats();
    assert_eq!(stats.extractions, graph.vertex_count());
    assert_eq!(stats.heap.inserts, graph.vertex_count());
    // the source decrease plus one per improving relaxation
    assert_eq!(stats.heap.decreases, stats.improvements + 1);
}

#[test]
fn test_dijkstra_algorithm_matches_engine() {
    let mut rng = StdRng::seed_from_u64(11);
    let (graph, weights) = generate_random(80, 2.5, 30, &mut rng).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, &weights, VertexId(3)).unwrap();
    let mut engine = ShortestPaths::new(&graph, &weights, VertexId(3)).unwrap();
    engine.run().unwrap();

    for v in graph.vertices() {
        assert_eq!(result.distance(v).unwrap(), engine.distance(v).unwrap());
        match result.length(&graph, &weights, v) {
            Ok(length) => assert_eq!(length, engine.return_length(v).unwrap()),
            Err(err) => assert_eq!(Err(err), engine.return_length(v)),
        }
    }
    assert_eq!(result, engine.into_result().unwrap());
    assert_eq!(<Dijkstra as ShortestPathAlgorithm<u64, DirectedGraph>>::name(&Dijkstra), "Dijkstra");
}
