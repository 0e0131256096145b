use spath::algorithm::dijkstra::{RunState, ShortestPaths};
use spath::graph::{DirectedGraph, EdgeWeights, MutableGraph};
use spath::{Distance, Edge, Error, VertexId};

fn line_graph() -> (DirectedGraph, EdgeWeights<u64>) {
    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex();
    let b = graph.add_vertex();
    let c = graph.add_vertex();
    let mut weights = EdgeWeights::new();
    weights.set(graph.add_edge(a, b).unwrap(), 3);
    weights.set(graph.add_edge(b, c).unwrap(), 4);
    (graph, weights)
}

#[test]
fn test_queries_before_run_fail() {
    let (graph, weights) = line_graph();
    let engine = ShortestPaths::new(&graph, &weights, VertexId(0)).unwrap();

    assert_eq!(engine.state(), RunState::Created);
    assert_eq!(engine.return_path(VertexId(2)), Err(Error::NotRun));
    assert_eq!(engine.return_length(VertexId(2)), Err(Error::NotRun));
    assert_eq!(engine.distance(VertexId(2)), Err(Error::NotRun));
    assert_eq!(engine.parent_edge(VertexId(2)), Err(Error::NotRun));
    assert_eq!(engine.into_result().unwrap_err(), Error::NotRun);
}

#[test]
fn test_second_run_fails() {
    let (graph, weights) = line_graph();
    let mut engine = ShortestPaths::new(&graph, &weights, VertexId(0)).unwrap();

    engine.run().unwrap();
    assert_eq!(engine.state(), RunState::Finished);
    assert_eq!(engine.run(), Err(Error::AlreadyRun));

    // the finished results are untouched
    assert_eq!(engine.return_length(VertexId(2)).unwrap(), 7);
}

#[test]
fn test_unknown_source_is_rejected() {
    let (graph, weights) = line_graph();
    let result = ShortestPaths::new(&graph, &weights, VertexId(3));
    assert_eq!(result.unwrap_err(), Error::SourceNotFound);
}

#[test]
fn test_unknown_target_is_rejected() {
    let (graph, weights) = line_graph();
    let mut engine = ShortestPaths::new(&graph, &weights, VertexId(0)).unwrap();
    engine.run().unwrap();

    assert_eq!(engine.return_path(VertexId(99)), Err(Error::InvalidVertex(99)));
    assert_eq!(engine.distance(VertexId(99)), Err(Error::InvalidVertex(99)));
}

#[test]
fn test_missing_weight_aborts_run() {
    let (graph, _) = line_graph();
    let partial = |edge: &Edge| -> Option<u64> { (edge.from == VertexId(0)).then_some(3) };

    let mut engine = ShortestPaths::new(&graph, &partial, VertexId(0)).unwrap();
    assert_eq!(engine.run(), Err(Error::MissingWeight(1)));
    assert_eq!(engine.state(), RunState::Running);
    assert_eq!(engine.distance(VertexId(1)), Err(Error::NotRun));
    assert_eq!(engine.run(), Err(Error::AlreadyRun));
}

#[test]
fn test_closure_weight_function() {
    let (graph, _) = line_graph();
    // every edge costs twice its target index
    let doubled = |edge: &Edge| -> Option<u64> { Some(2 * edge.to.index() as u64) };

    let mut engine = ShortestPaths::new(&graph, &doubled, VertexId(0)).unwrap();
    engine.run().unwrap();
    assert_eq!(engine.distance(VertexId(2)).unwrap(), Distance::Finite(6));
    assert_eq!(engine.return_length(VertexId(2)).unwrap(), 6);
}

#[test]
fn test_unreached_vertex_weights_are_never_read() {
    // vertex 2 is unreachable and its outgoing edge has no weight
    let mut graph = DirectedGraph::with_capacity(3);
    let mut weights = EdgeWeights::new();
    weights.set(graph.add_edge(VertexId(0), VertexId(1)).unwrap(), 1u64);
    graph.add_edge(VertexId(2), VertexId(1)).unwrap();

    let mut engine = ShortestPaths::new(&graph, &weights, VertexId(0)).unwrap();
    engine.run().unwrap();
    assert_eq!(engine.return_length(VertexId(1)).unwrap(), 1);
    assert!(engine.return_path(VertexId(2)).unwrap_err().is_unreachable());
}

#[test]
fn test_empty_edge_set_single_vertex() {
    let mut graph = DirectedGraph::new();
    let only = graph.add_vertex();
    let weights: EdgeWeights<u32> = EdgeWeights::new();

    let mut engine = ShortestPaths::new(&graph, &weights, only).unwrap();
    engine.run().unwrap();
    assert_eq!(engine.return_length(only).unwrap(), 0);
    assert_eq!(engine.stats().extractions, 1);
}
