use log::{debug, trace};

use crate::algorithm::distance::{Distance, DistanceLabel};
use crate::algorithm::path::{path_length, reconstruct_path};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{DecreaseKeyHeap, Handle, HeapStats};
use crate::graph::{Edge, EdgeId, Graph, VertexId, Weight, WeightFunction};
use crate::{Error, Result};

/// Lifecycle of a `ShortestPaths` instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Created,
    Running,
    Finished,
}

/// Counters collected during one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Vertices removed from the queue
    pub extractions: usize,
    /// Edges examined into still-queued vertices
    pub relaxations: usize,
    /// Relaxations that lowered a distance
    pub improvements: usize,
    pub heap: HeapStats,
}

/// Dijkstra's algorithm over one (graph, weights, source) triple.
///
/// Every vertex sits in a `DecreaseKeyHeap` for the whole run; the engine keeps
/// one handle per vertex and lowers distances in place. `run` may be called
/// once, after which paths and lengths can be queried.
#[derive(Debug)]
pub struct ShortestPaths<'g, G, F, W>
where
    G: Graph + ?Sized,
    F: WeightFunction<W> + ?Sized,
    W: Weight,
{
    graph: &'g G,
    weights: &'g F,
    source: VertexId,
    state: RunState,

    /// Vertex -> handle into the queue, only populated while running
    handles: Vec<Option<Handle>>,

    /// Vertex -> edge on the best known path, `None` for source and unreached
    parent_edges: Vec<Option<EdgeId>>,

    /// Final distance of every vertex, recorded on extraction
    distances: Vec<Distance<W>>,

    /// Vertices in the order they were extracted
    settled: Vec<VertexId>,

    stats: RunStats,
}

impl<'g, G, F, W> ShortestPaths<'g, G, F, W>
where
    G: Graph + ?Sized,
    F: WeightFunction<W> + ?Sized,
    W: Weight,
{
    /// Prepares a run from `source`. Fails if the source is not a vertex of the graph.
    pub fn new(graph: &'g G, weights: &'g F, source: VertexId) -> Result<Self> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        Ok(ShortestPaths {
            graph,
            weights,
            source,
            state: RunState::Created,
            handles: Vec::new(),
            parent_edges: Vec::new(),
            distances: Vec::new(),
            settled: Vec::new(),
            stats: RunStats::default(),
        })
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Computes the shortest-path tree from the source
    pub fn run(&mut self) -> Result<()> {
        if self.state != RunState::Created {
            return Err(Error::AlreadyRun);
        }
        self.state = RunState::Running;

        let graph = self.graph;
        let weights = self.weights;
        let n = graph.vertex_count();
        debug!("Computing shortest paths for graph with {} vertices from source {}", n, self.source);

        let mut queue = DecreaseKeyHeap::with_capacity(n);
        self.handles = vec![None; n];
        self.parent_edges = vec![None; n];
        self.distances = vec![Distance::Infinite; n];
        self.settled = Vec::with_capacity(n);

        for v in graph.vertices() {
            let handle = queue.insert(DistanceLabel::new(v, Distance::Infinite))?;
            *self.slot_mut(v)? = Some(handle);
        }

        let source_handle = self.handle(self.source)?;
        queue.decrease(source_handle, DistanceLabel::new(self.source, Distance::zero()))?;

        while !queue.is_empty() {
            let DistanceLabel { vertex: u, distance: d } = queue.extract_min()?;
            self.distances[u.index()] = d;
            self.settled.push(u);
            self.stats.extractions += 1;
            trace!("Settled vertex {} at distance {:?}", u, d);

            // an unreached vertex cannot improve anything
            if !d.is_finite() {
                continue;
            }

            for edge in graph.edges_from(u) {
                let handle = self.handle(edge.to)?;
                if !queue.contains(handle) {
                    continue;
                }

                let weight = weights.weight(edge).ok_or(Error::MissingWeight(edge.id.index()))?;
                let candidate = d.plus(weight);
                let current = queue.get(handle)?.distance;
                self.stats.relaxations += 1;

                if candidate < current {
                    queue.decrease(handle, DistanceLabel::new(edge.to, candidate))?;
                    self.parent_edges[edge.to.index()] = Some(edge.id);
                    self.stats.improvements += 1;
                }
            }
        }

        self.stats.heap = queue.stats();
        self.handles.clear();
        self.state = RunState::Finished;
        debug!(
            "Finished: {} extractions, {} relaxations, {} improvements",
            self.stats.extractions, self.stats.relaxations, self.stats.improvements
        );

        Ok(())
    }

    /// Shortest distance from the source to `vertex`
    pub fn distance(&self, vertex: VertexId) -> Result<Distance<W>> {
        self.ensure_finished()?;
        self.distances
            .get(vertex.index())
            .copied()
            .ok_or(Error::InvalidVertex(vertex.index()))
    }

    /// Edge used to reach `vertex` in the shortest-path tree
    pub fn parent_edge(&self, vertex: VertexId) -> Result<Option<EdgeId>> {
        self.ensure_finished()?;
        self.parent_edges
            .get(vertex.index())
            .copied()
            .ok_or(Error::InvalidVertex(vertex.index()))
    }

    /// Vertices in the order they left the queue
    pub fn settled_order(&self) -> Result<&[VertexId]> {
        self.ensure_finished()?;
        Ok(&self.settled)
    }

    /// Edges of a shortest path from the source to `target`, source first
    pub fn return_path(&self, target: VertexId) -> Result<Vec<Edge>> {
        self.ensure_finished()?;
        reconstruct_path(self.graph, &self.parent_edges, self.source, target)
    }

    /// Total weight of the path returned by `return_path`
    pub fn return_length(&self, target: VertexId) -> Result<W> {
        let path = self.return_path(target)?;
        path_length(self.weights, &path)
    }

    /// Consumes a finished run into its distance and parent-edge tables
    pub fn into_result(self) -> Result<ShortestPathResult<W>> {
        self.ensure_finished()?;
        Ok(ShortestPathResult {
            distances: self.distances,
            parent_edges: self.parent_edges,
            source: self.source,
        })
    }

    fn ensure_finished(&self) -> Result<()> {
        match self.state {
            RunState::Finished => Ok(()),
            _ => Err(Error::NotRun),
        }
    }

    fn handle(&self, vertex: VertexId) -> Result<Handle> {
        self.handles
            .get(vertex.index())
            .copied()
            .flatten()
            .ok_or(Error::InvalidVertex(vertex.index()))
    }

    fn slot_mut(&mut self, vertex: VertexId) -> Result<&mut Option<Handle>> {
        self.handles
            .get_mut(vertex.index())
            .ok_or(Error::InvalidVertex(vertex.index()))
    }
}

/// Classic Dijkstra's algorithm behind the `ShortestPathAlgorithm` interface
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<F>(&self, graph: &G, weights: &F, source: VertexId) -> Result<ShortestPathResult<W>>
    where
        F: WeightFunction<W>,
    {
        let mut engine = ShortestPaths::new(graph, weights, source)?;
        engine.run()?;
        engine.into_result()
    }
}
