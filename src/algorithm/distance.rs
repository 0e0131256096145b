use std::cmp::Ordering;
use std::fmt;

use crate::graph::{VertexId, Weight};

/// Length of the best known path to a vertex.
///
/// `Infinite` compares greater than every finite distance, so no numeric
/// sentinel is needed for unreached vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    /// Extends the distance by one edge. Overflow saturates to `Infinite`.
    pub fn plus(self, weight: W) -> Self {
        match self {
            Distance::Finite(d) => d.checked_add(&weight).map_or(Distance::Infinite, Distance::Finite),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// A (vertex, distance) pair as stored in the priority queue.
///
/// Equality and ordering look at the distance only.
#[derive(Debug, Clone, Copy)]
pub struct DistanceLabel<W> {
    pub vertex: VertexId,
    pub distance: Distance<W>,
}

impl<W> DistanceLabel<W> {
    pub fn new(vertex: VertexId, distance: Distance<W>) -> Self {
        DistanceLabel { vertex, distance }
    }
}

impl<W: Ord> PartialEq for DistanceLabel<W> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<W: Ord> Eq for DistanceLabel<W> {}

impl<W: Ord> PartialOrd for DistanceLabel<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Ord> Ord for DistanceLabel<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}
