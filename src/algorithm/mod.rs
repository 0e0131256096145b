pub mod traits;
pub mod distance;
pub mod path;
pub mod dijkstra;
pub mod bellman_ford;

pub use distance::{Distance, DistanceLabel};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
