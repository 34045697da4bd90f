pub mod traits;
pub mod adjacency;
pub mod weighted;
pub mod generators;
pub(crate) mod nodes;
mod ordered_map;

pub use traits::{Graph, Neighbors, NodeId, Weight, WeightedEdges};
pub use adjacency::AdjacencyList;
pub use weighted::WeightedGraph;
