pub mod traits;
pub mod bfs;
pub mod dijkstra;

pub use traits::{PathOutcome, ShortestPath, ShortestPathSolver, ShortestPathTree};
