//! Path Search - unweighted reachability and weighted shortest paths
//!
//! This library provides two independent searches over caller-supplied
//! adjacency-map graphs:
//!
//! - a breadth-first search that returns the first node satisfying a predicate
//!   together with its hop-distance from the start node, and
//! - Dijkstra's algorithm for directed graphs with non-negative edge weights,
//!   returning the minimum total cost and the reconstructed path.
//!
//! Dijkstra's algorithm is not defined for negative edge weights. The solver does
//! not check for them; such input simply produces an incorrect result. Use
//! [`WeightedGraph::validate_non_negative`] when the input is untrusted.
//!
//! Two textbook sorts (quicksort and selection sort) live in [`sort`].

pub mod algorithm;
pub mod graph;
pub mod sort;

pub use algorithm::{
    bfs::{bfs, BfsOutcome, BreadthFirst},
    dijkstra::{dijkstra, Dijkstra, Frontier, SolverState},
    PathOutcome, ShortestPath, ShortestPathSolver, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyList, WeightedGraph};
/// Float weights must be wrapped to satisfy `Ord` for the heap frontier
pub use ordered_float::OrderedFloat;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Edge weight on edge from {from} to {to} is not comparable to zero")]
    UnorderedWeight { from: String, to: String },

    #[error("Invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
