use crate::graph::{AdjacencyList, WeightedGraph};
use rand::prelude::*;

/// Generates a random unweighted graph over vertices `0..n` with roughly
/// `edge_factor * n` directed edges. Repeated edges are kept.
pub fn random_adjacency_list<R: Rng>(n: usize, edge_factor: f64, rng: &mut R) -> AdjacencyList<usize> {
    assert!(n > 0, "n must be positive");

    let mut graph = AdjacencyList::new();

    // Add every vertex up front so isolated ones still exist
    for v in 0..n {
        graph.add_node(v);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        graph.add_edge(u, v);
    }

    graph
}

/// Generates a random weighted graph over vertices `0..n` with roughly
/// `edge_factor * n` directed edges and integer weights in `1..=max_weight`.
/// Self-loops are skipped; a repeated pair keeps the last weight drawn.
pub fn random_weighted_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> WeightedGraph<usize, u64> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = WeightedGraph::new();

    for v in 0..n {
        graph.add_node(v);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..=max_weight);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}
