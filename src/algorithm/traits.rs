use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::algorithm::dijkstra::SolverState;
use crate::graph::{Graph, NodeId, Weight, WeightedEdges};

/// A minimum-cost path and its total weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath<N, W> {
    /// Sum of the edge weights along `path`
    pub cost: W,

    /// Nodes from start to finish, both inclusive
    pub path: Vec<N>,
}

impl<N: Display, W: Display> Display for ShortestPath<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weight: {}, Path: ", self.cost)?;
        for (i, node) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

/// Outcome of a shortest-path query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome<N, W> {
    Found(ShortestPath<N, W>),

    /// No path exists from start to finish
    Unreachable,
}

impl<N, W: Copy> PathOutcome<N, W> {
    pub fn cost(&self) -> Option<W> {
        match self {
            PathOutcome::Found(found) => Some(found.cost),
            PathOutcome::Unreachable => None,
        }
    }

    pub fn path(&self) -> Option<&[N]> {
        match self {
            PathOutcome::Found(found) => Some(found.path.as_slice()),
            PathOutcome::Unreachable => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn into_found(self) -> Option<ShortestPath<N, W>> {
        match self {
            PathOutcome::Found(found) => Some(found),
            PathOutcome::Unreachable => None,
        }
    }
}

impl<N: Display, W: Display> Display for PathOutcome<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOutcome::Found(found) => Display::fmt(found, f),
            PathOutcome::Unreachable => f.write_str("No path exists"),
        }
    }
}

/// Minimum costs and parents from one start node to every node of a graph.
///
/// Borrows the graph it was computed on to map indices back to node ids.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g, N: NodeId, W: Weight> {
    start: N,
    graph: &'g dyn Graph<N>,
    state: SolverState<W>,
}

impl<'g, N: NodeId, W: Weight> ShortestPathTree<'g, N, W> {
    pub(crate) fn new(graph: &'g dyn Graph<N>, start: &N, state: SolverState<W>) -> Self {
        ShortestPathTree {
            start: start.clone(),
            graph,
            state,
        }
    }

    /// Start node the tree was computed from
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Minimum cost from start to `node`, or `None` when it is unreachable
    pub fn cost_to(&self, node: &N) -> Option<W> {
        if *node == self.start {
            return Some(W::zero());
        }
        self.state.cost(self.graph.index_of(node)?)
    }

    /// Reconstructs the path from start to `finish`
    pub fn path_to(&self, finish: &N) -> PathOutcome<N, W> {
        if *finish == self.start {
            return PathOutcome::Found(ShortestPath {
                cost: W::zero(),
                path: vec![self.start.clone()],
            });
        }

        let route = self
            .graph
            .index_of(finish)
            .and_then(|index| Some((self.state.cost(index)?, self.state.path_to(index)?)));

        match route {
            Some((cost, indices)) => PathOutcome::Found(ShortestPath {
                cost,
                path: indices
                    .into_iter()
                    .filter_map(|index| self.graph.node(index).cloned())
                    .collect(),
            }),
            None => PathOutcome::Unreachable,
        }
    }

    /// Nodes with a finite cost, start included, in graph insertion order
    pub fn reachable(&self) -> Vec<&N> {
        let mut reached = vec![&self.start];
        reached.extend(
            (0..self.graph.node_count())
                .filter(|&index| self.state.cost(index).is_some())
                .filter_map(|index| self.graph.node(index))
                .filter(|node| **node != self.start),
        );
        reached
    }
}

/// Trait for single-source shortest path solvers
pub trait ShortestPathSolver<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: WeightedEdges<N, W>,
{
    /// Compute shortest paths from a start node to all other nodes
    fn solve<'g>(&self, graph: &'g G, start: &N) -> ShortestPathTree<'g, N, W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from start to finish
    fn shortest_path(&self, graph: &G, start: &N, finish: &N) -> PathOutcome<N, W> {
        self.solve(graph, start).path_to(finish)
    }
}
