use std::collections::VecDeque;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::graph::{Neighbors, NodeId};

/// Outcome of a breadth-first reachability search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BfsOutcome<N> {
    /// The first node in breadth-first order satisfying the predicate, and the
    /// number of edges between it and the start node
    Found { node: N, depth: usize },

    /// The frontier ran dry without the predicate matching
    NotFound,

    /// The expansion budget ran out before the predicate matched
    BudgetExhausted { expanded: usize },
}

impl<N> BfsOutcome<N> {
    pub fn node(&self) -> Option<&N> {
        match self {
            BfsOutcome::Found { node, .. } => Some(node),
            _ => None,
        }
    }

    pub fn depth(&self) -> Option<usize> {
        match self {
            BfsOutcome::Found { depth, .. } => Some(*depth),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, BfsOutcome::Found { .. })
    }
}

/// Breadth-first search for the nearest node satisfying a predicate
#[derive(Debug, Clone, Default)]
pub struct BreadthFirst {
    /// Maximum number of nodes whose neighbors are expanded
    max_expansions: Option<usize>,
}

impl BreadthFirst {
    /// Creates a search with no expansion budget
    pub fn new() -> Self {
        BreadthFirst {
            max_expansions: None,
        }
    }

    /// Caps the number of node expansions; useful when the predicate may never match
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Searches `graph` breadth-first from `start`.
    ///
    /// The start node is tested first and reported at depth 0. The predicate is
    /// called at most once per distinct node. A start node missing from the
    /// graph is treated as having no neighbors.
    pub fn search<N, G, F>(&self, graph: &G, start: &N, mut predicate: F) -> BfsOutcome<N>
    where
        N: NodeId,
        G: Neighbors<N>,
        F: FnMut(&N) -> bool,
    {
        if predicate(start) {
            debug!("bfs: start node {:?} matches", start);
            return BfsOutcome::Found {
                node: start.clone(),
                depth: 0,
            };
        }

        let Some(start_index) = graph.index_of(start) else {
            debug!("bfs: start node {:?} is not in the graph", start);
            return BfsOutcome::NotFound;
        };

        let mut queue: VecDeque<usize> = graph.neighbors(start_index).collect();
        let mut visited = vec![false; graph.node_count()];
        visited[start_index] = true;

        // pending[d] counts queued entries discovered at depth d
        let mut pending = vec![0, queue.len()];
        let mut depth = 1;
        let mut expanded = 0;

        while let Some(current) = queue.pop_front() {
            while pending[depth] == 0 {
                depth += 1;
            }
            pending[depth] -= 1;

            if visited[current] {
                continue;
            }
            let Some(node) = graph.node(current) else {
                continue;
            };

            if predicate(node) {
                debug!("bfs: found {:?} at depth {} after {} expansions", node, depth, expanded);
                return BfsOutcome::Found {
                    node: node.clone(),
                    depth,
                };
            }

            if self.max_expansions.is_some_and(|max| expanded >= max) {
                debug!("bfs: expansion budget of {} exhausted", expanded);
                return BfsOutcome::BudgetExhausted { expanded };
            }

            visited[current] = true;
            expanded += 1;

            let queued = queue.len();
            queue.extend(graph.neighbors(current));
            let added = queue.len() - queued;
            trace!("bfs: expanded {:?} at depth {}, queued {} neighbors", node, depth, added);

            if pending.len() == depth + 1 {
                pending.push(0);
            }
            pending[depth + 1] += added;
        }

        debug!("bfs: frontier exhausted after {} expansions", expanded);
        BfsOutcome::NotFound
    }
}

/// Runs a breadth-first search with the default configuration
pub fn bfs<N, G, F>(graph: &G, start: &N, predicate: F) -> BfsOutcome<N>
where
    N: NodeId,
    G: Neighbors<N>,
    F: FnMut(&N) -> bool,
{
    BreadthFirst::new().search(graph, start, predicate)
}
