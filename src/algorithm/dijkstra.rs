use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::algorithm::traits::{PathOutcome, ShortestPathSolver, ShortestPathTree};
use crate::graph::{NodeId, Weight, WeightedEdges};

/// How the next node to process is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Frontier {
    /// Scan every unprocessed node for the lowest cost, O(V²) overall
    #[default]
    LinearScan,
    /// Pop the lowest cost from a binary heap keyed by `(cost, index)`
    BinaryHeap,
}

/// Cost, parent and processed tables of a single Dijkstra run.
///
/// A cost of `None` means the node has not been reached; a parent of `None`
/// means it has no parent yet. The start node holds cost zero, has no parent,
/// and is never relaxed against.
#[derive(Debug, Clone)]
pub struct SolverState<W: Weight> {
    start: Option<usize>,
    costs: Vec<Option<W>>,
    parents: Vec<Option<usize>>,
    processed: Vec<bool>,
}

impl<W: Weight> SolverState<W> {
    /// Seeds the tables from the direct edges of `start`.
    ///
    /// A start node absent from the graph has no outgoing edges, so every
    /// other node stays unreached.
    pub fn new<N, G>(graph: &G, start: &N) -> Self
    where
        N: NodeId,
        G: WeightedEdges<N, W>,
    {
        let n = graph.node_count();
        let mut state = SolverState {
            start: graph.index_of(start),
            costs: vec![None; n],
            parents: vec![None; n],
            processed: vec![false; n],
        };

        if let Some(s) = state.start {
            state.costs[s] = Some(W::zero());
            state.processed[s] = true;
            for (v, weight) in graph.outgoing_edges(s) {
                if v != s {
                    state.costs[v] = Some(weight);
                    state.parents[v] = Some(s);
                }
            }
        }

        state
    }

    /// Current best cost of a node
    pub fn cost(&self, node: usize) -> Option<W> {
        self.costs.get(node).copied().flatten()
    }

    /// Node the current best cost was reached from
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parents.get(node).copied().flatten()
    }

    pub fn is_processed(&self, node: usize) -> bool {
        self.processed.get(node).copied().unwrap_or(false)
    }

    /// Returns the unprocessed node with the lowest finite cost.
    /// Ties go to the lowest index, i.e. the node inserted first.
    pub fn select_lowest_cost(&self) -> Option<usize> {
        let mut lowest: Option<(usize, W)> = None;
        for (node, cost) in self.costs.iter().enumerate() {
            let Some(cost) = *cost else { continue };
            if self.processed[node] {
                continue;
            }
            if lowest.map_or(true, |(_, best)| cost < best) {
                lowest = Some((node, cost));
            }
        }
        lowest.map(|(node, _)| node)
    }

    /// Relaxes the outgoing edges of `node`.
    ///
    /// A neighbor is updated only when the new cost is strictly lower, so the
    /// first parent found for a given cost is kept. A cost that overflows the
    /// weight type is never an improvement. Returns the updated neighbors with
    /// their new costs.
    pub fn relax<N, G>(&mut self, graph: &G, node: usize) -> Vec<(usize, W)>
    where
        N: NodeId,
        G: WeightedEdges<N, W>,
    {
        let Some(base) = self.cost(node) else {
            return Vec::new();
        };

        let mut updated = Vec::new();
        for (v, weight) in graph.outgoing_edges(node) {
            if Some(v) == self.start {
                continue;
            }
            let Some(candidate) = base.checked_sum(weight) else {
                trace!("relax: {} -> {} overflows, skipped", node, v);
                continue;
            };
            let improves = match self.costs[v] {
                None => true,
                Some(current) => candidate < current,
            };
            if improves {
                trace!("relax: {} -> {} now costs {:?}", node, v, candidate);
                self.costs[v] = Some(candidate);
                self.parents[v] = Some(node);
                updated.push((v, candidate));
            }
        }
        updated
    }

    pub fn mark_processed(&mut self, node: usize) {
        self.processed[node] = true;
    }

    /// Processes nodes in lowest-cost order found by linear scan until every
    /// reachable node is processed
    pub fn run_linear_scan<N, G>(&mut self, graph: &G)
    where
        N: NodeId,
        G: WeightedEdges<N, W>,
    {
        let mut rounds = 0;
        while let Some(node) = self.select_lowest_cost() {
            self.relax(graph, node);
            self.mark_processed(node);
            rounds += 1;
        }
        debug!("dijkstra: linear scan processed {} nodes", rounds);
    }

    /// Walks the parent table back from `finish` to the start node.
    ///
    /// Returns `None` if `finish` was never reached. The walk is bounded by the
    /// node count, so a parent cycle left behind by negative weights also
    /// yields `None` instead of looping.
    pub fn path_to(&self, finish: usize) -> Option<Vec<usize>> {
        let start = self.start?;
        self.cost(finish)?;

        let mut path = vec![finish];
        let mut current = finish;
        while current != start {
            current = self.parent(current)?;
            path.push(current);
            if path.len() > self.costs.len() {
                debug!("dijkstra: parent cycle while reconstructing path to {}", finish);
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

impl<W: Weight + Ord> SolverState<W> {
    /// Same processing order as [`Self::run_linear_scan`], using a binary heap
    /// with lazy deletion of stale entries
    pub fn run_binary_heap<N, G>(&mut self, graph: &G)
    where
        N: NodeId,
        G: WeightedEdges<N, W>,
    {
        // Min-heap on (cost, index); equal costs pop the lower index first
        let mut queue = BinaryHeap::new();
        for (node, cost) in self.costs.iter().enumerate() {
            if let (Some(cost), false) = (*cost, self.processed[node]) {
                queue.push(Reverse((cost, node)));
            }
        }

        let mut rounds = 0;
        while let Some(Reverse((cost, node))) = queue.pop() {
            if self.processed[node] || self.costs[node] != Some(cost) {
                continue;
            }
            for (v, new_cost) in self.relax(graph, node) {
                queue.push(Reverse((new_cost, v)));
            }
            self.mark_processed(node);
            rounds += 1;
        }
        debug!("dijkstra: binary heap processed {} nodes", rounds);
    }
}

/// Dijkstra's algorithm for graphs with non-negative edge weights.
///
/// Negative weights are not detected; they produce a wrong result.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    frontier: Frontier,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using the linear-scan frontier
    pub fn new() -> Self {
        Dijkstra {
            frontier: Frontier::LinearScan,
        }
    }

    pub fn with_frontier(mut self, frontier: Frontier) -> Self {
        self.frontier = frontier;
        self
    }

    pub fn frontier(&self) -> Frontier {
        self.frontier
    }
}

impl<N, W, G> ShortestPathSolver<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Weight + Ord,
    G: WeightedEdges<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn solve<'g>(&self, graph: &'g G, start: &N) -> ShortestPathTree<'g, N, W> {
        let mut state = SolverState::new(graph, start);
        match self.frontier {
            Frontier::LinearScan => state.run_linear_scan(graph),
            Frontier::BinaryHeap => state.run_binary_heap(graph),
        }
        ShortestPathTree::new(graph, start, state)
    }
}

/// Minimum-cost path from `start` to `finish` using the linear-scan frontier.
///
/// Unlike [`Dijkstra`], this only needs `PartialOrd` weights, so plain `f64`
/// works.
pub fn dijkstra<N, W, G>(graph: &G, start: &N, finish: &N) -> PathOutcome<N, W>
where
    N: NodeId,
    W: Weight,
    G: WeightedEdges<N, W>,
{
    let mut state = SolverState::new(graph, start);
    state.run_linear_scan(graph);
    let outcome = ShortestPathTree::new(graph, start, state).path_to(finish);
    if !outcome.is_found() {
        debug!("dijkstra: no path from {:?} to {:?}", start, finish);
    }
    outcome
}
