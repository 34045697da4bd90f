use serde::de::{Deserialize, DeserializeOwned, Deserializer};

use crate::graph::nodes::NodeTable;
use crate::graph::ordered_map::OrderedMap;
use crate::graph::traits::{Graph, NodeId, Weight, WeightedEdges};
use crate::{Error, Result};

/// A weighted directed graph using adjacency lists
#[derive(Debug, Clone)]
pub struct WeightedGraph<N: NodeId, W: Weight> {
    nodes: NodeTable<N>,

    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<N: NodeId, W: Weight> WeightedGraph<N, W> {
    /// Creates a new empty weighted graph
    pub fn new() -> Self {
        WeightedGraph {
            nodes: NodeTable::new(),
            outgoing_edges: Vec::new(),
        }
    }

    /// Adds a node with no outgoing edges and returns its index.
    /// Adding an existing node returns the existing index.
    pub fn add_node(&mut self, node: N) -> usize {
        let (id, inserted) = self.nodes.intern(node);
        if inserted {
            self.outgoing_edges.push(Vec::new());
        }
        id
    }

    /// Adds a directed edge, adding either endpoint if needed.
    ///
    /// If the edge already exists its weight is replaced and `false` is
    /// returned. The weight is stored as given; see [`Self::validate_non_negative`].
    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        let from = self.add_node(from);
        let to = self.add_node(to);

        let edges = &mut self.outgoing_edges[from];
        if let Some(edge) = edges.iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
            return false;
        }
        edges.push((to, weight));
        true
    }

    /// Builder form of [`Self::add_edge`] for a whole neighbor map.
    ///
    /// Vertex order is the order nodes are first added, so neighbors not yet
    /// seen are ordered ahead of later calls' keys. Collect from an iterator
    /// of entries to get pure key order.
    pub fn with_edges<I>(mut self, node: N, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, W)>,
    {
        self.add_node(node.clone());
        for (neighbor, weight) in edges {
            self.add_edge(node.clone(), neighbor, weight);
        }
        self
    }

    /// Validate that the graph doesn't have negative weights.
    ///
    /// The shortest-path solvers never call this; a negative weight there yields
    /// a wrong answer rather than an error.
    pub fn validate_non_negative(&self) -> Result<()> {
        for (vertex, edges) in self.outgoing_edges.iter().enumerate() {
            for &(target, weight) in edges {
                let describe = |index: usize| {
                    self.nodes
                        .get(index)
                        .map(|node| format!("{:?}", node))
                        .unwrap_or_default()
                };
                match weight.partial_cmp(&W::zero()) {
                    Some(std::cmp::Ordering::Less) => {
                        return Err(Error::NegativeWeight {
                            from: describe(vertex),
                            to: describe(target),
                            weight: format!("{:?}", weight),
                        });
                    }
                    None => {
                        return Err(Error::UnorderedWeight {
                            from: describe(vertex),
                            to: describe(target),
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Parses a JSON object of the form `{"node": {"neighbor": weight, ...}, ...}`
    pub fn from_json(json: &str) -> Result<Self>
    where
        N: DeserializeOwned,
        W: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }
}

impl<N: NodeId, W: Weight> Default for WeightedGraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys are interned before any neighbor, so vertex order is key order and
/// nodes that only appear as neighbors come last.
impl<N: NodeId, W: Weight> FromIterator<(N, Vec<(N, W)>)> for WeightedGraph<N, W> {
    fn from_iter<T: IntoIterator<Item = (N, Vec<(N, W)>)>>(iter: T) -> Self {
        let entries: Vec<(N, Vec<(N, W)>)> = iter.into_iter().collect();
        let mut graph = WeightedGraph::new();
        for (node, _) in &entries {
            graph.add_node(node.clone());
        }
        entries
            .into_iter()
            .fold(graph, |graph, (node, edges)| graph.with_edges(node, edges))
    }
}

impl<'de, N, W> Deserialize<'de> for WeightedGraph<N, W>
where
    N: NodeId + Deserialize<'de>,
    W: Weight + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let OrderedMap(entries) =
            OrderedMap::<N, OrderedMap<N, W>>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|(node, OrderedMap(edges))| (node, edges))
            .collect())
    }
}

impl<N: NodeId, W: Weight> Graph<N> for WeightedGraph<N, W> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn index_of(&self, node: &N) -> Option<usize> {
        self.nodes.index_of(node)
    }

    fn node(&self, index: usize) -> Option<&N> {
        self.nodes.get(index)
    }
}

impl<N: NodeId, W: Weight> WeightedEdges<N, W> for WeightedGraph<N, W> {
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}
