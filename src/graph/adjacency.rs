use serde::de::{Deserialize, DeserializeOwned, Deserializer};

use crate::graph::nodes::NodeTable;
use crate::graph::ordered_map::OrderedMap;
use crate::graph::traits::{Graph, Neighbors, NodeId};
use crate::Result;

/// An unweighted directed graph stored as ordered neighbor lists.
///
/// An edge A -> B does not imply B -> A. Neighbor lists may repeat a node;
/// list order is the order a breadth-first search discovers neighbors in.
#[derive(Debug, Clone)]
pub struct AdjacencyList<N: NodeId> {
    nodes: NodeTable<N>,

    /// Neighbor lists indexed by vertex
    neighbors: Vec<Vec<usize>>,
}

impl<N: NodeId> AdjacencyList<N> {
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyList {
            nodes: NodeTable::new(),
            neighbors: Vec::new(),
        }
    }

    /// Adds a node with no neighbors and returns its index.
    /// Adding an existing node returns the existing index.
    pub fn add_node(&mut self, node: N) -> usize {
        let (id, inserted) = self.nodes.intern(node);
        if inserted {
            self.neighbors.push(Vec::new());
        }
        id
    }

    /// Appends `to` to the neighbor list of `from`, adding either endpoint if needed
    pub fn add_edge(&mut self, from: N, to: N) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.neighbors[from].push(to);
    }

    /// Appends every node of `neighbors` to the neighbor list of `node`
    pub fn with_neighbors<I>(mut self, node: N, neighbors: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let from = self.add_node(node);
        for neighbor in neighbors {
            let to = self.add_node(neighbor);
            self.neighbors[from].push(to);
        }
        self
    }

    /// Parses a JSON object of the form `{"node": ["neighbor", ...], ...}`
    pub fn from_json(json: &str) -> Result<Self>
    where
        N: DeserializeOwned,
    {
        Ok(serde_json::from_str(json)?)
    }
}

impl<N: NodeId> Default for AdjacencyList<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keys are interned before any neighbor, as for [`crate::WeightedGraph`]
impl<N: NodeId> FromIterator<(N, Vec<N>)> for AdjacencyList<N> {
    fn from_iter<T: IntoIterator<Item = (N, Vec<N>)>>(iter: T) -> Self {
        let entries: Vec<(N, Vec<N>)> = iter.into_iter().collect();
        let mut graph = AdjacencyList::new();
        for (node, _) in &entries {
            graph.add_node(node.clone());
        }
        entries
            .into_iter()
            .fold(graph, |graph, (node, neighbors)| graph.with_neighbors(node, neighbors))
    }
}

impl<'de, N> Deserialize<'de> for AdjacencyList<N>
where
    N: NodeId + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let OrderedMap(entries) = OrderedMap::<N, Vec<N>>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl<N: NodeId> Graph<N> for AdjacencyList<N> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.neighbors.iter().map(|list| list.len()).sum()
    }

    fn index_of(&self, node: &N) -> Option<usize> {
        self.nodes.index_of(node)
    }

    fn node(&self, index: usize) -> Option<&N> {
        self.nodes.get(index)
    }
}

impl<N: NodeId> Neighbors<N> for AdjacencyList<N> {
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        match self.neighbors.get(vertex) {
            Some(list) => Box::new(list.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}
