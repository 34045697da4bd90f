use std::collections::HashMap;

use crate::graph::traits::NodeId;

/// Insertion-ordered interning of node identifiers to dense indices
#[derive(Debug, Clone)]
pub(crate) struct NodeTable<N: NodeId> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
}

impl<N: NodeId> NodeTable<N> {
    pub(crate) fn new() -> Self {
        NodeTable {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the index of `node`, interning it first if it is new.
    /// The flag is true when the node was inserted by this call.
    pub(crate) fn intern(&mut self, node: N) -> (usize, bool) {
        if let Some(&existing) = self.index.get(&node) {
            return (existing, false);
        }
        let id = self.nodes.len();
        self.index.insert(node.clone(), id);
        self.nodes.push(node);
        (id, true)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&N> {
        self.nodes.get(index)
    }
}
