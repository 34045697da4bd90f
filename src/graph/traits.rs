use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Identifier of a graph vertex. Strings and integers both qualify.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}

/// Numeric edge weight.
///
/// Floats must be wrapped in `ordered_float::OrderedFloat` to use the
/// priority-queue frontier.
pub trait Weight: Copy + Debug + PartialOrd + Zero {
    /// Path cost of `self` extended by `other`, or `None` when the sum does not
    /// fit the type (integer overflow, or an infinite float)
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    if sum.is_finite() {
                        Some(sum)
                    } else {
                        None
                    }
                }
            }

            impl Weight for OrderedFloat<$t> {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.0.checked_sum(other.0).map(OrderedFloat)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_weight!(f32, f64);

/// A directed graph whose vertices are interned to dense indices.
///
/// Indices are handed out in insertion order, and every iteration over
/// vertices follows that order.
pub trait Graph<N: NodeId>: Debug {
    /// Returns the number of vertices in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the index of a node, if the graph knows about it
    fn index_of(&self, node: &N) -> Option<usize>;

    /// Returns the node stored at an index
    fn node(&self, index: usize) -> Option<&N>;

    /// Returns true if the node exists in the graph
    fn contains(&self, node: &N) -> bool {
        self.index_of(node).is_some()
    }
}

/// Unweighted adjacency: an ordered, possibly repeating neighbor list per vertex.
pub trait Neighbors<N: NodeId>: Graph<N> {
    /// Returns an iterator over the neighbors of a vertex, in list order
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_>;
}

/// Weighted adjacency: at most one weighted edge per ordered vertex pair.
pub trait WeightedEdges<N: NodeId, W: Weight>: Graph<N> {
    /// Returns an iterator over the outgoing edges from a vertex, in insertion order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}
