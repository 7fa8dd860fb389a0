pub mod add_hyperedge;
pub mod count_hyperedges;
pub mod count_vertices;
pub mod edge_size_distribution;
pub mod edges_of;
pub mod max_vertex_id;
pub mod neighbor_counts;
pub mod vertices;

use crate::{
    collections::AIndexMap,
    indexes::{EdgeIndex, VertexId},
};

/// Hyperedge representation as a sorted, deduplicated array of vertex ids.
/// Two identical arrays are two distinct hyperedges when added twice: edge
/// multiplicity is what the g threshold counts.
pub type Hyperedge = Vec<VertexId>;

/// An undirected hypergraph in which a hyperedge can join any number of
/// vertices.
///
/// The structure keeps two consistent projections: the ordered list of
/// hyperedges and, per vertex, the list of hyperedges containing it. Both
/// are built once at load time and never mutated afterwards.
#[derive(Debug)]
pub struct Hypergraph {
    pub(crate) edges: Vec<Hyperedge>,
    pub(crate) incidence: AIndexMap<VertexId, Vec<EdgeIndex>>,
}

impl Hypergraph {
    /// Creates a new hypergraph with no allocation.
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates a new hypergraph with the specified capacity.
    pub fn with_capacity(vertices: usize, hyperedges: usize) -> Self {
        Self {
            edges: Vec::with_capacity(hyperedges),
            incidence: AIndexMap::with_capacity_and_hasher(vertices, ahash::RandomState::new()),
        }
    }

    pub(crate) fn edge(&self, index: EdgeIndex) -> &Hyperedge {
        &self.edges[index.0]
    }
}

impl Default for Hypergraph {
    fn default() -> Self {
        Hypergraph::new()
    }
}
