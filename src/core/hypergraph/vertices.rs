use crate::{Hypergraph, VertexId};

impl Hypergraph {
    /// Returns an iterator over all the vertices of the hypergraph.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.incidence.keys().copied()
    }

    /// Checks whether a vertex is part of the hypergraph.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.incidence.contains_key(&vertex)
    }
}
