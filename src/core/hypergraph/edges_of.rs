use crate::{errors::KgCoreError, indexes::EdgeIndex, Hypergraph, VertexId};

impl Hypergraph {
    /// Gets the hyperedges containing a vertex.
    pub fn edges_of(&self, vertex: VertexId) -> Result<&[EdgeIndex], KgCoreError> {
        self.incidence
            .get(&vertex)
            .map(Vec::as_slice)
            .ok_or(KgCoreError::UnknownVertex(vertex))
    }
}
