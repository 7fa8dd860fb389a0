use crate::{Hypergraph, VertexId};

impl Hypergraph {
    /// Returns the largest vertex id in the hypergraph, if any.
    ///
    /// The peeling machinery sizes its dense active and frontier sets to
    /// this bound.
    pub fn max_vertex_id(&self) -> Option<VertexId> {
        self.incidence.keys().copied().max()
    }
}
