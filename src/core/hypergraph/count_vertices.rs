use crate::Hypergraph;

impl Hypergraph {
    /// Returns the number of vertices in the hypergraph.
    pub fn count_vertices(&self) -> usize {
        self.incidence.len()
    }
}
