use crate::Hypergraph;

impl Hypergraph {
    /// Returns the number of hyperedges in the hypergraph.
    pub fn count_hyperedges(&self) -> usize {
        self.edges.len()
    }
}
