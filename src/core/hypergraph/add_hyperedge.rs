use crate::{indexes::EdgeIndex, Hypergraph, VertexId};

impl Hypergraph {
    /// Adds a hyperedge as an array of vertex ids in the hypergraph.
    /// Returns the index of the hyperedge.
    ///
    /// Duplicate vertices within the edge collapse since an edge is a set.
    /// Duplicate edges across calls are preserved: they contribute to the
    /// co-occurrence multiplicity of their members.
    pub fn add_hyperedge(&mut self, vertices: Vec<VertexId>) -> EdgeIndex {
        let mut vertices = vertices;

        vertices.sort_unstable();
        vertices.dedup();

        let index = EdgeIndex(self.edges.len());

        // Update the vertices so that we keep directly track of the hyperedge.
        for &vertex in &vertices {
            self.incidence.entry(vertex).or_default().push(index);
        }

        self.edges.push(vertices);

        index
    }
}
