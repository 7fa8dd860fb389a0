use fixedbitset::FixedBitSet;

use crate::{collections::HashMap, errors::KgCoreError, Hypergraph, VertexId};

impl Hypergraph {
    /// Gets the g-neighbors of a vertex: every other vertex sharing at least
    /// `g` hyperedges with it, mapped to the exact co-occurrence count.
    pub fn neighbor_counts(
        &self,
        vertex: VertexId,
        g: usize,
    ) -> Result<HashMap<VertexId, usize>, KgCoreError> {
        let mut counts = HashMap::default();

        for &edge_index in self.edges_of(vertex)? {
            for &member in self.edge(edge_index) {
                if member != vertex {
                    *counts.entry(member).or_insert(0) += 1;
                }
            }
        }

        counts.retain(|_, count| *count >= g);

        Ok(counts)
    }

    /// Same as [`neighbor_counts`](Hypergraph::neighbor_counts) but counting
    /// only co-members still present in the `active` set.
    ///
    /// Every incident edge is traversed in full: the filter applies to the
    /// candidate neighbors, never to the edges. Edges never change during
    /// peeling, the set of live vertices does.
    pub fn neighbor_counts_within(
        &self,
        vertex: VertexId,
        g: usize,
        active: &FixedBitSet,
    ) -> Result<HashMap<VertexId, usize>, KgCoreError> {
        let mut counts = HashMap::default();

        self.accumulate_active_counts(vertex, active, &mut counts)?;
        counts.retain(|_, count| *count >= g);

        Ok(counts)
    }

    /// Number of distinct g-neighbors of a vertex within the `active` set.
    ///
    /// The scratch map is owned by the caller and reused across vertices:
    /// the peeling loops call this once per scanned vertex and the clears
    /// dominate when the map reallocates.
    pub(crate) fn valid_neighbor_count(
        &self,
        vertex: VertexId,
        g: usize,
        active: &FixedBitSet,
        scratch: &mut HashMap<VertexId, usize>,
    ) -> Result<usize, KgCoreError> {
        scratch.clear();
        self.accumulate_active_counts(vertex, active, scratch)?;

        Ok(scratch.values().filter(|&&count| count >= g).count())
    }

    fn accumulate_active_counts(
        &self,
        vertex: VertexId,
        active: &FixedBitSet,
        counts: &mut HashMap<VertexId, usize>,
    ) -> Result<(), KgCoreError> {
        for &edge_index in self.edges_of(vertex)? {
            for &member in self.edge(edge_index) {
                if member != vertex && active.contains(member.0) {
                    *counts.entry(member).or_insert(0) += 1;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_ties() -> Hypergraph {
        let mut hypergraph = Hypergraph::new();

        for _ in 0..2 {
            hypergraph.add_hyperedge(vec![VertexId(1), VertexId(2)]);
            hypergraph.add_hyperedge(vec![VertexId(2), VertexId(3)]);
        }

        hypergraph.add_hyperedge(vec![VertexId(1), VertexId(3)]);

        hypergraph
    }

    #[test]
    fn counts_respect_multiplicity() {
        let hypergraph = strong_ties();

        let counts = hypergraph.neighbor_counts(VertexId(2), 2).unwrap();

        assert_eq!(counts.get(&VertexId(1)), Some(&2));
        assert_eq!(counts.get(&VertexId(3)), Some(&2));

        let counts = hypergraph.neighbor_counts(VertexId(1), 2).unwrap();

        assert_eq!(counts.get(&VertexId(2)), Some(&2));
        assert_eq!(counts.get(&VertexId(3)), None, "single shared edge is below g=2");
    }

    #[test]
    fn active_filter_applies_to_neighbors_not_edges() {
        let hypergraph = strong_ties();
        let mut active = FixedBitSet::with_capacity(4);

        active.insert(1);
        active.insert(2);

        let counts = hypergraph
            .neighbor_counts_within(VertexId(2), 1, &active)
            .unwrap();

        assert_eq!(counts.get(&VertexId(1)), Some(&2));
        assert_eq!(counts.get(&VertexId(3)), None, "vertex 3 is not active");
    }

    #[test]
    fn unknown_vertex_is_an_error() {
        let hypergraph = strong_ties();

        assert!(hypergraph.neighbor_counts(VertexId(42), 1).is_err());
    }
}
