use fixedbitset::FixedBitSet;

use crate::{collections::HashMap, Hypergraph, VertexId, VertexSet};

/// Computes the (k,g)-core of a hypergraph from scratch by fixed-point
/// peeling: every vertex with fewer than `k` g-neighbors among the
/// survivors is removed, until a full pass removes nothing.
///
/// This is the reference computation the index representations are
/// validated against. `k` or `g` of zero yields the empty set, as does any
/// `k` exceeding what the hypergraph can sustain.
pub fn find_kg_core(hypergraph: &Hypergraph, k: usize, g: usize) -> VertexSet {
    if k == 0 || g == 0 {
        return VertexSet::default();
    }

    let Some(max_id) = hypergraph.max_vertex_id() else {
        return VertexSet::default();
    };

    let mut active = FixedBitSet::with_capacity(max_id.0 + 1);

    for vertex in hypergraph.vertices() {
        active.insert(vertex.0);
    }

    let mut scratch = HashMap::default();

    loop {
        let mut removals = Vec::new();

        for vertex in active.ones().map(VertexId) {
            // Active vertices always come from the incidence map.
            let count = hypergraph
                .valid_neighbor_count(vertex, g, &active, &mut scratch)
                .expect("active vertex must be incident");

            if count < k {
                removals.push(vertex);
            }
        }

        if removals.is_empty() {
            break;
        }

        for vertex in removals {
            active.set(vertex.0, false);
        }
    }

    active.ones().map(VertexId).collect()
}
