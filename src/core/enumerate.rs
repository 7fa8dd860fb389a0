use fixedbitset::FixedBitSet;

use crate::{collections::HashMap, Hypergraph, VertexId, VertexSet};

/// Iterator over the descending chain of (k,g)-cores for a fixed g:
/// C(1,g), C(2,g), … up to the last nonempty core.
///
/// Rather than re-peeling from scratch for every k, the iterator keeps the
/// previous stable core as its active set and drives each new threshold
/// with a removal frontier: only vertices that lost a neighbor since the
/// last sweep can newly violate the threshold, so only those are
/// re-checked. Active and frontier sets are dense bitmaps sized to the
/// largest vertex id; membership tests and per-sweep clears dominate the
/// inner loop.
///
/// Consecutive emitted cores may be equal: a set whose members all exceed
/// the next threshold survives it unchanged.
#[derive(Debug)]
pub struct CoreChain<'h> {
    hypergraph: &'h Hypergraph,
    g: usize,
    k: usize,
    active: FixedBitSet,
    frontier: FixedBitSet,
    population: usize,
    scratch: HashMap<VertexId, usize>,
    done: bool,
}

impl<'h> CoreChain<'h> {
    /// Creates the chain iterator for a fixed co-occurrence threshold g.
    pub fn new(hypergraph: &'h Hypergraph, g: usize) -> Self {
        let bits = hypergraph.max_vertex_id().map_or(0, |id| id.0 + 1);
        let mut active = FixedBitSet::with_capacity(bits);

        for vertex in hypergraph.vertices() {
            active.insert(vertex.0);
        }

        let population = active.count_ones(..);

        Self {
            hypergraph,
            g,
            k: 0,
            active,
            frontier: FixedBitSet::with_capacity(bits),
            population,
            scratch: HashMap::default(),
            done: g == 0 || population == 0,
        }
    }

    /// Runs sweeps at the current threshold until a full pass stages no
    /// removal, leaving the active set equal to C(k,g).
    fn stabilize(&mut self) {
        loop {
            // The first sweep at a fresh threshold scans every active
            // vertex; later sweeps only revisit the frontier.
            let scan: Vec<usize> = if self.frontier.is_clear() {
                self.active.ones().collect()
            } else {
                self.frontier
                    .ones()
                    .filter(|&vertex| self.active.contains(vertex))
                    .collect()
            };

            self.frontier.clear();

            let mut removals = Vec::new();

            for vertex in scan {
                // Active vertices always come from the incidence map.
                let count = self
                    .hypergraph
                    .valid_neighbor_count(VertexId(vertex), self.g, &self.active, &mut self.scratch)
                    .expect("active vertex must be incident");

                if count < self.k {
                    removals.push(vertex);
                }
            }

            if removals.is_empty() {
                break;
            }

            for &vertex in &removals {
                self.active.set(vertex, false);
            }

            self.population -= removals.len();

            // Every surviving co-member of a removed vertex may have lost a
            // neighbor: stage them all for the next sweep.
            for vertex in removals {
                let edges = self
                    .hypergraph
                    .edges_of(VertexId(vertex))
                    .expect("removed vertex was incident");

                for &edge_index in edges {
                    for &member in self.hypergraph.edge(edge_index) {
                        if self.active.contains(member.0) {
                            self.frontier.insert(member.0);
                        }
                    }
                }
            }

            // Nobody lost a neighbor, so the set is already stable.
            if self.frontier.is_clear() {
                break;
            }
        }
    }
}

impl Iterator for CoreChain<'_> {
    type Item = VertexSet;

    fn next(&mut self) -> Option<VertexSet> {
        if self.done {
            return None;
        }

        self.k += 1;

        // A (k,g)-core needs at least k + 1 vertices.
        if self.population <= self.k {
            self.done = true;

            return None;
        }

        self.stabilize();
        self.frontier.clear();

        if self.population == 0 {
            self.done = true;

            return None;
        }

        Some(self.active.ones().map(VertexId).collect())
    }
}

/// Collects the full chain [C(1,g), C(2,g), …] for a fixed g.
pub fn enumerate_cores_fixing_g(hypergraph: &Hypergraph, g: usize) -> Vec<VertexSet> {
    CoreChain::new(hypergraph, g).collect()
}

/// Variant chain used by the one-level builder: emits the difference
/// between consecutive stable cores and finishes with the last nonempty
/// core stored whole, so the union of any suffix reassembles the exact
/// core it starts at.
pub fn enumerate_residuals_fixing_g(hypergraph: &Hypergraph, g: usize) -> Vec<VertexSet> {
    let mut residuals = Vec::new();
    let mut previous: Option<VertexSet> = None;

    for core in CoreChain::new(hypergraph, g) {
        if let Some(previous) = previous.take() {
            residuals.push(previous.difference(&core).copied().collect());
        }

        previous = Some(core);
    }

    if let Some(last) = previous {
        residuals.push(last);
    }

    residuals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pendant() -> Hypergraph {
        let mut hypergraph = Hypergraph::new();

        for edge in [[1, 2, 3], [1, 2, 4], [1, 3, 4], [2, 3, 4]] {
            hypergraph.add_hyperedge(edge.into_iter().map(VertexId).collect());
        }

        hypergraph.add_hyperedge(vec![VertexId(5), VertexId(1)]);

        hypergraph
    }

    #[test]
    fn chain_matches_the_reference_peeler() {
        let hypergraph = pendant();

        for (index, core) in CoreChain::new(&hypergraph, 1).enumerate() {
            assert_eq!(core, crate::peel::find_kg_core(&hypergraph, index + 1, 1));
        }
    }

    #[test]
    fn chain_is_weakly_decreasing_and_ends_nonempty() {
        let hypergraph = pendant();
        let chain = enumerate_cores_fixing_g(&hypergraph, 1);

        assert_eq!(chain.len(), 3);

        for window in chain.windows(2) {
            assert!(window[1].is_subset(&window[0]));
        }

        assert!(!chain.last().unwrap().is_empty());
    }

    #[test]
    fn residual_suffixes_reassemble_cores() {
        let hypergraph = pendant();
        let chain = enumerate_cores_fixing_g(&hypergraph, 1);
        let residuals = enumerate_residuals_fixing_g(&hypergraph, 1);

        assert_eq!(chain.len(), residuals.len());

        for k in 0..residuals.len() {
            let mut reassembled = VertexSet::default();

            for residual in &residuals[k..] {
                reassembled.extend(residual.iter().copied());
            }

            assert_eq!(reassembled, chain[k]);
        }
    }

    #[test]
    fn oversized_g_yields_an_empty_chain() {
        let hypergraph = pendant();

        assert!(enumerate_cores_fixing_g(&hypergraph, 3).is_empty());
        assert!(enumerate_cores_fixing_g(&hypergraph, 0).is_empty());
    }
}
