use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{enumerate::enumerate_cores_fixing_g, Hypergraph, VertexSet};

/// Fully materialized (k,g)-core index: one stored core per grid cell,
/// answered by direct lookup.
///
/// This is the reference representation the compressed variants are
/// validated against, and by far the largest one in memory.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NaiveIndex {
    levels: Vec<Vec<VertexSet>>,
}

impl NaiveIndex {
    /// Builds the index by enumerating every per-g chain until one dries up.
    pub fn build(hypergraph: &Hypergraph) -> Self {
        let mut levels = Vec::new();

        for g in 1.. {
            let chain = enumerate_cores_fixing_g(hypergraph, g);

            if chain.is_empty() {
                break;
            }

            debug!("Materialized {} cores for g={g}", chain.len());
            levels.push(chain);
        }

        Self { levels }
    }

    /// Returns the exact (k,g)-core. Out-of-range parameters yield the
    /// empty set; they are not errors.
    pub fn query(&self, k: usize, g: usize) -> VertexSet {
        self.get(k, g).cloned().unwrap_or_default()
    }

    /// Borrowing variant of [`query`](NaiveIndex::query) for in-range
    /// parameters.
    pub fn get(&self, k: usize, g: usize) -> Option<&VertexSet> {
        if k < 1 || g < 1 {
            return None;
        }

        self.levels.get(g - 1)?.get(k - 1)
    }

    /// Largest g with a nonempty chain.
    pub fn max_g(&self) -> usize {
        self.levels.len()
    }

    /// Largest k with a nonempty core at the given g.
    pub fn max_k(&self, g: usize) -> usize {
        if g < 1 {
            return 0;
        }

        self.levels.get(g - 1).map_or(0, Vec::len)
    }

    /// Total number of stored vertex references.
    pub fn entry_count(&self) -> usize {
        self.levels.iter().flatten().map(VertexSet::len).sum()
    }

    /// Sizes of every stored core together with its grid coordinates,
    /// used by the benchmark harness to pick percentile queries.
    pub fn leaf_sizes(&self) -> Vec<(usize, usize, usize)> {
        let mut leaves = Vec::new();

        for (row, chain) in self.levels.iter().enumerate() {
            for (position, core) in chain.iter().enumerate() {
                leaves.push((position + 1, row + 1, core.len()));
            }
        }

        leaves
    }
}
