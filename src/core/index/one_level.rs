use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    enumerate::enumerate_residuals_fixing_g,
    index::{in_range, IndexNode, IndexRow},
    Hypergraph, VertexSet,
};

/// Index storing, per (k,g), only the horizontal residual
/// C(k,g) \ C(k+1,g), with the last nonempty core of each row stored
/// whole. A query reassembles the exact core by unioning the row suffix.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OneLevelIndex {
    pub(crate) levels: Vec<IndexRow>,
}

impl OneLevelIndex {
    /// Builds the index from per-g residual chains.
    pub fn build(hypergraph: &Hypergraph) -> Self {
        let mut levels = Vec::new();

        for g in 1.. {
            let residuals = enumerate_residuals_fixing_g(hypergraph, g);

            if residuals.is_empty() {
                break;
            }

            debug!("Stored {} residuals for g={g}", residuals.len());

            let cores = residuals.len();
            let nodes = residuals
                .into_iter()
                .map(|payload| IndexNode {
                    payload,
                    ..IndexNode::default()
                })
                .collect();

            levels.push(IndexRow { nodes, cores });
        }

        Self { levels }
    }

    /// Reassembles the exact (k,g)-core by unioning every residual from
    /// position k to the end of the g-row. Out-of-range parameters yield
    /// the empty set.
    pub fn query(&self, k: usize, g: usize) -> VertexSet {
        let mut core = VertexSet::default();

        if !in_range(&self.levels, k, g) {
            return core;
        }

        for node in &self.levels[g - 1].nodes[k - 1..] {
            core.extend(node.payload.iter().copied());
        }

        core
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

        self.levels.get(g - 1).map_or(0, |row| row.cores)
    }

    /// Total number of stored vertex references.
    pub fn entry_count(&self) -> usize {
        self.levels
            .iter()
            .flat_map(|row| &row.nodes)
            .map(|node| node.payload.len())
            .sum()
    }
}
