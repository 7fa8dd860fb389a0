use serde::{Deserialize, Serialize};

use crate::{
    index::{collect_starters, in_range, IndexRow},
    Hypergraph, OneLevelIndex, VertexSet,
};

/// One-level index augmented with vertical links.
///
/// Every node with a counterpart at the same k in the g+1 row points to
/// it, and its payload is replaced by the vertical residual: whatever the
/// counterpart's own chain would re-materialize is stored only once, one
/// row down. A query walks the vertical links first, then unions every
/// horizontal suffix it reached.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct JumpIndex {
    pub(crate) levels: Vec<IndexRow>,
}

impl JumpIndex {
    /// Builds by compressing a fresh one-level index.
    pub fn build(hypergraph: &Hypergraph) -> Self {
        Self::from_one_level(OneLevelIndex::build(hypergraph))
    }

    /// Post-processes a one-level index in place: links each node to its
    /// g+1 counterpart and keeps only the difference against it.
    pub fn from_one_level(index: OneLevelIndex) -> Self {
        let mut levels = index.levels;

        for g in 0..levels.len().saturating_sub(1) {
            let (current_rows, next_rows) = levels.split_at_mut(g + 1);
            let current = &mut current_rows[g];
            let next = &next_rows[0];
            let limit = next.cores.min(current.cores);

            for position in 0..limit {
                let node = &mut current.nodes[position];
                let target = &next.nodes[position].payload;

                node.jump = Some(position);
                node.payload.retain(|vertex| !target.contains(vertex));
            }
        }

        Self { levels }
    }

    /// Reassembles the exact (k,g)-core: collect the vertical chain of
    /// starters, then union every payload on each starter's horizontal
    /// suffix. Out-of-range parameters yield the empty set.
    pub fn query(&self, k: usize, g: usize) -> VertexSet {
        let mut core = VertexSet::default();

        if !in_range(&self.levels, k, g) {
            return core;
        }

        for (row, position) in collect_starters(&self.levels, g - 1, k - 1) {
            for node in &self.levels[row].nodes[position..] {
                core.extend(node.payload.iter().copied());
            }
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
