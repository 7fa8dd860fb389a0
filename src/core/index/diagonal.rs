use serde::{Deserialize, Serialize};

use crate::{
    index::{collect_starters, in_range, IndexNode, IndexRow},
    Hypergraph, JumpIndex, VertexSet,
};

/// Jump index additionally compressed along the grid diagonal.
///
/// The overlap between the node at (k+1,g) and its diagonal predecessor's
/// counterpart at (k,g+1) is removed from the payload and exported into an
/// integer-indexed aux residual on the counterpart's horizontal successor.
/// The aux key records the diagonal depth the residual was inherited from;
/// queries consume a growing prefix of aux entries matching their walk
/// counters, so the correspondence must be exact.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DiagonalIndex {
    levels: Vec<IndexRow>,
}

impl DiagonalIndex {
    /// Builds by compressing a fresh jump index.
    pub fn build(hypergraph: &Hypergraph) -> Self {
        Self::from_jump(JumpIndex::build(hypergraph))
    }

    /// Post-processes a jump index in place, row by row in increasing g.
    ///
    /// Each pass mutates the current row and appends at most trailing aux
    /// nodes to the row below; rows further down are untouched until their
    /// own turn.
    pub fn from_jump(index: JumpIndex) -> Self {
        let mut levels = index.levels;

        for g in 0..levels.len() {
            if levels[g].nodes.is_empty() {
                continue;
            }

            // A single-node chain carries no diagonal, and no deeper row
            // can be longer than this one.
            if levels[g].nodes.len() == 1 {
                break;
            }

            let mut head = 0;

            for _ in 0..levels[g].cores - 1 {
                let has_next = head + 1 < levels[g].nodes.len();
                let jump = levels[g].nodes[head].jump;

                if let (true, Some(diag)) = (has_next, jump) {
                    head += 1;

                    let (current_rows, next_rows) = levels.split_at_mut(g + 1);
                    let row = &mut current_rows[g];
                    let below = &mut next_rows[0];

                    let overlap: VertexSet = row.nodes[head]
                        .payload
                        .intersection(&below.nodes[diag].payload)
                        .copied()
                        .collect();

                    // The diagonal target needs a successor to carry the
                    // exported residuals; allocate a trailing node when it
                    // is the row tail, and reroute the vertical link so
                    // queries keep walking through it.
                    if diag + 1 == below.nodes.len() {
                        below.nodes.push(IndexNode::default());
                        row.nodes[head].jump = Some(diag + 1);
                    }

                    let successor = diag + 1;

                    // Push inherited residuals one diagonal hop deeper.
                    let depths: Vec<usize> = below.nodes[diag].aux.keys().copied().collect();

                    for depth in depths {
                        if row.nodes[head].aux.contains_key(&depth) {
                            let inherited: VertexSet = below.nodes[diag].aux[&depth]
                                .intersection(&row.nodes[head].aux[&depth])
                                .copied()
                                .collect();

                            if let Some(own) = row.nodes[head].aux.get_mut(&depth) {
                                own.retain(|vertex| !inherited.contains(vertex));
                            }

                            below.nodes[successor].aux.insert(depth + 1, inherited);
                        }
                    }

                    row.nodes[head]
                        .payload
                        .retain(|vertex| !overlap.contains(vertex));
                    below.nodes[successor].aux.insert(1, overlap);

                    // The successor along this row may already hold an
                    // aux[1] from the deeper pass; subtract it now to
                    // avoid double-counting on the next step.
                    if head + 1 < row.nodes.len() {
                        let (left, right) = row.nodes.split_at_mut(head + 1);

                        if let Some(residual) = right[0].aux.get(&1) {
                            left[head].payload.retain(|vertex| !residual.contains(vertex));
                        }
                    }
                } else {
                    // The diagonal is exhausted: walk the remainder of the
                    // chain, consuming successor residuals so the query
                    // walk stays exact.
                    let row = &mut levels[g];

                    while head + 1 < row.nodes.len() {
                        let (left, right) = row.nodes.split_at_mut(head + 1);
                        let node = &mut left[head];
                        let next = &right[0];

                        for (&depth, residual) in &next.aux {
                            if depth == 1 {
                                node.payload.retain(|vertex| !residual.contains(vertex));
                            } else if let Some(own) = node.aux.get_mut(&(depth - 1)) {
                                own.retain(|vertex| !residual.contains(vertex));
                            }
                        }

                        head += 1;
                    }
                }
            }
        }

        Self { levels }
    }

    /// Reassembles the exact (k,g)-core.
    ///
    /// Starters are collected through the vertical links as in the jump
    /// traversal. A starter at vertical depth s contributes its payload
    /// plus aux[1..=s]; every horizontal step cnt (counted from 1) then
    /// contributes the node payload plus aux[1..=cnt]. Out-of-range
    /// parameters yield the empty set.
    pub fn query(&self, k: usize, g: usize) -> VertexSet {
        let mut core = VertexSet::default();

        if !in_range(&self.levels, k, g) {
            return core;
        }

        for (depth, &(row, start)) in collect_starters(&self.levels, g - 1, k - 1)
            .iter()
            .enumerate()
        {
            let nodes = &self.levels[row].nodes;
            let starter = &nodes[start];

            core.extend(starter.payload.iter().copied());

            if depth > 0 {
                for i in 1..=depth {
                    if let Some(residual) = starter.aux.get(&i) {
                        core.extend(residual.iter().copied());
                    }
                }
            }

            for (offset, node) in nodes[start + 1..].iter().enumerate() {
                core.extend(node.payload.iter().copied());

                for i in 1..=offset + 1 {
                    if let Some(residual) = node.aux.get(&i) {
                        core.extend(residual.iter().copied());
                    }
                }
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

    /// Total number of stored vertex references, aux residuals included.
    pub fn entry_count(&self) -> usize {
        self.levels
            .iter()
            .flat_map(|row| &row.nodes)
            .map(|node| {
                node.payload.len() + node.aux.values().map(VertexSet::len).sum::<usize>()
            })
            .sum()
    }
}
