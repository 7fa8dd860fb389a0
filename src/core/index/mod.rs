pub mod diagonal;
pub mod jump;
pub mod naive;
pub mod one_level;

use serde::{Deserialize, Serialize};

use crate::{collections::HashMap, VertexSet};

/// A single node of a compressed index row.
///
/// The payload meaning depends on the representation: a horizontal
/// residual for one-level rows, additionally stripped of the vertical
/// residual for jump rows, and further stripped of diagonal overlaps
/// (exported into `aux`) for diagonal rows.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub(crate) struct IndexNode {
    pub(crate) payload: VertexSet,
    /// Vertical link: position of the counterpart node in the row below
    /// (the g+1 row). Horizontal links are implicit, each node's successor
    /// is the next entry of its row.
    pub(crate) jump: Option<usize>,
    /// Diagonal residuals keyed by diagonal depth, populated by the
    /// diagonal pass only.
    pub(crate) aux: HashMap<usize, VertexSet>,
}

/// One g-row of an index: the horizontal chain for that threshold.
///
/// The first `cores` nodes are the k-positions of the grid. The diagonal
/// pass may append trailing nodes past that bound; they carry only aux
/// residuals, are reachable through vertical links and horizontal walks,
/// and are never addressable as a query position themselves.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct IndexRow {
    pub(crate) nodes: Vec<IndexNode>,
    pub(crate) cores: usize,
}

/// Checks that (k,g) falls inside the built grid, trailing nodes excluded.
pub(crate) fn in_range(levels: &[IndexRow], k: usize, g: usize) -> bool {
    g >= 1 && g <= levels.len() && k >= 1 && k <= levels[g - 1].cores
}

/// Collects the walk starters for the jump and diagonal traversals:
/// the (row, position) pairs reached by following vertical links from the
/// queried node all the way down.
pub(crate) fn collect_starters(
    levels: &[IndexRow],
    row: usize,
    position: usize,
) -> Vec<(usize, usize)> {
    let mut starters = Vec::new();
    let (mut row, mut position) = (row, position);

    loop {
        starters.push((row, position));

        match levels[row].nodes[position].jump {
            Some(target) => {
                row += 1;
                position = target;
            }
            None => break,
        }
    }

    starters
}
