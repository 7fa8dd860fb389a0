#![deny(unsafe_code, nonstandard_style)]

use kgcore::{Hypergraph, VertexId};

pub fn hypergraph_from(edges: &[&[usize]]) -> Hypergraph {
    let mut hypergraph = Hypergraph::new();

    for edge in edges {
        hypergraph.add_hyperedge(edge.iter().copied().map(VertexId).collect());
    }

    hypergraph
}

/// A single ternary edge.
pub fn single_edge() -> Hypergraph {
    hypergraph_from(&[&[1, 2, 3]])
}

/// A triangle made of three pairwise binary edges.
pub fn pairwise_triangle() -> Hypergraph {
    hypergraph_from(&[&[1, 2], &[2, 3], &[1, 3]])
}

/// A triangle whose every tie is doubled, so g=2 is sustainable.
pub fn strong_tie_triangle() -> Hypergraph {
    hypergraph_from(&[&[1, 2], &[1, 2], &[2, 3], &[2, 3], &[1, 3], &[1, 3]])
}

/// A dense group of four with a pendant vertex hanging off it.
pub fn pendant() -> Hypergraph {
    hypergraph_from(&[&[1, 2, 3], &[1, 2, 4], &[1, 3, 4], &[2, 3, 4], &[5, 1]])
}

/// Two ternary edges with no vertex in common.
pub fn disconnected() -> Hypergraph {
    hypergraph_from(&[&[1, 2, 3], &[4, 5, 6]])
}

/// A doubled clique of four plus two satellites tied to each other and
/// unevenly to the clique. The satellites survive different thresholds
/// along k and g, which makes the diagonal overlap between grid cells
/// nonempty and exercises the aux residuals for real.
pub fn bridged_satellites() -> Hypergraph {
    hypergraph_from(&[
        &[1, 2], &[1, 2], &[1, 3], &[1, 3], &[1, 4], &[1, 4],
        &[2, 3], &[2, 3], &[2, 4], &[2, 4], &[3, 4], &[3, 4],
        &[5, 6], &[5, 6], &[5, 1], &[5, 1], &[5, 2],
        &[6, 1], &[6, 1], &[6, 2],
    ])
}

/// A triangle of single ties next to a doubled pair. The g=2 row is much
/// shorter than the g=1 row, which forces the diagonal pass to allocate
/// trailing aux nodes.
pub fn triangle_with_tied_pair() -> Hypergraph {
    hypergraph_from(&[&[1, 2], &[2, 3], &[1, 3], &[7, 8], &[7, 8]])
}

pub fn all_fixtures() -> Vec<(&'static str, Hypergraph)> {
    vec![
        ("single_edge", single_edge()),
        ("pairwise_triangle", pairwise_triangle()),
        ("strong_tie_triangle", strong_tie_triangle()),
        ("pendant", pendant()),
        ("disconnected", disconnected()),
        ("bridged_satellites", bridged_satellites()),
        ("triangle_with_tied_pair", triangle_with_tied_pair()),
    ]
}

pub fn vertices(ids: &[usize]) -> kgcore::VertexSet {
    ids.iter().copied().map(VertexId).collect()
}
