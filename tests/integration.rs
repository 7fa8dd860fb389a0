#![deny(unsafe_code, nonstandard_style)]

mod common;

use common::{
    disconnected, pairwise_triangle, pendant, single_edge, strong_tie_triangle, vertices,
};
use kgcore::find_kg_core;

#[test]
fn single_edge_cores() {
    let hypergraph = single_edge();

    assert_eq!(
        find_kg_core(&hypergraph, 1, 1),
        vertices(&[1, 2, 3]),
        "every member of the edge has two 1-neighbors"
    );
    assert_eq!(
        find_kg_core(&hypergraph, 2, 1),
        vertices(&[1, 2, 3]),
        "two neighbors each, so k=2 holds as well"
    );
    assert_eq!(
        find_kg_core(&hypergraph, 3, 1),
        vertices(&[]),
        "three neighbors would need a fourth vertex"
    );
    assert_eq!(
        find_kg_core(&hypergraph, 1, 2),
        vertices(&[]),
        "no pair shares two edges"
    );
}

#[test]
fn pairwise_triangle_cores() {
    let hypergraph = pairwise_triangle();

    assert_eq!(find_kg_core(&hypergraph, 2, 1), vertices(&[1, 2, 3]));
    assert_eq!(find_kg_core(&hypergraph, 3, 1), vertices(&[]));
    assert_eq!(find_kg_core(&hypergraph, 1, 2), vertices(&[]));
}

#[test]
fn strong_tie_triangle_cores() {
    let hypergraph = strong_tie_triangle();

    assert_eq!(
        find_kg_core(&hypergraph, 2, 2),
        vertices(&[1, 2, 3]),
        "every tie is doubled, so both thresholds hold"
    );
    assert_eq!(find_kg_core(&hypergraph, 2, 3), vertices(&[]));
}

#[test]
fn pendant_vertex_is_peeled() {
    let hypergraph = pendant();

    assert_eq!(find_kg_core(&hypergraph, 1, 1), vertices(&[1, 2, 3, 4, 5]));
    assert_eq!(
        find_kg_core(&hypergraph, 3, 1),
        vertices(&[1, 2, 3, 4]),
        "vertex 5 has a single neighbor and must be peeled"
    );
}

#[test]
fn disconnected_components_peel_independently() {
    let hypergraph = disconnected();

    assert_eq!(
        find_kg_core(&hypergraph, 2, 1),
        vertices(&[1, 2, 3, 4, 5, 6])
    );
    assert_eq!(find_kg_core(&hypergraph, 3, 1), vertices(&[]));
}

#[test]
fn cores_are_monotone_in_both_thresholds() {
    for (name, hypergraph) in common::all_fixtures() {
        for g in 1..=3 {
            for k in 1..=4 {
                let core = find_kg_core(&hypergraph, k, g);
                let tighter_k = find_kg_core(&hypergraph, k + 1, g);
                let tighter_g = find_kg_core(&hypergraph, k, g + 1);

                assert!(
                    tighter_k.is_subset(&core),
                    "{name}: ({},{g})-core must be within the ({k},{g})-core",
                    k + 1
                );
                assert!(
                    tighter_g.is_subset(&core),
                    "{name}: ({k},{})-core must be within the ({k},{g})-core",
                    g + 1
                );
            }
        }
    }
}
