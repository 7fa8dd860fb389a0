#![deny(unsafe_code, nonstandard_style)]

mod common;

use kgcore::{
    find_kg_core, DiagonalIndex, JumpIndex, NaiveIndex, OneLevelIndex,
};

/// Every representation must reconstruct the exact core the reference
/// peeler computes, for every cell of the grid and a margin beyond it.
#[test]
fn all_representations_agree_with_the_peeler() {
    for (name, hypergraph) in common::all_fixtures() {
        let naive = NaiveIndex::build(&hypergraph);
        let one_level = OneLevelIndex::build(&hypergraph);
        let jump = JumpIndex::build(&hypergraph);
        let diagonal = DiagonalIndex::build(&hypergraph);

        for g in 1..=naive.max_g() + 2 {
            for k in 1..=naive.max_k(g) + 2 {
                let expected = find_kg_core(&hypergraph, k, g);

                assert_eq!(
                    naive.query(k, g),
                    expected,
                    "{name}: naive disagrees with the peeler at ({k},{g})"
                );
                assert_eq!(
                    one_level.query(k, g),
                    expected,
                    "{name}: one-level disagrees with the peeler at ({k},{g})"
                );
                assert_eq!(
                    jump.query(k, g),
                    expected,
                    "{name}: jump disagrees with the peeler at ({k},{g})"
                );
                assert_eq!(
                    diagonal.query(k, g),
                    expected,
                    "{name}: diagonal disagrees with the peeler at ({k},{g})"
                );
            }
        }
    }
}

#[test]
fn out_of_range_queries_return_the_empty_set() {
    for (name, hypergraph) in common::all_fixtures() {
        let naive = NaiveIndex::build(&hypergraph);
        let one_level = OneLevelIndex::build(&hypergraph);
        let jump = JumpIndex::build(&hypergraph);
        let diagonal = DiagonalIndex::build(&hypergraph);

        let probes = [
            (0, 1),
            (1, 0),
            (0, 0),
            (naive.max_k(1) + 1, 1),
            (1, naive.max_g() + 1),
            (usize::MAX, usize::MAX),
        ];

        for (k, g) in probes {
            assert!(naive.query(k, g).is_empty(), "{name}: naive at ({k},{g})");
            assert!(
                one_level.query(k, g).is_empty(),
                "{name}: one-level at ({k},{g})"
            );
            assert!(jump.query(k, g).is_empty(), "{name}: jump at ({k},{g})");
            assert!(
                diagonal.query(k, g).is_empty(),
                "{name}: diagonal at ({k},{g})"
            );
        }
    }
}

/// Rebuilding on the same hypergraph must answer every query with a
/// value-identical set.
#[test]
fn builds_are_deterministic() {
    for (name, hypergraph) in common::all_fixtures() {
        let first = DiagonalIndex::build(&hypergraph);
        let second = DiagonalIndex::build(&hypergraph);

        for g in 1..=first.max_g() {
            for k in 1..=first.max_k(g) {
                assert_eq!(
                    first.query(k, g),
                    second.query(k, g),
                    "{name}: repeated builds disagree at ({k},{g})"
                );
            }
        }
    }
}

/// The grid bounds must be identical across representations.
#[test]
fn representations_share_the_grid_shape() {
    for (name, hypergraph) in common::all_fixtures() {
        let naive = NaiveIndex::build(&hypergraph);
        let one_level = OneLevelIndex::build(&hypergraph);
        let jump = JumpIndex::build(&hypergraph);
        let diagonal = DiagonalIndex::build(&hypergraph);

        assert_eq!(naive.max_g(), one_level.max_g(), "{name}");
        assert_eq!(naive.max_g(), jump.max_g(), "{name}");
        assert_eq!(naive.max_g(), diagonal.max_g(), "{name}");

        for g in 1..=naive.max_g() {
            assert_eq!(naive.max_k(g), one_level.max_k(g), "{name} at g={g}");
            assert_eq!(naive.max_k(g), jump.max_k(g), "{name} at g={g}");
            assert_eq!(naive.max_k(g), diagonal.max_k(g), "{name} at g={g}");
        }
    }
}

/// Progressive upgrades must behave exactly like from-scratch builds.
#[test]
fn progressive_upgrades_match_fresh_builds() {
    for (name, hypergraph) in common::all_fixtures() {
        let naive = NaiveIndex::build(&hypergraph);
        let jump = JumpIndex::from_one_level(OneLevelIndex::build(&hypergraph));
        let diagonal = DiagonalIndex::from_jump(JumpIndex::from_one_level(
            OneLevelIndex::build(&hypergraph),
        ));

        for g in 1..=naive.max_g() {
            for k in 1..=naive.max_k(g) {
                assert_eq!(jump.query(k, g), naive.query(k, g), "{name} at ({k},{g})");
                assert_eq!(
                    diagonal.query(k, g),
                    naive.query(k, g),
                    "{name} at ({k},{g})"
                );
            }
        }
    }
}

/// Compression must never inflate the stored data: each step stores at
/// most as many vertex references as the previous one.
#[test]
fn compression_is_monotone_in_storage() {
    for (name, hypergraph) in common::all_fixtures() {
        let naive = NaiveIndex::build(&hypergraph);
        let one_level = OneLevelIndex::build(&hypergraph);
        let jump = JumpIndex::build(&hypergraph);

        assert!(
            one_level.entry_count() <= naive.entry_count(),
            "{name}: one-level stores more than naive"
        );
        assert!(
            jump.entry_count() <= one_level.entry_count(),
            "{name}: jump stores more than one-level"
        );
    }
}
