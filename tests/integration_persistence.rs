#![deny(unsafe_code, nonstandard_style)]

mod common;

use kgcore::{load_index, save_index, DiagonalIndex, NaiveIndex};

#[test]
fn snapshots_round_trip() {
    let hypergraph = common::pendant();
    let built = DiagonalIndex::build(&hypergraph);
    let reference = NaiveIndex::build(&hypergraph);

    let file = tempfile::NamedTempFile::new().unwrap();

    save_index(&built, file.path()).unwrap();

    let loaded: DiagonalIndex = load_index(file.path()).unwrap();

    for g in 1..=reference.max_g() {
        for k in 1..=reference.max_k(g) {
            assert_eq!(
                loaded.query(k, g),
                reference.query(k, g),
                "loaded snapshot disagrees at ({k},{g})"
            );
        }
    }
}

#[test]
fn loading_garbage_is_a_deserialization_error() {
    let file = tempfile::NamedTempFile::new().unwrap();

    std::fs::write(file.path(), b"not an index snapshot").unwrap();

    assert!(load_index::<NaiveIndex, _>(file.path()).is_err());
}

#[test]
fn loading_a_missing_file_is_an_io_error() {
    assert!(load_index::<NaiveIndex, _>("no/such/snapshot.idx").is_err());
}
