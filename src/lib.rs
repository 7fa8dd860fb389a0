#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![deny(unsafe_code, nonstandard_style)]
#![forbid(rust_2021_compatibility)]
#![warn(missing_debug_implementations, missing_docs, unreachable_pub)]

//! Kgcore answers (k,g)-core queries on [hypergraphs](https://en.wikipedia.org/wiki/Hypergraph).
//!
//! > The (k,g)-core of a hypergraph is the maximal set of vertices in which
//! > every member has at least k neighbors co-occurring with it in at least
//! > g hyperedges.
//!
//! ## Features
//!
//! This library enables you to:
//!
//! - peel the exact (k,g)-core of a hypergraph for any pair of thresholds
//! - enumerate, for a fixed g, the full descending chain of cores with a
//!   single frontier-driven peeling run
//! - build four interchangeable index representations over the whole
//!   (k,g) grid - **naive**, **one-level**, **jump** and **diagonal** -
//!   trading memory for query work while always reconstructing the exact
//!   same cores
//! - snapshot any index to disk and load it back
//!
//! ## Example
//!
//! ```
//! use kgcore::{DiagonalIndex, Hypergraph, NaiveIndex, VertexId};
//!
//! // A tightly knit group with a pendant vertex attached to it.
//! let mut hypergraph = Hypergraph::new();
//!
//! hypergraph.add_hyperedge(vec![VertexId(1), VertexId(2), VertexId(3)]);
//! hypergraph.add_hyperedge(vec![VertexId(1), VertexId(2), VertexId(4)]);
//! hypergraph.add_hyperedge(vec![VertexId(1), VertexId(3), VertexId(4)]);
//! hypergraph.add_hyperedge(vec![VertexId(2), VertexId(3), VertexId(4)]);
//! hypergraph.add_hyperedge(vec![VertexId(5), VertexId(1)]);
//!
//! // The naive index materializes every core of the grid.
//! let naive = NaiveIndex::build(&hypergraph);
//!
//! // Vertex 5 only survives the weakest threshold.
//! assert!(naive.query(1, 1).contains(&VertexId(5)));
//! assert!(!naive.query(3, 1).contains(&VertexId(5)));
//!
//! // Queries beyond the built grid return the empty set.
//! assert!(naive.query(4, 1).is_empty());
//!
//! // The compressed representations reconstruct the exact same cores.
//! let diagonal = DiagonalIndex::build(&hypergraph);
//!
//! assert_eq!(diagonal.query(3, 1), naive.query(3, 1));
//! assert_eq!(diagonal.query(2, 2), naive.query(2, 2));
//! ```

#[doc(hidden)]
pub mod core;

// Reexport of the public API.
#[doc(inline)]
pub use crate::core::*;
