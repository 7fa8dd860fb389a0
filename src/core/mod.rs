#[doc(hidden)]
pub mod collections;
#[doc(hidden)]
pub mod enumerate;
#[doc(hidden)]
pub mod errors;
#[doc(hidden)]
pub mod file;
#[doc(hidden)]
pub mod hypergraph;
#[doc(hidden)]
pub mod index;
#[doc(hidden)]
pub mod indexes;
#[doc(hidden)]
pub mod peel;
#[doc(hidden)]
pub mod persistence;

#[doc(inline)]
pub use self::{
    collections::VertexSet,
    enumerate::{enumerate_cores_fixing_g, enumerate_residuals_fixing_g, CoreChain},
    errors::KgCoreError,
    file::load_hypergraph,
    hypergraph::{Hyperedge, Hypergraph},
    index::{diagonal::DiagonalIndex, jump::JumpIndex, naive::NaiveIndex, one_level::OneLevelIndex},
    indexes::{EdgeIndex, VertexId},
    peel::find_kg_core,
    persistence::{load_index, save_index},
};
