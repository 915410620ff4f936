//! Grid storage for Grit simulations.
//!
//! This crate owns the [`Grid`], a fixed-size 2D array of
//! [`Material`](grit_core::Material) cells, along with the deep-copy
//! [`Snapshot`] used by save/load and the FNV-1a fingerprint used for
//! cheap equality and determinism checks.
//!
//! The grid has no behaviour beyond storage and bounds-checked access;
//! every movement rule lives in `grit-engine`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod hash;
pub mod snapshot;

pub use grid::Grid;
pub use snapshot::Snapshot;
