//! Core types and traits for the Grit falling-sand engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Grit workspace:
//! the closed [`Material`] set, the [`MaterialSet`] bitset, tick IDs,
//! error types, and the [`TieBreak`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod material;
pub mod traits;

pub use error::{GridError, ParseMaterialError, SnapshotError};
pub use id::TickId;
pub use material::{Material, MaterialSet};
pub use traits::{AlwaysLeft, AlwaysRight, TieBreak};
