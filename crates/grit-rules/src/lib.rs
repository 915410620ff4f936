//! Material rule tables for Grit simulations.
//!
//! Each mobile material carries a [`MaterialRules`] entry: the set of
//! materials that block it, the set it may fall straight down into, and
//! a [`StabilityRule`] deciding when a resting cell skips lateral spread.
//! A [`RuleSet`] bundles the entries for sand and water.
//!
//! The tables are pure data. The engine reads them; nothing mutates them
//! after validation.
//!
//! # Default tables
//!
//! | Material | Blocking     | Movable-into   | Stability        |
//! |----------|--------------|----------------|------------------|
//! | sand     | rock, sand   | empty, water   | any gap, width 3 |
//! | water    | rock, sand   | empty          | any gap, width 1 |
//!
//! Alternative water behaviours are available through [`WaterVariant`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod rules;
pub mod stability;

pub use error::RulesError;
pub use rules::{MaterialRules, RuleSet, WaterVariant};
pub use stability::StabilityRule;
