//! # trove-core
//!
//! Core types shared across the trove workspace:
//! - Entity structs for parsed awesome-list data (`Resource`, `AwesomeList`)
//! - The hosting-provider origin enum used for tag synthesis
//! - Aggregate statistics over a finished parse
//! - Resource ID formatting helpers

pub mod entities;
pub mod ids;
pub mod origin;
pub mod stats;

pub use entities::{AwesomeList, Resource};
pub use origin::Origin;
pub use stats::ListStats;
