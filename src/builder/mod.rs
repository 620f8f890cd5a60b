//! Builder API for ergonomic gear table construction.
//!
//! This module provides a fluent builder and a macro for describing gear
//! tables gear by gear instead of as a flat list of limits. Both run the
//! same validation as [`GearTable::new`](crate::core::GearTable::new).

pub mod macros;
pub mod table;

pub use table::GearTableBuilder;
