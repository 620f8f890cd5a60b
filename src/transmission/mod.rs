//! The transmission state machine.
//!
//! # Key Concepts
//!
//! - **Rules**: pure functions from a state to its successor, one per operation
//! - **Transmission**: a value pairing a shared gear table with the current state
//!
//! Constraint violations during operations are never errors. They leave
//! speed and gear unchanged and surface as a rejection [`Status`](crate::Status).

mod machine;
mod rules;

pub use machine::Transmission;
