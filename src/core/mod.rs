//! Core transmission types.
//!
//! This module contains the pure data model of the transmission:
//! - Gear ranges and the validated `GearTable`
//! - `TransmissionState` values and their `Status`
//! - The `Operation` requests and an immutable operation history
//!
//! Nothing in this module mutates in place, following
//! the "pure core, imperative shell" philosophy.

mod history;
mod operation;
mod range;
mod state;
mod status;
mod table;

pub use history::{ShiftRecord, TransmissionHistory};
pub use operation::Operation;
pub use range::GearRange;
pub use state::TransmissionState;
pub use status::Status;
pub use table::{GearTable, REGULAR_GEARS};
