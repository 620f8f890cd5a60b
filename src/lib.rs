//! Gearbox: a pure functional manual transmission
//!
//! Gearbox models a manual transmission as a finite state machine over
//! speed and gear, constrained by a table of per-gear speed ranges. The
//! transition rules are pure functions: every operation returns a new
//! [`Transmission`] and the previous value stays valid. A thin imperative
//! shell, [`Drive`], owns a transmission and records its history.
//!
//! # Core Concepts
//!
//! - **Gear table**: validated, immutable speed ranges for gears `1..=N`
//! - **Operations**: increase/decrease speed, increase/decrease gear
//! - **Status**: every operation reports an advisory or a rejection; only
//!   construction can fail
//!
//! # Example
//!
//! ```rust
//! use gearbox::{Status, Transmission};
//!
//! let transmission = Transmission::new(&[0, 10, 5, 20, 15, 30, 25, 40, 35, 50]).unwrap();
//! assert_eq!(transmission.speed(), 0);
//! assert_eq!(transmission.gear(), 1);
//!
//! let mut current = transmission;
//! for _ in 0..10 {
//!     current = current.increase_speed();
//! }
//! assert_eq!(current.speed(), 10);
//! assert_eq!(current.status_message(), "OK: you may increase the gear.");
//!
//! let current = current.increase_gear();
//! assert_eq!(current.gear(), 2);
//! assert_eq!(current.status(), Status::Ok);
//!
//! let current = current.decrease_gear();
//! assert_eq!(current.gear(), 1);
//! assert_eq!(current.status_message(), "OK: everything is OK.");
//! ```

pub mod builder;
pub mod core;
pub mod drive;
pub mod transmission;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{GearRange, GearTable, Operation, Status, TransmissionState};
pub use drive::Drive;
pub use transmission::Transmission;
pub use validation::{InvalidConfiguration, TableViolation};
