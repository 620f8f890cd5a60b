//! Validation of gear tables.
//!
//! Range invariants are checked with Stillwater's `Validation` type so that
//! ALL violations are reported together instead of stopping at the first:
//! a table with an inverted third gear and a non-zero floor is rejected with
//! both reasons.
//!
//! Argument-count checks run first and fail fast, since ranges cannot be
//! formed from an odd or mis-sized list of limits.
//!
//! # Example
//!
//! ```rust
//! use gearbox::core::GearRange;
//! use gearbox::validation::{check_ranges, TableViolation};
//!
//! let ranges = vec![GearRange::new(1, 10), GearRange::new(12, 20)];
//!
//! let error = check_ranges(&ranges).unwrap_err();
//! assert_eq!(error.violations().len(), 2);
//! assert!(error.has(|v| matches!(v, TableViolation::NonZeroFloor { lower: 1 })));
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check_ranges, pair_limits, pair_limits_exact, validate_ranges};
pub use violations::{InvalidConfiguration, TableViolation};
