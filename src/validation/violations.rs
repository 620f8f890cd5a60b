//! Gear table violations and the construction error that carries them.

use thiserror::Error;

/// A single broken gear table invariant.
///
/// Gear numbers are 1-based, matching [`Transmission::gear`](crate::Transmission::gear).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("Invalid number of gear range arguments: expected {expected}, got {found}")]
    WrongLimitCount { expected: usize, found: usize },

    #[error("Gear limits must come in lower/upper pairs, got {found} values")]
    UnpairedLimits { found: usize },

    #[error("Gear count {gears} is too large to describe with lower/upper limits")]
    TooManyGears { gears: usize },

    #[error("At least one gear range is required")]
    NoGears,

    #[error("Lower limit of gear {gear} ({lower}) cannot be higher than the upper limit ({upper})")]
    InvertedRange { gear: usize, lower: u32, upper: u32 },

    #[error(
        "Gaps between gear ranges are not allowed: gear {gear} starts at {lower} \
         above the previous upper limit {previous_upper}"
    )]
    Gap {
        gear: usize,
        lower: u32,
        previous_upper: u32,
    },

    #[error("Lower speed of the first gear must be 0, got {lower}")]
    NonZeroFloor { lower: u32 },
}

/// Rejected gear table.
///
/// Carries every violation found so callers can fix the table in one pass.
/// Returned by all table and transmission constructors; no partially
/// validated table is ever produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid gear configuration: {}", describe(.violations))]
pub struct InvalidConfiguration {
    violations: Vec<TableViolation>,
}

impl InvalidConfiguration {
    pub(crate) fn new(violations: Vec<TableViolation>) -> Self {
        Self { violations }
    }

    /// All violations, in gear order.
    pub fn violations(&self) -> &[TableViolation] {
        &self.violations
    }

    /// Check whether a violation matching `predicate` was reported.
    pub fn has(&self, predicate: impl Fn(&TableViolation) -> bool) -> bool {
        self.violations.iter().any(predicate)
    }
}

impl From<TableViolation> for InvalidConfiguration {
    fn from(violation: TableViolation) -> Self {
        Self::new(vec![violation])
    }
}

fn describe(violations: &[TableViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
