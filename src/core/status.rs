//! Outcome of the last transmission operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory status reported after every operation.
///
/// `Ok`, `MayIncreaseGear` and `MayDecreaseGear` follow a successful change.
/// Every other variant is a rejection: the operation left speed and gear
/// untouched and the message says why.
///
/// # Example
///
/// ```rust
/// use gearbox::core::Status;
///
/// assert_eq!(Status::Ok.message(), "OK: everything is OK.");
/// assert!(Status::IncreaseSpeedFirst.is_rejection());
/// assert_eq!(
///     Status::MinimumGear.to_string(),
///     "Cannot decrease gear. Reached minimum gear."
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Ok,
    MayIncreaseGear,
    MayDecreaseGear,
    MaximumSpeed,
    IncreaseGearFirst,
    MinimumSpeed,
    DecreaseGearFirst,
    MaximumGear,
    IncreaseSpeedFirst,
    MinimumGear,
    DecreaseSpeedFirst,
}

impl Status {
    /// Human-readable status text.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Ok => "OK: everything is OK.",
            Self::MayIncreaseGear => "OK: you may increase the gear.",
            Self::MayDecreaseGear => "OK: you may decrease the gear.",
            Self::MaximumSpeed => "Cannot increase speed. Reached maximum speed.",
            Self::IncreaseGearFirst => "Cannot increase speed, increase gear first.",
            Self::MinimumSpeed => "Cannot decrease speed. Reached minimum speed.",
            Self::DecreaseGearFirst => "Cannot decrease speed, decrease gear first.",
            Self::MaximumGear => "Cannot increase gear. Reached maximum gear.",
            Self::IncreaseSpeedFirst => "Cannot increase gear, increase speed first.",
            Self::MinimumGear => "Cannot decrease gear. Reached minimum gear.",
            Self::DecreaseSpeedFirst => "Cannot decrease gear, decrease speed first.",
        }
    }

    /// True when the operation that produced this status was refused.
    pub const fn is_rejection(&self) -> bool {
        !matches!(
            self,
            Self::Ok | Self::MayIncreaseGear | Self::MayDecreaseGear
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
