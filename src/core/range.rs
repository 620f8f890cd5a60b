//! Speed interval of a single gear.

use serde::{Deserialize, Serialize};

/// Inclusive `[lower, upper]` speed interval a gear may operate in.
///
/// A range on its own is not validated; the invariants (`lower <= upper`,
/// no gaps between neighbours) are checked when ranges are assembled into a
/// [`GearTable`](super::GearTable).
///
/// # Example
///
/// ```rust
/// use gearbox::core::GearRange;
///
/// let second = GearRange::new(5, 20);
/// assert!(second.contains(5));
/// assert!(second.contains(20));
/// assert!(!second.contains(21));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct GearRange {
    /// Lowest speed at which the gear may be engaged
    pub lower: u32,
    /// Highest speed reachable in the gear
    pub upper: u32,
}

impl GearRange {
    pub const fn new(lower: u32, upper: u32) -> Self {
        Self { lower, upper }
    }

    /// Check whether `speed` lies inside the range, bounds included.
    pub fn contains(&self, speed: u32) -> bool {
        self.lower <= speed && speed <= self.upper
    }

    /// True when `lower > upper`.
    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }
}

impl From<(u32, u32)> for GearRange {
    fn from((lower, upper): (u32, u32)) -> Self {
        Self::new(lower, upper)
    }
}
