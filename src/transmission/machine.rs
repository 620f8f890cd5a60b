//! Transmission value combining a gear table with the current state.

use crate::core::{GearTable, Operation, Status, TransmissionState};
use crate::transmission::rules;
use crate::validation::InvalidConfiguration;
use std::sync::Arc;

/// Manual transmission.
///
/// Every operation is pure: it returns the next transmission and leaves the
/// receiver untouched. Operations never fail; a refused operation keeps
/// speed and gear and reports why through [`status`](Self::status).
///
/// The gear table is shared between successive values, so cloning and
/// stepping a transmission never copies the table.
///
/// # Example
///
/// ```rust
/// use gearbox::{Status, Transmission};
///
/// let transmission = Transmission::new(&[0, 10, 5, 20, 15, 30, 25, 40, 35, 50]).unwrap();
///
/// let moving = transmission.increase_speed().increase_speed();
/// assert_eq!(moving.speed(), 2);
/// assert_eq!(transmission.speed(), 0); // original unchanged
///
/// let refused = moving.increase_gear();
/// assert_eq!(refused.gear(), 1);
/// assert_eq!(refused.status(), Status::IncreaseSpeedFirst);
/// assert_eq!(refused.status_message(), "Cannot increase gear, increase speed first.");
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Transmission {
    table: Arc<GearTable>,
    state: TransmissionState,
}

impl Transmission {
    /// Create a regular five-gear transmission from ten limits
    /// (`lower, upper` for gears 1 to 5).
    pub fn new(limits: &[u32]) -> Result<Self, InvalidConfiguration> {
        GearTable::regular(limits).map(Self::from_table)
    }

    /// Create a transmission with exactly `gears` gears from `2 * gears` limits.
    pub fn with_gear_count(limits: &[u32], gears: usize) -> Result<Self, InvalidConfiguration> {
        GearTable::with_gear_count(limits, gears).map(Self::from_table)
    }

    /// Create a transmission with as many gears as `limits` has pairs.
    pub fn from_limits(limits: &[u32]) -> Result<Self, InvalidConfiguration> {
        GearTable::from_limits(limits).map(Self::from_table)
    }

    /// Create a transmission standing still in first gear.
    pub fn from_table(table: GearTable) -> Self {
        Self {
            table: Arc::new(table),
            state: TransmissionState::initial(),
        }
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    /// Status text of the last operation.
    pub fn status_message(&self) -> &'static str {
        self.state.status.message()
    }

    pub fn speed(&self) -> u32 {
        self.state.speed
    }

    /// Current gear, starting at 1.
    pub fn gear(&self) -> usize {
        self.state.gear
    }

    pub fn state(&self) -> &TransmissionState {
        &self.state
    }

    pub fn table(&self) -> &GearTable {
        &self.table
    }

    #[must_use = "operations return a new transmission"]
    pub fn increase_speed(&self) -> Self {
        self.with_state(rules::increase_speed(&self.table, &self.state))
    }

    #[must_use = "operations return a new transmission"]
    pub fn decrease_speed(&self) -> Self {
        self.with_state(rules::decrease_speed(&self.table, &self.state))
    }

    #[must_use = "operations return a new transmission"]
    pub fn increase_gear(&self) -> Self {
        self.with_state(rules::increase_gear(&self.table, &self.state))
    }

    #[must_use = "operations return a new transmission"]
    pub fn decrease_gear(&self) -> Self {
        self.with_state(rules::decrease_gear(&self.table, &self.state))
    }

    /// Apply any operation.
    #[must_use = "operations return a new transmission"]
    pub fn apply(&self, operation: Operation) -> Self {
        self.with_state(rules::apply(&self.table, &self.state, operation))
    }

    fn with_state(&self, state: TransmissionState) -> Self {
        Self {
            table: Arc::clone(&self.table),
            state,
        }
    }
}
