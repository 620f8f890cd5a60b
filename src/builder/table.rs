//! Builder for constructing gear tables.

use crate::core::{GearRange, GearTable};
use crate::transmission::Transmission;
use crate::validation::InvalidConfiguration;

/// Builder for constructing gear tables with a fluent API.
///
/// # Example
///
/// ```
/// use gearbox::builder::GearTableBuilder;
///
/// let transmission = GearTableBuilder::new()
///     .gear(0, 10)
///     .gear(5, 20)
///     .gear(15, 30)
///     .build_transmission()
///     .unwrap();
///
/// assert_eq!(transmission.table().top_gear(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GearTableBuilder {
    ranges: Vec<GearRange>,
}

impl GearTableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Append the next gear's range.
    pub fn gear(mut self, lower: u32, upper: u32) -> Self {
        self.ranges.push(GearRange::new(lower, upper));
        self
    }

    /// Append a pre-built range.
    pub fn range(mut self, range: GearRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Append several ranges at once.
    pub fn ranges(mut self, ranges: impl IntoIterator<Item = GearRange>) -> Self {
        self.ranges.extend(ranges);
        self
    }

    /// Build the table.
    /// Returns an error listing every violated invariant.
    pub fn build(self) -> Result<GearTable, InvalidConfiguration> {
        GearTable::new(self.ranges)
    }

    /// Build the table and a transmission standing still in first gear.
    pub fn build_transmission(self) -> Result<Transmission, InvalidConfiguration> {
        self.build().map(Transmission::from_table)
    }
}
