//! Validated, immutable table of gear ranges.

use super::range::GearRange;
use crate::validation::{check_ranges, pair_limits, pair_limits_exact, InvalidConfiguration};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of gears in a regular manual transmission.
pub const REGULAR_GEARS: usize = 5;

/// Ordered speed ranges for gears `1..=N`.
///
/// A `GearTable` can only be obtained through validation, so holding one
/// guarantees:
///
/// - at least one gear
/// - `lower <= upper` for every gear
/// - each gear starts no higher than the previous gear ends (no gaps)
/// - the first gear starts at speed 0
///
/// Deserialization runs the same checks.
///
/// # Example
///
/// ```rust
/// use gearbox::core::GearTable;
///
/// let table = GearTable::from_limits(&[0, 10, 5, 20, 15, 30]).unwrap();
///
/// assert_eq!(table.gear_count(), 3);
/// assert_eq!(table.max_speed(), 30);
/// assert_eq!(table.range(2).map(|r| r.lower), Some(5));
/// assert!(table.range(4).is_none());
///
/// assert!(GearTable::from_limits(&[0, 10, 15, 20]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<GearRange>", into = "Vec<GearRange>")]
pub struct GearTable {
    ranges: Vec<GearRange>,
}

impl GearTable {
    /// Validate `ranges` and build a table from them.
    pub fn new(ranges: Vec<GearRange>) -> Result<Self, InvalidConfiguration> {
        Self::validated(Ok(ranges))
    }

    /// Build a table from a flat `lower, upper, ...` list of any even length.
    pub fn from_limits(limits: &[u32]) -> Result<Self, InvalidConfiguration> {
        Self::validated(pair_limits(limits).map_err(Into::into))
    }

    /// Build a table from exactly `gears` lower/upper pairs.
    pub fn with_gear_count(limits: &[u32], gears: usize) -> Result<Self, InvalidConfiguration> {
        Self::validated(pair_limits_exact(limits, gears).map_err(Into::into))
    }

    /// Single exit for every constructor; all rejections are logged here.
    fn validated(
        ranges: Result<Vec<GearRange>, InvalidConfiguration>,
    ) -> Result<Self, InvalidConfiguration> {
        ranges
            .and_then(|ranges| check_ranges(&ranges).map(|()| Self { ranges }))
            .map_err(|error| {
                debug!(%error, "rejected gear table");
                error
            })
    }

    /// Build a regular five-gear table from ten limits.
    pub fn regular(limits: &[u32]) -> Result<Self, InvalidConfiguration> {
        Self::with_gear_count(limits, REGULAR_GEARS)
    }

    pub fn gear_count(&self) -> usize {
        self.ranges.len()
    }

    /// Highest gear number.
    pub fn top_gear(&self) -> usize {
        self.ranges.len()
    }

    /// Upper bound of the top gear; no speed above it is reachable.
    pub fn max_speed(&self) -> u32 {
        self.ranges.last().map_or(0, |range| range.upper)
    }

    /// Range of a 1-based `gear`, or `None` outside `1..=top_gear()`.
    pub fn range(&self, gear: usize) -> Option<&GearRange> {
        gear.checked_sub(1).and_then(|index| self.ranges.get(index))
    }

    pub fn ranges(&self) -> &[GearRange] {
        &self.ranges
    }

    /// Every gear whose range contains `speed`, in ascending order.
    pub fn gears_for(&self, speed: u32) -> Vec<usize> {
        self.ranges
            .iter()
            .enumerate()
            .filter(|(_, range)| range.contains(speed))
            .map(|(index, _)| index + 1)
            .collect()
    }
}

impl TryFrom<Vec<GearRange>> for GearTable {
    type Error = InvalidConfiguration;

    fn try_from(ranges: Vec<GearRange>) -> Result<Self, Self::Error> {
        Self::new(ranges)
    }
}

impl From<GearTable> for Vec<GearRange> {
    fn from(table: GearTable) -> Self {
        table.ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::TableViolation;

    const REGULAR: [u32; 10] = [0, 10, 5, 20, 15, 30, 25, 40, 35, 50];

    #[test]
    fn regular_table_has_five_gears() {
        let table = GearTable::regular(&REGULAR).unwrap();

        assert_eq!(table.gear_count(), 5);
        assert_eq!(table.top_gear(), 5);
        assert_eq!(table.max_speed(), 50);
        assert_eq!(table.range(1), Some(&GearRange::new(0, 10)));
        assert_eq!(table.range(5), Some(&GearRange::new(35, 50)));
    }

    #[test]
    fn range_is_one_based() {
        let table = GearTable::regular(&REGULAR).unwrap();

        assert!(table.range(0).is_none());
        assert!(table.range(6).is_none());
    }

    #[test]
    fn regular_requires_ten_limits() {
        let error = GearTable::regular(&[0, 10, 5, 20, 15, 30, 25, 40]).unwrap_err();

        assert_eq!(
            error.violations(),
            &[TableViolation::WrongLimitCount {
                expected: 10,
                found: 8
            }]
        );
    }

    #[test]
    fn generalized_table_accepts_any_gear_count() {
        let single = GearTable::from_limits(&[0, 100]).unwrap();
        assert_eq!(single.top_gear(), 1);

        let six = GearTable::with_gear_count(&[0, 10, 5, 20, 15, 30, 25, 40, 35, 50, 45, 60], 6)
            .unwrap();
        assert_eq!(six.max_speed(), 60);
    }

    #[test]
    fn gears_for_lists_overlapping_gears() {
        let table = GearTable::regular(&REGULAR).unwrap();

        assert_eq!(table.gears_for(0), vec![1]);
        assert_eq!(table.gears_for(10), vec![1, 2]);
        assert_eq!(table.gears_for(27), vec![3, 4]);
        assert!(table.gears_for(51).is_empty());
    }

    #[test]
    fn table_serializes_as_range_list() {
        let table = GearTable::from_limits(&[0, 10, 5, 20]).unwrap();

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"[{"lower":0,"upper":10},{"lower":5,"upper":20}]"#
        );

        let deserialized: GearTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, deserialized);
    }

    #[test]
    fn every_rejection_is_logged() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;
        use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

        struct CountEvents(Arc<AtomicUsize>);

        impl<S: tracing::Subscriber> Layer<S> for CountEvents {
            fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let events = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountEvents(Arc::clone(&events)));

        tracing::subscriber::with_default(subscriber, || {
            assert!(GearTable::from_limits(&[0, 10, 5]).is_err());
            assert!(GearTable::regular(&[0, 10, 5, 20]).is_err());
            assert!(GearTable::with_gear_count(&[0, 10], usize::MAX).is_err());
            assert!(GearTable::new(vec![GearRange::new(0, 10), GearRange::new(11, 20)]).is_err());
            assert!(GearTable::regular(&REGULAR).is_ok());
        });

        assert_eq!(events.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"[{"lower":0,"upper":10},{"lower":15,"upper":20}]"#;

        let result: Result<GearTable, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
