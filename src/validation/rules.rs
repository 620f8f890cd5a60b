//! Gear table invariants checked with `Validation`.

use crate::core::GearRange;
use crate::validation::violations::{InvalidConfiguration, TableViolation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check every range invariant, accumulating ALL violations.
///
/// - the table has at least one gear
/// - no range is inverted
/// - no gap between consecutive gears
/// - the first gear starts at speed 0
pub fn validate_ranges(ranges: &[GearRange]) -> Validation<(), NonEmptyVec<TableViolation>> {
    let Some(first) = ranges.first() else {
        return Validation::fail(TableViolation::NoGears);
    };

    let mut checks: Vec<Validation<(), NonEmptyVec<TableViolation>>> = Vec::new();

    for (index, range) in ranges.iter().enumerate() {
        let gear = index + 1;

        let check = if range.is_inverted() {
            Validation::fail(TableViolation::InvertedRange {
                gear,
                lower: range.lower,
                upper: range.upper,
            })
        } else {
            Validation::success(())
        };
        checks.push(check);

        if let Some(previous) = index.checked_sub(1).map(|i| &ranges[i]) {
            let check = if range.lower > previous.upper {
                Validation::fail(TableViolation::Gap {
                    gear,
                    lower: range.lower,
                    previous_upper: previous.upper,
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }
    }

    let floor = if first.lower != 0 {
        Validation::fail(TableViolation::NonZeroFloor { lower: first.lower })
    } else {
        Validation::success(())
    };
    checks.push(floor);

    Validation::all_vec(checks).map(|_| ())
}

/// Collapse [`validate_ranges`] into a `Result`.
pub fn check_ranges(ranges: &[GearRange]) -> Result<(), InvalidConfiguration> {
    match validate_ranges(ranges) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(InvalidConfiguration::new(
            errors.iter().cloned().collect(),
        )),
    }
}

/// Split a flat `lower, upper, lower, upper, ...` list into ranges.
///
/// Fails fast: an odd or empty list cannot be paired, so no range checks run.
pub fn pair_limits(limits: &[u32]) -> Result<Vec<GearRange>, TableViolation> {
    if limits.is_empty() {
        return Err(TableViolation::NoGears);
    }
    if limits.len() % 2 != 0 {
        return Err(TableViolation::UnpairedLimits {
            found: limits.len(),
        });
    }

    Ok(limits
        .chunks_exact(2)
        .map(|pair| GearRange::new(pair[0], pair[1]))
        .collect())
}

/// Like [`pair_limits`] but requires exactly `gears` pairs.
pub fn pair_limits_exact(limits: &[u32], gears: usize) -> Result<Vec<GearRange>, TableViolation> {
    if gears == 0 {
        return Err(TableViolation::NoGears);
    }
    let Some(expected) = gears.checked_mul(2) else {
        return Err(TableViolation::TooManyGears { gears });
    };
    if limits.len() != expected {
        return Err(TableViolation::WrongLimitCount {
            expected,
            found: limits.len(),
        });
    }
    pair_limits(limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(limits: &[u32]) -> Vec<GearRange> {
        pair_limits(limits).unwrap()
    }

    #[test]
    fn regular_table_passes() {
        let table = ranges(&[0, 10, 5, 20, 15, 30, 25, 40, 35, 50]);
        assert!(validate_ranges(&table).is_success());
    }

    #[test]
    fn touching_ranges_pass() {
        let table = ranges(&[0, 10, 10, 20, 20, 30]);
        assert!(check_ranges(&table).is_ok());
    }

    #[test]
    fn empty_table_fails() {
        let result = check_ranges(&[]);
        assert_eq!(result, Err(TableViolation::NoGears.into()));
    }

    #[test]
    fn validation_accumulates_all_violations() {
        // floor 7, gear 2 starts above gear 1, gear 4 starts above gear 3
        let table = ranges(&[7, 10, 11, 20, 15, 30, 31, 40, 35, 50]);

        match validate_ranges(&table) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let gaps = errors
                    .iter()
                    .filter(|e| matches!(e, TableViolation::Gap { .. }))
                    .count();
                let has_floor = errors
                    .iter()
                    .any(|e| matches!(e, TableViolation::NonZeroFloor { lower: 7 }));

                assert_eq!(gaps, 2);
                assert!(has_floor);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn inverted_range_is_reported_with_gear_number() {
        let table = ranges(&[0, 4, 3, 20, 45, 20, 25, 40, 35, 50]);

        let error = check_ranges(&table).unwrap_err();
        assert!(error.has(|v| matches!(
            v,
            TableViolation::InvertedRange {
                gear: 3,
                lower: 45,
                upper: 20
            }
        )));
    }

    #[test]
    fn gap_between_second_and_third_gear() {
        let table = ranges(&[0, 10, 15, 20, 10, 10, 30, 40, 35, 50]);

        let error = check_ranges(&table).unwrap_err();
        assert!(error.has(|v| matches!(v, TableViolation::Gap { gear: 2, .. })));
    }

    #[test]
    fn non_overlapping_ranges_fail() {
        let table = ranges(&[0, 10, 15, 20, 25, 30, 35, 40, 45, 50]);

        let error = check_ranges(&table).unwrap_err();
        assert_eq!(error.violations().len(), 4);
    }

    #[test]
    fn pairing_rejects_odd_count() {
        assert_eq!(
            pair_limits(&[0, 10, 5]),
            Err(TableViolation::UnpairedLimits { found: 3 })
        );
    }

    #[test]
    fn exact_pairing_rejects_wrong_count() {
        assert_eq!(
            pair_limits_exact(&[0, 10, 5, 20], 5),
            Err(TableViolation::WrongLimitCount {
                expected: 10,
                found: 4
            })
        );
        assert_eq!(pair_limits_exact(&[], 0), Err(TableViolation::NoGears));
    }

    #[test]
    fn exact_pairing_rejects_overflowing_gear_count() {
        assert_eq!(
            pair_limits_exact(&[0, 10], usize::MAX),
            Err(TableViolation::TooManyGears { gears: usize::MAX })
        );
        assert_eq!(
            pair_limits_exact(&[0, 10], usize::MAX / 2 + 1),
            Err(TableViolation::TooManyGears {
                gears: usize::MAX / 2 + 1
            })
        );
    }
}
