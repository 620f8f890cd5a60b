//! Macros for ergonomic gear table construction.

/// Build a [`GearTable`](crate::core::GearTable) from `(lower, upper)` pairs.
///
/// Expands to [`GearTable::new`](crate::core::GearTable::new), so the result
/// is a `Result` carrying any violations.
///
/// # Example
///
/// ```
/// use gearbox::gear_table;
///
/// let table = gear_table![(0, 10), (5, 20), (15, 30)].unwrap();
/// assert_eq!(table.gear_count(), 3);
///
/// assert!(gear_table![(0, 10), (11, 20)].is_err());
/// ```
#[macro_export]
macro_rules! gear_table {
    ($(($lower:expr, $upper:expr)),+ $(,)?) => {
        $crate::core::GearTable::new(vec![
            $($crate::core::GearRange::new($lower, $upper)),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::GearRange;
    use crate::validation::TableViolation;

    #[test]
    fn gear_table_macro_builds_table() {
        let table = gear_table![(0, 10), (5, 20), (15, 30), (25, 40), (35, 50)].unwrap();

        assert_eq!(table.gear_count(), 5);
        assert_eq!(table.range(3), Some(&GearRange::new(15, 30)));
    }

    #[test]
    fn gear_table_macro_accepts_trailing_comma() {
        let table = gear_table![(0, 10), (5, 20),].unwrap();
        assert_eq!(table.max_speed(), 20);
    }

    #[test]
    fn gear_table_macro_validates() {
        let error = gear_table![(2, 10)].unwrap_err();
        assert!(error.has(|v| matches!(v, TableViolation::NonZeroFloor { lower: 2 })));
    }
}
