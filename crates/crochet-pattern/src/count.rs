//! Stitch counts from profile radii.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::RowError;

/// Limits applied when converting a radius into a stitch count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountSettings {
    /// Stitches in the magic ring (row 1).
    pub starting_stitch_count: u32,
    /// Smallest count allowed on any row but the last.
    pub minimum_stitches: u32,
    /// Smallest count allowed on the closing row.
    pub closing_minimum: u32,
}

impl Default for CountSettings {
    fn default() -> Self {
        Self {
            starting_stitch_count: 6,
            minimum_stitches: 6,
            closing_minimum: 3,
        }
    }
}

/// Where a row sits in the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPosition {
    /// The magic ring.
    First,
    /// Any row between the first and the last.
    Body,
    /// The closing row.
    Final,
}

impl RowPosition {
    /// Position of the row at `index` among `row_count` rows.
    ///
    /// A single-row piece is only its magic ring.
    pub fn of(index: usize, row_count: usize) -> Self {
        if index == 0 {
            RowPosition::First
        } else if index + 1 == row_count {
            RowPosition::Final
        } else {
            RowPosition::Body
        }
    }
}

/// Stitch count for a row of the given radius.
///
/// The circumference `2πr` times `stitches_per_cm`, rounded, then raised to
/// the row's minimum. The first row is always the magic ring.
pub fn target_count(
    radius: f64,
    stitches_per_cm: f64,
    position: RowPosition,
    settings: &CountSettings,
) -> Result<u32, RowError> {
    let floor = match position {
        RowPosition::First => {
            return match settings.starting_stitch_count {
                0 => Err(RowError::DegenerateRow { count: 0 }),
                n => Ok(n),
            };
        }
        RowPosition::Body => settings.minimum_stitches,
        RowPosition::Final => settings.closing_minimum,
    };

    let n = (2.0 * PI * radius * stitches_per_cm).round();
    if !n.is_finite() {
        return Err(RowError::DegenerateRow { count: 0 });
    }
    if n > f64::from(u32::MAX) {
        return Err(RowError::CountOverflow { count: n as u64 });
    }

    let count = (n as i64).max(i64::from(floor));
    match u32::try_from(count) {
        Ok(c) if c >= 1 => Ok(c),
        _ => Err(RowError::DegenerateRow { count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circumference_count() {
        let s = CountSettings::default();
        assert_eq!(target_count(5.0, 3.0, RowPosition::Body, &s), Ok(94));
        assert_eq!(target_count(1.0, 2.0, RowPosition::Body, &s), Ok(13));
    }

    #[test]
    fn test_first_row_ignores_radius() {
        let s = CountSettings::default();
        assert_eq!(target_count(0.0, 3.0, RowPosition::First, &s), Ok(6));
        assert_eq!(target_count(8.0, 3.0, RowPosition::First, &s), Ok(6));
        let eight = CountSettings {
            starting_stitch_count: 8,
            ..s
        };
        assert_eq!(target_count(8.0, 3.0, RowPosition::First, &eight), Ok(8));
    }

    #[test]
    fn test_minimum_clamp() {
        let s = CountSettings::default();
        assert_eq!(target_count(0.05, 3.0, RowPosition::Body, &s), Ok(6));
        assert_eq!(target_count(0.0, 3.0, RowPosition::Final, &s), Ok(3));
        assert_eq!(target_count(0.25, 3.0, RowPosition::Final, &s), Ok(5));
    }

    #[test]
    fn test_degenerate() {
        let s = CountSettings {
            closing_minimum: 0,
            ..Default::default()
        };
        assert_eq!(
            target_count(0.0, 3.0, RowPosition::Final, &s),
            Err(RowError::DegenerateRow { count: 0 })
        );
        assert!(target_count(f64::NAN, 3.0, RowPosition::Body, &s).is_err());
        let no_ring = CountSettings {
            starting_stitch_count: 0,
            ..Default::default()
        };
        assert!(target_count(1.0, 3.0, RowPosition::First, &no_ring).is_err());
    }

    #[test]
    fn test_count_overflow() {
        let s = CountSettings::default();
        assert_eq!(
            target_count(1e9, 2.0, RowPosition::Body, &s),
            Err(RowError::CountOverflow {
                count: 12_566_370_614
            })
        );
        assert!(matches!(
            target_count(1e300, 3.0, RowPosition::Final, &s),
            Err(RowError::CountOverflow { .. })
        ));
        assert!(matches!(
            target_count(f64::INFINITY, 3.0, RowPosition::Body, &s),
            Err(RowError::DegenerateRow { .. })
        ));
    }

    #[test]
    fn test_row_position() {
        assert_eq!(RowPosition::of(0, 1), RowPosition::First);
        assert_eq!(RowPosition::of(0, 5), RowPosition::First);
        assert_eq!(RowPosition::of(3, 5), RowPosition::Body);
        assert_eq!(RowPosition::of(4, 5), RowPosition::Final);
    }
}
