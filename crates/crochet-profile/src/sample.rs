//! Row sampling - evaluate a profile at the centre of every crochet row.

use serde::{Deserialize, Serialize};

use crate::profile::ProfileCurve;
use crate::ProfileError;

/// Radius of the profile at one row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowSample {
    /// Row index (0 = magic ring row).
    pub row_index: usize,
    /// Height of the row centre above the bottom pole (cm).
    pub height: f64,
    /// Profile radius at that height (cm).
    pub radius: f64,
}

/// Mid-row heights for `total_height_cm` worth of rows.
///
/// Produces `max(1, round(total_height_cm * rows_per_cm))` heights, the
/// `i`-th at `(i + 0.5) / rows_per_cm`.
pub fn row_heights(total_height_cm: f64, rows_per_cm: f64) -> Result<Vec<f64>, ProfileError> {
    if !(total_height_cm > 0.0) || !total_height_cm.is_finite() {
        return Err(ProfileError::InvalidHeight(total_height_cm));
    }
    if !(rows_per_cm > 0.0) || !rows_per_cm.is_finite() {
        return Err(ProfileError::InvalidRowPitch(rows_per_cm));
    }

    let row_count = ((total_height_cm * rows_per_cm).round() as usize).max(1);
    Ok((0..row_count)
        .map(|i| (i as f64 + 0.5) / rows_per_cm)
        .collect())
}

/// Sample a profile at every row of a piece `total_height_cm` tall.
///
/// Heights are measured from the profile's bottom pole. Rows that fall
/// above the top pole sample a radius of zero.
pub fn sample_rows(
    profile: &ProfileCurve,
    total_height_cm: f64,
    rows_per_cm: f64,
) -> Result<Vec<RowSample>, ProfileError> {
    if profile.points().len() < 3 {
        return Err(ProfileError::TooFewPoints(profile.points().len()));
    }

    let base = profile.min_height();
    let samples: Vec<RowSample> = row_heights(total_height_cm, rows_per_cm)?
        .into_iter()
        .enumerate()
        .map(|(row_index, height)| RowSample {
            row_index,
            height,
            radius: profile.radius(base + height),
        })
        .collect();

    log::trace!(
        "sampled {} rows over {:.2} cm ({} rows/cm)",
        samples.len(),
        total_height_cm,
        rows_per_cm
    );

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ControlPoint;
    use approx::assert_relative_eq;

    #[test]
    fn test_row_heights() {
        let heights = row_heights(10.0, 3.0).unwrap();
        assert_eq!(heights.len(), 30);
        assert_relative_eq!(heights[0], 0.5 / 3.0);
        assert_relative_eq!(heights[29], 29.5 / 3.0);
    }

    #[test]
    fn test_row_heights_at_least_one() {
        let heights = row_heights(0.1, 1.0).unwrap();
        assert_eq!(heights, vec![0.5]);
    }

    #[test]
    fn test_invalid_height() {
        assert_eq!(row_heights(0.0, 3.0), Err(ProfileError::InvalidHeight(0.0)));
        assert_eq!(
            row_heights(-2.0, 3.0),
            Err(ProfileError::InvalidHeight(-2.0))
        );
        assert!(matches!(
            row_heights(f64::NAN, 3.0),
            Err(ProfileError::InvalidHeight(_))
        ));
        assert!(matches!(
            row_heights(f64::INFINITY, 3.0),
            Err(ProfileError::InvalidHeight(_))
        ));
    }

    #[test]
    fn test_invalid_row_pitch() {
        assert_eq!(
            row_heights(10.0, 0.0),
            Err(ProfileError::InvalidRowPitch(0.0))
        );
    }

    #[test]
    fn test_sample_cylinder() {
        let profile = ProfileCurve::cylinder(5.0, 10.0, 1.0).unwrap();
        let rows = sample_rows(&profile, 10.0, 3.0).unwrap();
        assert_eq!(rows.len(), 30);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.row_index, i);
            assert!(row.radius >= 0.0);
        }
        assert_relative_eq!(rows[15].radius, 5.0, epsilon = 1e-12);
        assert!(rows[0].radius < rows[2].radius);
        assert!(rows[29].radius < rows[27].radius);
    }

    #[test]
    fn test_sample_offset_profile() {
        let profile = ProfileCurve::new(vec![
            ControlPoint::new(0.0, 100.0),
            ControlPoint::new(2.0, 101.0),
            ControlPoint::new(0.0, 102.0),
        ])
        .unwrap();
        let rows = sample_rows(&profile, 2.0, 2.0).unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.radius > 0.0));
        assert_relative_eq!(rows[1].height, 0.75);
    }

    #[test]
    fn test_sample_beyond_top_is_zero() {
        let profile = ProfileCurve::cylinder(5.0, 10.0, 1.0).unwrap();
        let rows = sample_rows(&profile, 12.0, 1.0).unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[10].radius, 0.0);
        assert_eq!(rows[11].radius, 0.0);
    }
}
