#![warn(missing_docs)]

//! Revolution profiles for amigurumi pattern generation.
//!
//! A profile gives the radius of a crocheted solid as a function of height.
//! It is built from control points drawn in the radius/height plane and
//! interpolated with height-parameterised cubic Bézier segments.
//!
//! # Example
//!
//! ```
//! use crochet_profile::{sample_rows, ControlPoint, ProfileCurve};
//!
//! let profile = ProfileCurve::new(vec![
//!     ControlPoint::new(0.0, 0.0),
//!     ControlPoint::new(5.0, 1.0),
//!     ControlPoint::new(5.0, 9.0),
//!     ControlPoint::new(0.0, 10.0),
//! ])
//! .unwrap();
//!
//! assert!((profile.radius(5.0) - 5.0).abs() < 1e-9);
//!
//! let rows = sample_rows(&profile, 10.0, 3.0).unwrap();
//! assert_eq!(rows.len(), 30);
//! ```

mod profile;
mod sample;

pub use profile::{ControlPoint, ProfileCurve};
pub use sample::{row_heights, sample_rows, RowSample};

use thiserror::Error;

/// Errors from profile construction and sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Fewer than three control points were supplied.
    #[error("profile needs at least 3 control points, got {0}")]
    TooFewPoints(usize),

    /// A control point is not strictly above its predecessor.
    #[error("control point {index} is not above the previous point")]
    NonMonotonicHeight {
        /// Index of the offending point.
        index: usize,
    },

    /// The first or last control point is off the axis.
    #[error("pole at control point {index} has non-zero radius {radius}")]
    NonZeroPole {
        /// Index of the offending point.
        index: usize,
        /// Its radius.
        radius: f64,
    },

    /// A control point lies on the wrong side of the axis.
    #[error("control point {index} has negative radius {radius}")]
    NegativeRadius {
        /// Index of the offending point.
        index: usize,
        /// Its radius.
        radius: f64,
    },

    /// A control point has a NaN or infinite coordinate.
    #[error("control point {index} is not finite")]
    NonFinite {
        /// Index of the offending point.
        index: usize,
    },

    /// Requested total height is not a positive number.
    #[error("total height must be positive, got {0} cm")]
    InvalidHeight(f64),

    /// Requested row pitch is not a positive number.
    #[error("rows per cm must be positive, got {0}")]
    InvalidRowPitch(f64),
}
