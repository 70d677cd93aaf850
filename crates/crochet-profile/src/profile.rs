//! Profile curve types.

use std::f64::consts::PI;

use crochet_math::{CubicBezier, Point2, Tolerance, Vec2};
use serde::{Deserialize, Serialize};

use crate::ProfileError;

/// A control point of a revolution profile, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Distance from the axis of revolution.
    pub x: f64,
    /// Height above the profile origin.
    pub y: f64,
}

impl ControlPoint {
    /// Create a control point from radius and height.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn to_point(self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl From<[f64; 2]> for ControlPoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A revolution profile: radius as a piecewise cubic function of height.
///
/// Each pair of adjacent control points is joined by a cubic Bézier whose
/// control points are evenly spaced in height, so height is linear in the
/// segment parameter and a height query maps to exactly one parameter.
/// Slopes at interior points use Catmull-Rom central differences, limited so
/// that no segment overshoots its endpoints; the curve is C1 and never
/// crosses the axis.
#[derive(Debug, Clone)]
pub struct ProfileCurve {
    points: Vec<ControlPoint>,
    segments: Vec<CubicBezier>,
}

impl ProfileCurve {
    /// Build a profile from control points ordered bottom to top.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - fewer than 3 points are given
    /// - any coordinate is not finite
    /// - heights are not strictly increasing
    /// - the first or last point is off the axis
    /// - any radius is negative
    pub fn new(points: Vec<ControlPoint>) -> Result<Self, ProfileError> {
        if points.len() < 3 {
            return Err(ProfileError::TooFewPoints(points.len()));
        }

        let tol = Tolerance::DEFAULT;
        let last = points.len() - 1;
        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(ProfileError::NonFinite { index: i });
            }
            if i > 0 && p.y <= points[i - 1].y {
                return Err(ProfileError::NonMonotonicHeight { index: i });
            }
            if (i == 0 || i == last) && !tol.is_zero(p.x) {
                return Err(ProfileError::NonZeroPole {
                    index: i,
                    radius: p.x,
                });
            }
            if p.x < 0.0 {
                return Err(ProfileError::NegativeRadius {
                    index: i,
                    radius: p.x,
                });
            }
        }

        let slopes = limited_slopes(&points);
        let segments = points
            .windows(2)
            .zip(slopes.windows(2))
            .map(|(pair, m)| {
                let h = pair[1].y - pair[0].y;
                CubicBezier::from_hermite(
                    pair[0].to_point(),
                    Vec2::new(m[0] * h, h),
                    pair[1].to_point(),
                    Vec2::new(m[1] * h, h),
                )
            })
            .collect();

        Ok(Self { points, segments })
    }

    /// A closed cylinder: flat ends rounded over `cap_height` at top and bottom.
    pub fn cylinder(radius: f64, height: f64, cap_height: f64) -> Result<Self, ProfileError> {
        Self::new(vec![
            ControlPoint::new(0.0, 0.0),
            ControlPoint::new(radius, cap_height),
            ControlPoint::new(radius, height - cap_height),
            ControlPoint::new(0.0, height),
        ])
    }

    /// A sphere sampled at `interior` points along its meridian.
    pub fn sphere(radius: f64, interior: usize) -> Result<Self, ProfileError> {
        let n = interior + 1;
        let points = (0..=n)
            .map(|i| {
                let theta = PI * (i as f64) / (n as f64);
                let x = if i == 0 || i == n {
                    0.0
                } else {
                    radius * theta.sin()
                };
                ControlPoint::new(x, radius * (1.0 - theta.cos()))
            })
            .collect();
        Self::new(points)
    }

    /// Radius of the revolved solid at `height`.
    ///
    /// Heights outside the profile clamp to the pole radius (zero).
    pub fn radius(&self, height: f64) -> f64 {
        if !(height >= self.min_height() && height <= self.max_height()) {
            return 0.0;
        }

        let idx = self
            .segments
            .partition_point(|s| s.p3.y < height)
            .min(self.segments.len() - 1);
        let seg = &self.segments[idx];
        let t = ((height - seg.p0.y) / (seg.p3.y - seg.p0.y)).clamp(0.0, 1.0);
        seg.evaluate(t).x.max(0.0)
    }

    /// The control points, bottom to top.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// The Bézier segments between consecutive control points.
    pub fn segments(&self) -> &[CubicBezier] {
        &self.segments
    }

    /// Height of the bottom pole.
    pub fn min_height(&self) -> f64 {
        self.points[0].y
    }

    /// Height of the top pole.
    pub fn max_height(&self) -> f64 {
        self.points[self.points.len() - 1].y
    }

    /// Distance between the poles.
    pub fn height(&self) -> f64 {
        self.max_height() - self.min_height()
    }

    /// Largest control-point radius.
    ///
    /// Segments never overshoot their endpoints, so this is also the largest
    /// radius anywhere on the curve.
    pub fn max_radius(&self) -> f64 {
        self.points.iter().map(|p| p.x).fold(0.0, f64::max)
    }
}

/// Slopes `dx/dy` at every control point.
///
/// Interior slopes start from Catmull-Rom central differences, are zeroed
/// at local extrema and plateaus, and are then scaled per segment with the
/// Fritsch–Carlson condition so each segment stays monotone in radius.
fn limited_slopes(points: &[ControlPoint]) -> Vec<f64> {
    let n = points.len();
    let secants: Vec<f64> = points
        .windows(2)
        .map(|p| (p[1].x - p[0].x) / (p[1].y - p[0].y))
        .collect();

    let mut slopes = vec![0.0; n];
    slopes[0] = secants[0];
    slopes[n - 1] = secants[n - 2];
    for i in 1..n - 1 {
        if secants[i - 1] * secants[i] > 0.0 {
            slopes[i] = (points[i + 1].x - points[i - 1].x) / (points[i + 1].y - points[i - 1].y);
        }
    }

    for (i, &d) in secants.iter().enumerate() {
        if d == 0.0 {
            slopes[i] = 0.0;
            slopes[i + 1] = 0.0;
            continue;
        }
        let alpha = slopes[i] / d;
        let beta = slopes[i + 1] / d;
        let norm = alpha * alpha + beta * beta;
        if norm > 9.0 {
            let tau = 3.0 / norm.sqrt();
            slopes[i] = tau * alpha * d;
            slopes[i + 1] = tau * beta * d;
        }
    }

    slopes
}
