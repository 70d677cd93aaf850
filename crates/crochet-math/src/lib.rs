#![warn(missing_docs)]

//! Math types for crochet profile geometry.
//!
//! Thin wrappers around nalgebra providing the 2D types used to describe a
//! revolution profile: points, vectors, cubic Bézier segments, and
//! tolerance constants. All lengths are in centimetres.

use nalgebra::Vector2;

/// A point in the profile plane (`x` = radius, `y` = height).
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in the profile plane.
pub type Vec2 = Vector2<f64>;

/// A cubic Bézier segment in the profile plane.
///
/// The curve passes through `p0` and `p3`; `p1` and `p2` shape the tangents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point.
    pub p0: Point2,
    /// First control point.
    pub p1: Point2,
    /// Second control point.
    pub p2: Point2,
    /// End point.
    pub p3: Point2,
}

impl CubicBezier {
    /// Create a segment from its four control points.
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Build the Bézier equivalent of a cubic Hermite segment.
    ///
    /// `t0` and `t1` are the derivatives with respect to the curve parameter
    /// at the start and end points.
    pub fn from_hermite(p0: Point2, t0: Vec2, p3: Point2, t1: Vec2) -> Self {
        Self::new(p0, p0 + t0 / 3.0, p3 - t1 / 3.0, p3)
    }

    /// Evaluate the curve at parameter `t` in `[0, 1]`.
    pub fn evaluate(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        let b0 = mt * mt * mt;
        let b1 = 3.0 * mt * mt * t;
        let b2 = 3.0 * mt * t * t;
        let b3 = t * t * t;
        Point2::from(
            self.p0.coords * b0 + self.p1.coords * b1 + self.p2.coords * b2 + self.p3.coords * b3,
        )
    }

    /// First derivative at parameter `t`.
    pub fn derivative(&self, t: f64) -> Vec2 {
        let mt = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * mt * mt)
            + (self.p2 - self.p1) * (6.0 * mt * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in cm.
    pub linear: f64,
}

impl Tolerance {
    /// Default profile tolerance (1e-9 cm).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
