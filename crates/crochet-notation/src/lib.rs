#![warn(missing_docs)]

//! Written notation for generated amigurumi patterns.
//!
//! This crate turns a [`CrochetPattern`](crochet_pattern::CrochetPattern)
//! into the text a maker follows: a header with materials, gauge and
//! finished size, then one line per row.
//!
//! # Example
//!
//! ```
//! use crochet_notation::{render_pattern, TextSettings, YarnProfile};
//! use crochet_pattern::{generate, PatternSettings};
//! use crochet_profile::ProfileCurve;
//!
//! let yarn = YarnProfile::worsted();
//! let mut settings = PatternSettings {
//!     total_height_cm: 6.0,
//!     ..Default::default()
//! };
//! yarn.apply(&mut settings);
//!
//! let profile = ProfileCurve::sphere(3.0, 9).unwrap();
//! let pattern = generate(&profile, &settings).unwrap();
//!
//! let text = render_pattern(&pattern, &TextSettings {
//!     yarn: Some(yarn),
//!     ..Default::default()
//! });
//! assert!(text.contains("Row 1: [1 sc] repeat 6 times (6 stitches total)"));
//! ```

pub mod terminology;
pub mod text;
pub mod yarn;

pub use terminology::Terminology;
pub use text::{render_header, render_pattern, render_row, TextSettings};
pub use yarn::{YarnProfile, YarnWeight};
