#![warn(missing_docs)]

//! Amigurumi pattern generation from revolution profiles.
//!
//! This crate turns a [`ProfileCurve`] into a row-by-row crochet pattern:
//! stitch counts derived from the profile radius, the increases and
//! decreases that move between them, and production estimates.
//!
//! # Example
//!
//! ```
//! use crochet_pattern::{generate, PatternSettings};
//! use crochet_profile::ProfileCurve;
//!
//! let profile = ProfileCurve::sphere(3.0, 9).unwrap();
//! let settings = PatternSettings {
//!     total_height_cm: 6.0,
//!     ..Default::default()
//! };
//! let pattern = generate(&profile, &settings).unwrap();
//!
//! assert_eq!(pattern.rows[0].stitch_count_after, 6);
//! println!("Rows: {}", pattern.metadata.total_rows);
//! println!("Yarn: {:.1} m", pattern.metadata.yarn_length_meters);
//! ```

pub mod compress;
pub mod count;
pub mod error;
pub mod stitch;
pub mod transition;

pub use compress::{compress, compress_with, expand, expand_with, CompressError};
pub use count::{target_count, CountSettings, RowPosition};
pub use error::{PatternError, Result, RowError};
pub use stitch::{consumed, emitted, DecreaseStyle, Row, StitchAction};
pub use transition::{feasible_range, plan_transition};

use std::ops::ControlFlow;

use crochet_profile::{sample_rows, ProfileCurve};
use serde::{Deserialize, Serialize};

/// Yarn lengths per stitch, in stitch widths, used when no explicit
/// yarn-per-stitch value is configured.
pub const YARN_WIDTHS_PER_STITCH: f64 = 5.0;

/// Stitch and row density of a yarn/hook/tension combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    /// Stitches per centimetre along a row.
    pub stitches_per_cm: f64,
    /// Rows per centimetre of height.
    pub rows_per_cm: f64,
}

impl Default for Gauge {
    fn default() -> Self {
        Self {
            stitches_per_cm: 3.0,
            rows_per_cm: 3.0,
        }
    }
}

impl Gauge {
    /// Validate gauge values.
    pub fn validate(&self) -> Result<()> {
        if !(self.stitches_per_cm > 0.0) || !self.stitches_per_cm.is_finite() {
            return Err(PatternError::InvalidGauge(format!(
                "stitches_per_cm must be positive, got {}",
                self.stitches_per_cm
            )));
        }
        if !(self.rows_per_cm > 0.0) || !self.rows_per_cm.is_finite() {
            return Err(PatternError::InvalidGauge(format!(
                "rows_per_cm must be positive, got {}",
                self.rows_per_cm
            )));
        }
        Ok(())
    }
}

/// How a row whose count cannot be reached in one row is handled.
///
/// `Strict` is the hard contract: generation fails on the first row that
/// needs more than one increase per stitch or one decrease per pair.
/// `Ease` is the default and spreads such a change over several rows, which
/// can leave the closing row with more stitches than the profile asks for
/// (a 94-stitch capsule closed this way ends on 30 stitches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionLimit {
    /// Fail with `OverIncrease` / `OverDecrease`.
    Strict,
    /// Hold the row to the nearest reachable count and keep going.
    #[default]
    Ease,
}

/// Heuristics for time and yarn estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Estimates {
    /// Working time per stitch (seconds).
    pub seconds_per_stitch: f64,
    /// Yarn used per stitch (cm). Derived from the gauge when unset.
    pub yarn_length_per_stitch_cm: Option<f64>,
}

impl Default for Estimates {
    fn default() -> Self {
        Self {
            seconds_per_stitch: 3.0,
            yarn_length_per_stitch_cm: None,
        }
    }
}

impl Estimates {
    /// Yarn per stitch (cm) for the given gauge.
    pub fn yarn_per_stitch_cm(&self, gauge: &Gauge) -> f64 {
        self.yarn_length_per_stitch_cm
            .unwrap_or(YARN_WIDTHS_PER_STITCH / gauge.stitches_per_cm)
    }
}

/// Pattern generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSettings {
    /// Height of the finished piece (cm).
    pub total_height_cm: f64,
    /// Yarn gauge.
    pub gauge: Gauge,
    /// Stitches in the magic ring.
    pub starting_stitch_count: u32,
    /// Smallest count on any row but the last.
    pub minimum_stitches: u32,
    /// Smallest count on the closing row.
    pub closing_minimum: u32,
    /// How decreases are worked.
    pub decrease_style: DecreaseStyle,
    /// Handling of rows that change too steeply.
    pub transition_limit: TransitionLimit,
    /// Time and yarn heuristics.
    pub estimates: Estimates,
    /// Rows between progress checkpoints.
    pub checkpoint_interval: usize,
}

impl Default for PatternSettings {
    fn default() -> Self {
        let counts = CountSettings::default();
        Self {
            total_height_cm: 10.0,
            gauge: Gauge::default(),
            starting_stitch_count: counts.starting_stitch_count,
            minimum_stitches: counts.minimum_stitches,
            closing_minimum: counts.closing_minimum,
            decrease_style: DecreaseStyle::default(),
            transition_limit: TransitionLimit::default(),
            estimates: Estimates::default(),
            checkpoint_interval: 32,
        }
    }
}

impl PatternSettings {
    /// Validate settings.
    ///
    /// The total height is checked by the row sampler and reported as an
    /// invalid profile.
    pub fn validate(&self) -> Result<()> {
        self.gauge.validate()?;
        if self.starting_stitch_count == 0 {
            return Err(PatternError::InvalidSettings(
                "starting_stitch_count must be at least 1".into(),
            ));
        }
        if self.minimum_stitches == 0 {
            return Err(PatternError::InvalidSettings(
                "minimum_stitches must be at least 1".into(),
            ));
        }
        if self.checkpoint_interval == 0 {
            return Err(PatternError::InvalidSettings(
                "checkpoint_interval must be at least 1".into(),
            ));
        }
        if !(self.estimates.seconds_per_stitch >= 0.0)
            || !self.estimates.seconds_per_stitch.is_finite()
        {
            return Err(PatternError::InvalidSettings(
                "seconds_per_stitch must be non-negative".into(),
            ));
        }
        if let Some(yarn) = self.estimates.yarn_length_per_stitch_cm {
            if !(yarn > 0.0) || !yarn.is_finite() {
                return Err(PatternError::InvalidSettings(
                    "yarn_length_per_stitch_cm must be positive".into(),
                ));
            }
        }
        Ok(())
    }

    /// The stitch-count limits as used by [`target_count`].
    pub fn count_settings(&self) -> CountSettings {
        CountSettings {
            starting_stitch_count: self.starting_stitch_count,
            minimum_stitches: self.minimum_stitches,
            closing_minimum: self.closing_minimum,
        }
    }
}

/// Aggregate figures for a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMetadata {
    /// Number of rows.
    pub total_rows: usize,
    /// Sum of every row's stitch count.
    pub total_stitches: u64,
    /// Estimated working time (minutes).
    pub estimated_time_minutes: f64,
    /// Estimated yarn use (metres).
    pub yarn_length_meters: f64,
}

/// Finished size of the piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Height (cm).
    pub height_cm: f64,
    /// Diameter at the widest row (cm).
    pub max_diameter_cm: f64,
}

/// A complete pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrochetPattern {
    /// Rows in working order.
    pub rows: Vec<Row>,
    /// Aggregate figures.
    pub metadata: PatternMetadata,
    /// Gauge the pattern was sized for.
    pub gauge: Gauge,
    /// Finished size.
    pub dimensions: Dimensions,
}

/// Receives a checkpoint every few rows during generation.
pub trait Progress {
    /// Called after `rows_done` of `total_rows` rows are planned.
    /// Returning `Break` cancels generation.
    fn checkpoint(&mut self, rows_done: usize, total_rows: usize) -> ControlFlow<()>;
}

impl<F> Progress for F
where
    F: FnMut(usize, usize) -> ControlFlow<()>,
{
    fn checkpoint(&mut self, rows_done: usize, total_rows: usize) -> ControlFlow<()> {
        self(rows_done, total_rows)
    }
}

/// Generate a pattern for a profile.
///
/// This is the main entry point. It:
/// 1. Samples the profile at the centre of every row
/// 2. Starts with a magic ring of `starting_stitch_count` stitches
/// 3. Derives each later row's count from its radius
/// 4. Plans the increases or decreases into that count
/// 5. Computes aggregate estimates
pub fn generate(profile: &ProfileCurve, settings: &PatternSettings) -> Result<CrochetPattern> {
    let mut no_progress = |_: usize, _: usize| -> ControlFlow<()> { ControlFlow::Continue(()) };
    generate_with_progress(profile, settings, &mut no_progress)
}

/// Generate a pattern, reporting progress every `checkpoint_interval` rows.
pub fn generate_with_progress(
    profile: &ProfileCurve,
    settings: &PatternSettings,
    progress: &mut impl Progress,
) -> Result<CrochetPattern> {
    settings.validate()?;

    let samples = sample_rows(profile, settings.total_height_cm, settings.gauge.rows_per_cm)?;
    let total = samples.len();
    let counts = settings.count_settings();

    let mut rows: Vec<Row> = Vec::with_capacity(total);
    let mut previous = 0;

    for sample in &samples {
        let row_number = sample.row_index + 1;
        let row_err = |source| PatternError::Row {
            row: row_number,
            source,
        };
        let position = RowPosition::of(sample.row_index, total);
        let target = target_count(
            sample.radius,
            settings.gauge.stitches_per_cm,
            position,
            &counts,
        )
        .map_err(row_err)?;

        let row = if position == RowPosition::First {
            Row {
                row_number,
                actions: vec![StitchAction::SingleCrochet; target as usize],
                stitch_count_after: target,
                target_count: target,
            }
        } else {
            let count = match settings.transition_limit {
                TransitionLimit::Strict => target,
                TransitionLimit::Ease => {
                    let range = feasible_range(previous);
                    target.clamp(*range.start(), *range.end())
                }
            };
            if count != target {
                log::debug!(
                    "row {}: eased {} -> {} stitches (profile asked for {})",
                    row_number,
                    previous,
                    count,
                    target
                );
            }
            let actions =
                plan_transition(previous, count, settings.decrease_style).map_err(row_err)?;
            Row {
                row_number,
                actions,
                stitch_count_after: count,
                target_count: target,
            }
        };

        previous = row.stitch_count_after;
        rows.push(row);

        let done = rows.len();
        if (done % settings.checkpoint_interval == 0 || done == total)
            && progress.checkpoint(done, total).is_break()
        {
            return Err(PatternError::Cancelled { row: row_number });
        }
    }

    let metadata = compute_metadata(&rows, settings);
    let max_count = rows.iter().map(|r| r.stitch_count_after).max().unwrap_or(0);
    let dimensions = Dimensions {
        height_cm: total as f64 / settings.gauge.rows_per_cm,
        max_diameter_cm: f64::from(max_count) / (std::f64::consts::PI * settings.gauge.stitches_per_cm),
    };

    log::info!(
        "generated {} rows, {} stitches ({:.0} min, {:.1} m yarn)",
        metadata.total_rows,
        metadata.total_stitches,
        metadata.estimated_time_minutes,
        metadata.yarn_length_meters
    );

    Ok(CrochetPattern {
        rows,
        metadata,
        gauge: settings.gauge,
        dimensions,
    })
}

fn compute_metadata(rows: &[Row], settings: &PatternSettings) -> PatternMetadata {
    let total_stitches: u64 = rows.iter().map(|r| u64::from(r.stitch_count_after)).sum();
    let stitches = total_stitches as f64;
    PatternMetadata {
        total_rows: rows.len(),
        total_stitches,
        estimated_time_minutes: stitches * settings.estimates.seconds_per_stitch / 60.0,
        yarn_length_meters: stitches * settings.estimates.yarn_per_stitch_cm(&settings.gauge)
            / 100.0,
    }
}
