//! Error types for pattern generation.

use crochet_profile::ProfileError;
use thiserror::Error;

/// Errors that can occur while generating a pattern.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// The profile curve or its sampling parameters are invalid.
    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] ProfileError),

    /// Gauge values are not positive.
    #[error("invalid gauge: {0}")]
    InvalidGauge(String),

    /// Other settings are out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A specific row could not be planned.
    #[error("row {row}: {source}")]
    Row {
        /// 1-based row number.
        row: usize,
        /// What went wrong in that row.
        #[source]
        source: RowError,
    },

    /// The caller stopped generation at a progress checkpoint.
    #[error("generation cancelled after row {row}")]
    Cancelled {
        /// Last completed 1-based row number.
        row: usize,
    },
}

impl PatternError {
    /// The 1-based row number this error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            PatternError::Row { row, .. } | PatternError::Cancelled { row } => Some(*row),
            _ => None,
        }
    }
}

/// Errors that apply to a single row transition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowError {
    /// More increases are needed than the previous row has stitches.
    #[error("cannot grow from {previous} to {target} stitches in one row")]
    OverIncrease {
        /// Previous row stitch count.
        previous: u32,
        /// Requested stitch count.
        target: u32,
    },

    /// More decrease pairs are needed than the previous row can supply.
    #[error("cannot shrink from {previous} to {target} stitches in one row")]
    OverDecrease {
        /// Previous row stitch count.
        previous: u32,
        /// Requested stitch count.
        target: u32,
    },

    /// The derived stitch count is below one, or not a number.
    #[error("derived stitch count {count} is not a usable row")]
    DegenerateRow {
        /// The derived count.
        count: i64,
    },

    /// The derived stitch count does not fit a row (`u32`).
    #[error("derived stitch count {count} is too large for one row")]
    CountOverflow {
        /// The derived count, saturated to `u64`.
        count: u64,
    },
}

/// Result type for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;
