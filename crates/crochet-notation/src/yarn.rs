//! Yarn profile definitions.

use crochet_pattern::{Gauge, PatternSettings};
use serde::{Deserialize, Serialize};

/// Standard yarn weight classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YarnWeight {
    /// Fingering / sock (CYC 1).
    Fingering,
    /// Sport (CYC 2).
    Sport,
    /// DK / light worsted (CYC 3).
    Dk,
    /// Worsted / aran (CYC 4).
    Worsted,
    /// Chunky / bulky (CYC 5).
    Chunky,
}

impl YarnWeight {
    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            YarnWeight::Fingering => "fingering",
            YarnWeight::Sport => "sport",
            YarnWeight::Dk => "DK",
            YarnWeight::Worsted => "worsted",
            YarnWeight::Chunky => "chunky",
        }
    }
}

/// Yarn and hook combination with its amigurumi gauge.
///
/// Gauges are for tight single crochet as used for stuffed toys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YarnProfile {
    /// Profile name.
    pub name: String,
    /// Yarn weight class.
    pub weight: YarnWeight,
    /// Hook size (mm).
    pub hook_mm: f64,
    /// Gauge with this yarn and hook.
    pub gauge: Gauge,
    /// Yarn used per single crochet (cm).
    pub yarn_length_per_stitch_cm: f64,
}

impl Default for YarnProfile {
    fn default() -> Self {
        Self::generic()
    }
}

impl YarnProfile {
    /// Generic profile matching the default gauge.
    pub fn generic() -> Self {
        Self {
            name: "Generic".into(),
            weight: YarnWeight::Dk,
            hook_mm: 3.0,
            gauge: Gauge::default(),
            yarn_length_per_stitch_cm: 1.8,
        }
    }

    /// Fingering weight with a 2.25 mm hook.
    pub fn fingering() -> Self {
        Self {
            name: "Fingering".into(),
            weight: YarnWeight::Fingering,
            hook_mm: 2.25,
            gauge: Gauge {
                stitches_per_cm: 4.0,
                rows_per_cm: 4.4,
            },
            yarn_length_per_stitch_cm: 1.3,
        }
    }

    /// Sport weight with a 2.75 mm hook.
    pub fn sport() -> Self {
        Self {
            name: "Sport".into(),
            weight: YarnWeight::Sport,
            hook_mm: 2.75,
            gauge: Gauge {
                stitches_per_cm: 3.4,
                rows_per_cm: 3.6,
            },
            yarn_length_per_stitch_cm: 1.6,
        }
    }

    /// DK weight with a 3.0 mm hook.
    pub fn dk() -> Self {
        Self {
            name: "DK".into(),
            weight: YarnWeight::Dk,
            hook_mm: 3.0,
            gauge: Gauge {
                stitches_per_cm: 3.0,
                rows_per_cm: 3.2,
            },
            yarn_length_per_stitch_cm: 1.8,
        }
    }

    /// Worsted weight with a 3.75 mm hook.
    pub fn worsted() -> Self {
        Self {
            name: "Worsted".into(),
            weight: YarnWeight::Worsted,
            hook_mm: 3.75,
            gauge: Gauge {
                stitches_per_cm: 2.4,
                rows_per_cm: 2.6,
            },
            yarn_length_per_stitch_cm: 2.2,
        }
    }

    /// Chunky weight with a 5.0 mm hook.
    pub fn chunky() -> Self {
        Self {
            name: "Chunky".into(),
            weight: YarnWeight::Chunky,
            hook_mm: 5.0,
            gauge: Gauge {
                stitches_per_cm: 1.8,
                rows_per_cm: 2.0,
            },
            yarn_length_per_stitch_cm: 3.0,
        }
    }

    /// Get all built-in profiles.
    pub fn all_profiles() -> Vec<Self> {
        vec![
            Self::generic(),
            Self::fingering(),
            Self::sport(),
            Self::dk(),
            Self::worsted(),
            Self::chunky(),
        ]
    }

    /// Look up a built-in profile by name, ignoring case.
    pub fn find(name: &str) -> Option<Self> {
        Self::all_profiles()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Use this yarn's gauge and yarn-per-stitch in `settings`.
    pub fn apply(&self, settings: &mut PatternSettings) {
        settings.gauge = self.gauge;
        settings.estimates.yarn_length_per_stitch_cm = Some(self.yarn_length_per_stitch_cm);
    }
}
