//! Profile files: control points plus optional generation settings.
//!
//! TOML (default) or JSON (`.json` extension):
//!
//! ```toml
//! title = "Capsule"
//! height_cm = 10.0
//! points = [[0.0, 0.0], [5.0, 1.0], [5.0, 9.0], [0.0, 10.0]]
//!
//! [settings]
//! decrease_style = "standard"
//!
//! [settings.gauge]
//! stitches_per_cm = 2.5
//! rows_per_cm = 2.5
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use crochet_pattern::PatternSettings;
use crochet_profile::{ControlPoint, ProfileCurve};
use serde::Deserialize;

/// A control point written either as `[x, y]` or `{ x = .., y = .. }`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Pair([f64; 2]),
    Named(ControlPoint),
}

impl From<RawPoint> for ControlPoint {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Pair(pair) => pair.into(),
            RawPoint::Named(point) => point,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileFile {
    pub title: Option<String>,
    /// Piece height; defaults to the distance between the poles.
    pub height_cm: Option<f64>,
    points: Vec<RawPoint>,
    #[serde(default)]
    pub settings: PatternSettings,
}

impl ProfileFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
        } else {
            Self::from_toml(&text).with_context(|| format!("parsing {}", path.display()))
        }
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn profile(&self) -> Result<ProfileCurve> {
        let points = self.points.iter().map(|&p| ControlPoint::from(p)).collect();
        Ok(ProfileCurve::new(points)?)
    }

    /// Settings with the piece height resolved: `override_cm`, then the
    /// file's `height_cm`, then the profile's own height.
    pub fn resolved_settings(
        &self,
        profile: &ProfileCurve,
        override_cm: Option<f64>,
    ) -> PatternSettings {
        let mut settings = self.settings.clone();
        settings.total_height_cm = override_cm
            .or(self.height_cm)
            .unwrap_or_else(|| profile.height());
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crochet_pattern::DecreaseStyle;

    const CAPSULE: &str = r#"
        title = "Capsule"
        points = [[0.0, 0.0], [5.0, 1.0], { x = 5.0, y = 9.0 }, [0.0, 10.0]]

        [settings]
        decrease_style = "standard"

        [settings.gauge]
        stitches_per_cm = 2.5
        rows_per_cm = 2.5
    "#;

    #[test]
    fn test_toml_profile() {
        let file = ProfileFile::from_toml(CAPSULE).unwrap();
        assert_eq!(file.title.as_deref(), Some("Capsule"));
        let profile = file.profile().unwrap();
        assert_eq!(profile.points().len(), 4);
        assert_eq!(profile.points()[2], ControlPoint::new(5.0, 9.0));
        assert_eq!(file.settings.decrease_style, DecreaseStyle::Standard);
        assert_eq!(file.settings.gauge.rows_per_cm, 2.5);
    }

    #[test]
    fn test_height_resolution() {
        let file = ProfileFile::from_toml(CAPSULE).unwrap();
        let profile = file.profile().unwrap();
        assert_eq!(file.resolved_settings(&profile, None).total_height_cm, 10.0);
        assert_eq!(file.resolved_settings(&profile, Some(4.0)).total_height_cm, 4.0);

        let with_height = ProfileFile::from_toml(&format!("height_cm = 7.5\n{CAPSULE}")).unwrap();
        assert_eq!(with_height.resolved_settings(&profile, None).total_height_cm, 7.5);
    }

    #[test]
    fn test_json_profile() {
        let file = ProfileFile::from_json(
            r#"{ "points": [[0, 0], [2, 1], [0, 2]] }"#,
        )
        .unwrap();
        assert!(file.title.is_none());
        assert_eq!(file.settings.starting_stitch_count, 6);
        assert!(file.profile().is_ok());
    }

    #[test]
    fn test_invalid_profile_reported() {
        let file = ProfileFile::from_json(r#"{ "points": [[1, 0], [2, 1], [0, 2]] }"#).unwrap();
        let err = file.profile().unwrap_err();
        assert!(err.to_string().contains("non-zero radius"));
    }
}
