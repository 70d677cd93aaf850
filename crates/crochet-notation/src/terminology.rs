//! Stitch terminology (US and UK naming).

use crochet_pattern::StitchAction;
use serde::{Deserialize, Serialize};

/// Naming convention for stitches.
///
/// The two conventions name the same stitch differently: the US single
/// crochet is the UK double crochet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terminology {
    /// US terms.
    #[default]
    Us,
    /// UK terms.
    Uk,
}

impl Terminology {
    /// Short form used in row instructions.
    pub fn abbreviation(self, action: StitchAction) -> &'static str {
        match (self, action) {
            (Terminology::Uk, StitchAction::SingleCrochet) => "dc",
            (_, action) => action.abbreviation(),
        }
    }

    /// Parse a short form written in this terminology.
    pub fn parse(self, abbreviation: &str) -> Option<StitchAction> {
        match (self, abbreviation) {
            (Terminology::Uk, "dc") => Some(StitchAction::SingleCrochet),
            (Terminology::Uk, "sc") => None,
            (_, s) => StitchAction::from_abbreviation(s),
        }
    }

    /// Full description for the abbreviation legend.
    pub fn description(self, action: StitchAction) -> &'static str {
        match (self, action) {
            (Terminology::Us, StitchAction::SingleCrochet) => "single crochet",
            (Terminology::Uk, StitchAction::SingleCrochet) => "double crochet",
            (Terminology::Us, StitchAction::Increase) => "2 sc in the same stitch",
            (Terminology::Uk, StitchAction::Increase) => "2 dc in the same stitch",
            (Terminology::Us, StitchAction::Decrease) => "sc 2 stitches together",
            (Terminology::Uk, StitchAction::Decrease) => "dc 2 stitches together",
            (_, StitchAction::InvisibleDecrease) => {
                "insert hook in front loops of next 2 stitches, yarn over, pull through both loops, finish as a normal stitch"
            }
        }
    }

    /// Label shown in the pattern header.
    pub fn label(self) -> &'static str {
        match self {
            Terminology::Us => "US terms",
            Terminology::Uk => "UK terms",
        }
    }
}
