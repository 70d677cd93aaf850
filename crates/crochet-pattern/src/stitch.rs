//! Stitch actions and rows.

use serde::{Deserialize, Serialize};

use crate::compress::compress;

/// One instruction worked into the previous row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StitchAction {
    /// One stitch into one stitch.
    SingleCrochet,
    /// Two stitches into one stitch.
    Increase,
    /// One stitch across two stitches, worked through both loops.
    Decrease,
    /// One stitch across two stitches, worked through the front loops only.
    InvisibleDecrease,
}

impl StitchAction {
    /// Previous-row stitches this action is worked into.
    pub fn consumes(self) -> u32 {
        match self {
            StitchAction::SingleCrochet | StitchAction::Increase => 1,
            StitchAction::Decrease | StitchAction::InvisibleDecrease => 2,
        }
    }

    /// New stitches this action leaves on the row.
    pub fn emits(self) -> u32 {
        match self {
            StitchAction::Increase => 2,
            StitchAction::SingleCrochet
            | StitchAction::Decrease
            | StitchAction::InvisibleDecrease => 1,
        }
    }

    /// Standard US abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            StitchAction::SingleCrochet => "sc",
            StitchAction::Increase => "inc",
            StitchAction::Decrease => "dec",
            StitchAction::InvisibleDecrease => "invdec",
        }
    }

    /// Parse a standard US abbreviation.
    pub fn from_abbreviation(s: &str) -> Option<Self> {
        match s {
            "sc" => Some(StitchAction::SingleCrochet),
            "inc" => Some(StitchAction::Increase),
            "dec" => Some(StitchAction::Decrease),
            "invdec" => Some(StitchAction::InvisibleDecrease),
            _ => None,
        }
    }

    /// Is this one of the decrease variants?
    pub fn is_decrease(self) -> bool {
        matches!(self, StitchAction::Decrease | StitchAction::InvisibleDecrease)
    }
}

/// How decreases are worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecreaseStyle {
    /// Through both loops.
    Standard,
    /// Through the front loops only; leaves no gap.
    #[default]
    Invisible,
}

impl DecreaseStyle {
    /// The action emitted for a decrease in this style.
    pub fn action(self) -> StitchAction {
        match self {
            DecreaseStyle::Standard => StitchAction::Decrease,
            DecreaseStyle::Invisible => StitchAction::InvisibleDecrease,
        }
    }
}

/// Previous-row stitches consumed by a sequence of actions.
pub fn consumed(actions: &[StitchAction]) -> u32 {
    actions.iter().map(|a| a.consumes()).sum()
}

/// New stitches produced by a sequence of actions.
pub fn emitted(actions: &[StitchAction]) -> u32 {
    actions.iter().map(|a| a.emits()).sum()
}

/// One round of the pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based row number.
    pub row_number: usize,
    /// Actions in working order.
    pub actions: Vec<StitchAction>,
    /// Stitches on the row once it is complete.
    pub stitch_count_after: u32,
    /// Stitch count the profile asked for at this row.
    ///
    /// Equal to `stitch_count_after` unless the transition limit spread a
    /// steep change over several rows.
    pub target_count: u32,
}

impl Row {
    /// Did the transition limit hold this row short of its target?
    pub fn is_eased(&self) -> bool {
        self.stitch_count_after != self.target_count
    }

    /// Number of increases in this row.
    pub fn increases(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| **a == StitchAction::Increase)
            .count()
    }

    /// Number of decreases in this row.
    pub fn decreases(&self) -> usize {
        self.actions.iter().filter(|a| a.is_decrease()).count()
    }

    /// Compact instruction string for this row.
    pub fn instructions(&self) -> String {
        compress(&self.actions)
    }
}
