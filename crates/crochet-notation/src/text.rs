//! Plain-text pattern rendering.

use crochet_pattern::{compress_with, CrochetPattern, Row, StitchAction};
use serde::{Deserialize, Serialize};

use crate::terminology::Terminology;
use crate::yarn::YarnProfile;

/// Options for the written pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    /// Pattern title.
    pub title: String,
    /// Stitch naming convention.
    pub terminology: Terminology,
    /// Yarn named in the materials list, if known.
    pub yarn: Option<YarnProfile>,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            title: "Amigurumi".into(),
            terminology: Terminology::default(),
            yarn: None,
        }
    }
}

/// One row as `Row <n>: <instructions> (<count> stitches total)`.
pub fn render_row(row: &Row, terms: Terminology) -> String {
    format!(
        "Row {}: {} ({} stitches total)",
        row.row_number,
        compress_with(&row.actions, move |a| terms.abbreviation(a)),
        row.stitch_count_after
    )
}

/// The header block: materials, gauge, finished size, estimates and the
/// abbreviation legend.
pub fn render_header(pattern: &CrochetPattern, settings: &TextSettings) -> String {
    let terms = settings.terminology;
    let meta = &pattern.metadata;
    let mut lines = vec![
        settings.title.clone(),
        "=".repeat(settings.title.chars().count().max(1)),
        String::new(),
        "Materials".into(),
    ];

    match &settings.yarn {
        Some(yarn) => {
            lines.push(format!(
                "- Yarn: {} ({} weight), about {:.0} m",
                yarn.name,
                yarn.weight.label(),
                meta.yarn_length_meters.ceil()
            ));
            lines.push(format!("- Hook: {:.2} mm", yarn.hook_mm));
        }
        None => lines.push(format!("- Yarn: about {:.0} m", meta.yarn_length_meters.ceil())),
    }
    lines.push("- Fiberfill stuffing, stitch marker, tapestry needle".into());

    let gauge = &pattern.gauge;
    lines.extend([
        String::new(),
        "Gauge".into(),
        format!(
            "- {:.1} stitches and {:.1} rows per cm in {}",
            gauge.stitches_per_cm,
            gauge.rows_per_cm,
            terms.description(StitchAction::SingleCrochet)
        ),
        String::new(),
        "Finished size".into(),
        format!(
            "- {:.1} cm tall, {:.1} cm across at the widest row",
            pattern.dimensions.height_cm, pattern.dimensions.max_diameter_cm
        ),
        String::new(),
        "Estimates".into(),
        format!(
            "- {} rows, {} stitches, {}",
            meta.total_rows,
            meta.total_stitches,
            format_duration(meta.estimated_time_minutes)
        ),
        String::new(),
        format!("Abbreviations ({})", terms.label()),
    ]);

    for action in used_actions(pattern) {
        lines.push(format!(
            "- {}: {}",
            terms.abbreviation(action),
            terms.description(action)
        ));
    }

    lines.extend([
        String::new(),
        "Work in continuous rounds and mark the first stitch of each round.".into(),
        "Start with a magic ring; the first row is worked into it.".into(),
    ]);

    lines.join("\n")
}

/// The complete written pattern.
pub fn render_pattern(pattern: &CrochetPattern, settings: &TextSettings) -> String {
    let mut out = render_header(pattern, settings);
    out.push_str("\n\n");

    for row in &pattern.rows {
        out.push_str(&render_row(row, settings.terminology));
        out.push('\n');
    }

    if let Some(last) = pattern.rows.last() {
        out.push_str(&format!(
            "\nStuff firmly before the opening closes. Fasten off, thread the tail through \
             the front loops of the remaining {} stitches and pull closed.\n",
            last.stitch_count_after
        ));
    }

    out
}

/// Stitch actions that appear in the pattern, in a fixed order.
fn used_actions(pattern: &CrochetPattern) -> Vec<StitchAction> {
    [
        StitchAction::SingleCrochet,
        StitchAction::Increase,
        StitchAction::Decrease,
        StitchAction::InvisibleDecrease,
    ]
    .into_iter()
    .filter(|action| pattern.rows.iter().any(|r| r.actions.contains(action)))
    .collect()
}

fn format_duration(minutes: f64) -> String {
    let total = minutes.round() as u64;
    match (total / 60, total % 60) {
        (0, m) => format!("about {m} min"),
        (h, 0) => format!("about {h} h"),
        (h, m) => format!("about {h} h {m} min"),
    }
}
