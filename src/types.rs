use serde::{Deserialize, Serialize};

use crate::math::wcag::Conformance;

/// Candidate cell as exposed by the document collaborator.
/// `color` / `background_color` are the raw inline style values, if present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCell {
    pub text_content: String,
    pub color: Option<String>,
    pub background_color: Option<String>,
}

/// Outcome of classifying a `RawCell` for audit eligibility.
///
/// A cell is usable only when its text and both inline colors are present and
/// non-empty. Classification is total: anything else is `Unusable`, which the
/// select stage drops silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellClass {
    Usable { text: String, fg: String, bg: String },
    Unusable,
}

/// One audited cell: the original text/color data plus the computed ratio.
/// Immutable once built; held in document order.
#[derive(Debug, Clone, Serialize)]
pub struct ContrastRecord {
    pub text_content: String,
    pub color: String,
    pub background_color: String,
    /// Raw computed contrast ratio, >= 1.0 for in-range channels.
    pub ratio: f64,
    pub conformance: Conformance,
}

/// Ratio a record must exceed (strictly) to survive the threshold stage.
///
/// Deliberately below the WCAG AA normal-text minimum of 4.5: the exercise
/// this engine reproduces keys its expected output to 3.5. Changing it
/// changes observable output.
pub const DEFAULT_RATIO_CUTOFF: f64 = 3.5;

/// Tuning knobs for a single audit run.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    pub ratio_cutoff: f64,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            ratio_cutoff: DEFAULT_RATIO_CUTOFF,
        }
    }
}

/// Categorized result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct AuditOutcome {
    pub passed: Vec<ContrastRecord>,
    pub failed: Vec<ContrastRecord>,
    /// Cells dropped at the select stage (missing text or colors).
    pub skipped_count: usize,
    /// `text_content` of every passing record, document order, no separator.
    pub passing_text: String,
}

impl AuditOutcome {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
