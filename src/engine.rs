use tracing::{error, info};

use crate::document::{Disposer, Document, DomEvent};
use crate::math::color::ParseColorError;
use crate::math::pair::contrast_for_pair;
use crate::math::wcag::Conformance;
use crate::types::{AuditOptions, AuditOutcome, CellClass, ContrastRecord, RawCell};

/// Decide whether a cell carries enough data to audit.
///
/// Total over all inputs: missing or empty text/colors never error, the cell
/// just classifies as `Unusable`.
pub fn classify(cell: &RawCell) -> CellClass {
    match (&cell.color, &cell.background_color) {
        (Some(fg), Some(bg))
            if !cell.text_content.is_empty() && !fg.is_empty() && !bg.is_empty() =>
        {
            CellClass::Usable {
                text: cell.text_content.clone(),
                fg: fg.clone(),
                bg: bg.clone(),
            }
        }
        _ => CellClass::Unusable,
    }
}

/// Run the select -> enrich -> threshold pipeline over `cells`.
///
/// Document order is preserved through every stage. A malformed color on a
/// usable cell aborts the whole run; the caller is expected to have
/// pre-filtered its input. On success the passing text is emitted once
/// through `tracing`.
pub fn audit(cells: &[RawCell], options: &AuditOptions) -> Result<AuditOutcome, ParseColorError> {
    // Select: keep usable cells, count the rest.
    let mut usable = Vec::new();
    let mut skipped_count = 0usize;
    for cell in cells {
        match classify(cell) {
            CellClass::Usable { text, fg, bg } => usable.push((text, fg, bg)),
            CellClass::Unusable => skipped_count += 1,
        }
    }

    // Enrich: one record per usable cell.
    let records = usable
        .into_iter()
        .map(|(text, fg, bg)| {
            let ratio = contrast_for_pair(&fg, &bg)?;
            Ok(ContrastRecord {
                text_content: text,
                color: fg,
                background_color: bg,
                ratio,
                conformance: Conformance::from_ratio(ratio),
            })
        })
        .collect::<Result<Vec<_>, ParseColorError>>()?;

    // Threshold: strictly greater than the cutoff. A non-finite ratio
    // compares false and lands in `failed`.
    let (passed, failed): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|record| record.ratio > options.ratio_cutoff);

    let passing_text: String = passed
        .iter()
        .map(|record| record.text_content.as_str())
        .collect();
    info!(
        passed = passed.len(),
        failed = failed.len(),
        skipped = skipped_count,
        "{passing_text}"
    );

    Ok(AuditOutcome {
        passed,
        failed,
        skipped_count,
        passing_text,
    })
}

/// Register the one content-loaded handler that runs the audit.
///
/// The handler reads the cell collection fresh on every firing, so repeated
/// loads recompute from scratch. A failed run is reported through `tracing`
/// and produces no output.
pub fn install(doc: &mut dyn Document, options: AuditOptions) -> Disposer {
    let id = doc.add_listener(
        DomEvent::ContentLoaded,
        Box::new(move |doc| {
            let cells = doc.cells();
            if let Err(err) = audit(&cells, &options) {
                error!(%err, "contrast audit aborted");
            }
        }),
    );
    Disposer::new(id)
}
