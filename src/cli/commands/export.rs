//! Export command handler.

use anyhow::Result;

use crate::terms::{ExportFormat, TermSet, export_terms};
use crate::ui::Style;

/// Writes `terms` to `output` in `format` and reports the path.
pub fn run_export(terms: &TermSet, format: ExportFormat, output: &str) -> Result<()> {
    let path = export_terms(terms, format, output)?;

    crate::status!(
        "{} Exported {} terms to {}",
        Style::success("✓"),
        terms.len(),
        Style::value(path.display())
    );
    Ok(())
}
