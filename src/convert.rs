use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::io::{excel_write, xml_read};
use crate::plan::build_sheet;

/// Converts a SafeInCloud XML export into an Excel workbook.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn xml_to_excel(input: &Path, output: &Path) -> Result<()> {
    let extraction = xml_read::read_export(input)?;
    info!(
        record_count = extraction.records.len(),
        field_count = extraction.universe.iter().count(),
        "extracted records from XML export"
    );
    let sheet = build_sheet(&extraction);
    debug!(columns = ?sheet.columns, "column order planned");
    excel_write::write_sheet(output, &sheet)?;
    info!(row_count = sheet.rows.len(), "workbook written");
    Ok(())
}
