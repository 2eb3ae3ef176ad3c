use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::warn;

use crate::error::Result;
use crate::plan::Sheet;

/// Longest string, in characters, that Excel accepts in a single cell.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Writes the sheet to the given path as a single-worksheet workbook,
/// replacing any existing file. Missing cells are left blank and values past
/// [`MAX_CELL_CHARS`] are truncated.
pub fn write_sheet(path: &Path, sheet: &Sheet) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&sheet.sheet_name)?;

    for (col_idx, header) in sheet.columns.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, header)?;
    }

    for (row_idx, row) in sheet.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let Some(value) = cell else {
                continue;
            };

            let value = match value.char_indices().nth(MAX_CELL_CHARS) {
                Some((cut, _)) => {
                    let title = row.first().and_then(|title| title.as_deref());
                    warn!(
                        title = title.unwrap_or_default(),
                        column = sheet.columns[col_idx].as_str(),
                        chars = value.chars().count(),
                        "truncating value to the Excel cell limit"
                    );
                    &value[..cut]
                }
                None => value.as_str(),
            };
            worksheet.write_string((row_idx + 1) as u32, col_idx as u16, value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
