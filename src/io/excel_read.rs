use std::path::Path;

use calamine::{DataType, Range, Reader, Xlsx, open_workbook};

use crate::error::{Result, ToolError};
use crate::plan::Sheet;

/// Reads the first worksheet of a workbook back into a [`Sheet`] following
/// the layout produced by [`write_sheet`](crate::io::excel_write::write_sheet):
/// the first row is the header, blank cells become `None`.
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook has no worksheets".into()))?;
    let range = read_required_sheet(&mut workbook, &sheet_name)?;

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header
            .iter()
            .map(|cell| cell_to_string(Some(cell)).unwrap_or_default())
            .collect(),
        None => Vec::new(),
    };

    let rows = rows
        .map(|row| {
            (0..columns.len())
                .map(|col_idx| cell_to_string(row.get(col_idx)))
                .collect()
        })
        .collect();

    Ok(Sheet {
        sheet_name,
        columns,
        rows,
    })
}

fn read_required_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<Range<DataType>> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{name}'")))?;
    let range = range_result.map_err(ToolError::from)?;
    Ok(range)
}

fn cell_to_string(cell: Option<&DataType>) -> Option<String> {
    match cell {
        Some(DataType::String(value)) => Some(value.clone()),
        Some(DataType::Float(value)) => Some(value.to_string()),
        Some(DataType::Int(value)) => Some(value.to_string()),
        Some(DataType::Bool(value)) => Some(value.to_string()),
        Some(DataType::Empty) | None => None,
        Some(other) => Some(other.to_string()),
    }
}
