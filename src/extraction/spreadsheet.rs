// Spreadsheet text extraction (xlsx / xls) via calamine
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

use crate::types::{AnalyzerError, Result};

/// Flatten the first worksheet row by row into space-separated cell text.
/// The first row is treated as column headers and left out. Empty cells
/// contribute an empty string.
pub fn extract_spreadsheet_text(path: &Path) -> Result<String> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| AnalyzerError::extraction("spreadsheet", e))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| AnalyzerError::extraction("spreadsheet", e))?,
        None => {
            tracing::warn!(path = %path.display(), "workbook has no worksheets");
            return Ok(String::new());
        }
    };

    Ok(flatten_range(&range))
}

fn flatten_range(range: &Range<Data>) -> String {
    range
        .rows()
        .skip(1)
        .flat_map(|row| row.iter().map(cell_to_string))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERROR: {:?}", e),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(dt) => dt.clone(),
        Data::DurationIso(d) => d.clone(),
    }
}
