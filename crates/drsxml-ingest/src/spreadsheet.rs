//! Workbook loading through calamine (xls, xlsx, xlsm, xlsb, ods).

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::table::SourceTable;

/// Format used for spreadsheet date cells.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read one worksheet into a [`SourceTable`].
///
/// Uses `sheet` when given, otherwise the first sheet of the workbook.
pub fn read_spreadsheet_table(path: &Path, sheet: Option<&str>) -> Result<SourceTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_error(path, &e))?;
    let sheet_names = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|candidate| candidate == name) {
                return Err(IngestError::SheetNotFound {
                    sheet: name.to_string(),
                    path: path.to_path_buf(),
                });
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::EmptyTable {
                path: path.to_path_buf(),
            })?,
    };
    debug!(path = %path.display(), sheet = %sheet_name, "reading worksheet");

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| spreadsheet_error(path, &e))?;
    let raw_rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    Ok(SourceTable::from_raw_rows(raw_rows))
}

/// Render a cell the way it reads in the sheet.
///
/// Whole floats lose their fraction (`12.0` → `12`) and date cells become
/// `YYYY-MM-DD HH:MM:SS`.
#[allow(unreachable_patterns)]
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_float(*value),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => value
            .as_datetime()
            .map(|dt| dt.format(DATETIME_FORMAT).to_string())
            .unwrap_or_else(|| value.to_string()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        Data::Error(error) => {
            warn!(?error, "spreadsheet cell contains an error value");
            String::new()
        }
        other => other.to_string(),
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn spreadsheet_error(path: &Path, error: &dyn std::fmt::Display) -> IngestError {
    IngestError::Spreadsheet {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use calamine::{ExcelDateTime, ExcelDateTimeType};

    use super::*;

    #[test]
    fn whole_floats_drop_fraction() {
        assert_eq!(cell_to_string(&Data::Float(12.0)), "12");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    fn date_cell(serial: f64) -> Data {
        Data::DateTime(ExcelDateTime::new(serial, ExcelDateTimeType::DateTime, false))
    }

    #[test]
    fn date_cells_render_as_timestamps() {
        assert_eq!(cell_to_string(&date_cell(45082.0)), "2023-06-05 00:00:00");
        assert_eq!(cell_to_string(&date_cell(45082.5)), "2023-06-05 12:00:00");
    }

    #[test]
    fn serials_before_phantom_leap_day_are_not_shifted() {
        assert_eq!(cell_to_string(&date_cell(1.0)), "1900-01-01 00:00:00");
        assert_eq!(cell_to_string(&date_cell(59.0)), "1900-02-28 00:00:00");
        assert_eq!(cell_to_string(&date_cell(61.0)), "1900-03-01 00:00:00");
    }

    #[test]
    fn missing_workbook_is_not_found() {
        let error = read_spreadsheet_table(Path::new("does/not/exist.xlsx"), None)
            .expect_err("missing file");
        assert!(matches!(error, IngestError::FileNotFound { .. }));
    }
}
