use std::path::{Path, PathBuf};

use tracing::{debug, info};

use drsxml_model::Record;

use crate::csv_table::read_csv_table;
use crate::dates::{normalize_book_reviews, normalize_proceedings};
use crate::detection::RecordKind;
use crate::error::{IngestError, Result};
use crate::spreadsheet::read_spreadsheet_table;
use crate::table::SourceTable;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm", "xlsb", "ods"];

/// Options for [`load_records`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Worksheet to read; the first sheet when `None`. Ignored for CSV.
    pub sheet: Option<String>,
    /// Expected record kind; detected from the columns when `None`.
    pub kind: Option<RecordKind>,
}

/// Normalized records from one source file.
#[derive(Debug, Clone)]
pub struct LoadedRecords {
    pub source: PathBuf,
    pub kind: RecordKind,
    pub records: Vec<Record>,
}

/// Read a spreadsheet or CSV file into a table, choosing the reader by
/// extension.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<SourceTable> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if extension == "csv" {
        read_csv_table(path)
    } else if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
        read_spreadsheet_table(path, sheet)
    } else {
        Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Load and normalize the records of one source file.
pub fn load_records(path: &Path, options: &LoadOptions) -> Result<LoadedRecords> {
    let table = read_table(path, options.sheet.as_deref())?;
    if table.is_empty() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "read source table"
    );

    let kind = match options.kind {
        Some(kind) => {
            if let Some(column) = kind.missing_column(&table) {
                return Err(IngestError::MissingColumn {
                    column: column.to_string(),
                    path: path.to_path_buf(),
                });
            }
            kind
        }
        None => RecordKind::detect(&table).ok_or_else(|| IngestError::UnknownFormat {
            path: path.to_path_buf(),
        })?,
    };

    let mut records = table.into_records();
    match kind {
        RecordKind::BookReviews => normalize_book_reviews(&mut records)?,
        RecordKind::Proceedings => normalize_proceedings(&mut records),
    }
    info!(path = %path.display(), %kind, records = records.len(), "loaded records");

    Ok(LoadedRecords {
        source: path.to_path_buf(),
        kind,
        records,
    })
}
