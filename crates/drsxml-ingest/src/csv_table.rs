use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::table::SourceTable;

/// Read a CSV file into a [`SourceTable`].
pub fn read_csv_table(path: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| csv_error(path, source))?;
        raw_rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(SourceTable::from_raw_rows(raw_rows))
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(io) = source.kind() {
        if io.kind() == std::io::ErrorKind::NotFound {
            return IngestError::FileNotFound {
                path: path.to_path_buf(),
            };
        }
    }
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}
