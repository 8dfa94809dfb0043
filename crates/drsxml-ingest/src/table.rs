//! Header plus rows, independent of the file format it came from.

use drsxml_model::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    /// Build a table from raw rows; the first non-empty row is the header.
    ///
    /// Fully empty rows are dropped and short rows are padded with empty
    /// cells.
    pub fn from_raw_rows(raw_rows: Vec<Vec<String>>) -> Self {
        let mut rows = raw_rows
            .into_iter()
            .map(|row| row.iter().map(|cell| normalize_cell(cell)).collect::<Vec<_>>())
            .filter(|row| !row.iter().all(String::is_empty));
        let Some(header_row) = rows.next() else {
            return Self::default();
        };
        let headers: Vec<String> = header_row.iter().map(|h| normalize_header(h)).collect();
        let width = headers.len();
        let rows = rows
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }

    /// One record per row, keyed by header. Blank headers are skipped.
    pub fn into_records(self) -> Vec<Record> {
        let headers = self.headers;
        self.rows
            .into_iter()
            .map(|row| {
                headers
                    .iter()
                    .zip(row)
                    .filter(|(header, _)| !header.is_empty())
                    .map(|(header, value)| (header.clone(), value))
                    .collect::<Record>()
            })
            .collect()
    }
}

fn normalize_header(raw: &str) -> String {
    let mut parts = raw.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
