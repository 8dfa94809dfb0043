//! Error types for record loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading records or metadata files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension is not a supported tabular format.
    #[error("unsupported input format for {path}")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// Failed to open or read a spreadsheet workbook.
    #[error("failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    /// Requested worksheet does not exist.
    #[error("sheet '{sheet}' not found in {path}")]
    SheetNotFound { sheet: String, path: PathBuf },

    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to parse a JSON metadata or configuration file.
    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Content Errors ===
    /// Table has no header row.
    #[error("no rows found in {path}")]
    EmptyTable { path: PathBuf },

    /// Column layout matches neither book reviews nor proceedings.
    #[error("unknown record layout in {path}: missing expected columns")]
    UnknownFormat { path: PathBuf },

    /// Column required for the requested record kind is missing.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A date value could not be parsed.
    #[error("invalid {column} value '{value}' in record {record}")]
    InvalidDate {
        column: String,
        value: String,
        record: usize,
    },
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
