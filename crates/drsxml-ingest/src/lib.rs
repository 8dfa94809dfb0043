//! Record loading: spreadsheets and CSV files in, normalized records out.

pub mod csv_table;
pub mod dates;
pub mod detection;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod spreadsheet;
pub mod table;

pub use csv_table::read_csv_table;
pub use dates::{normalize_book_reviews, normalize_proceedings, parse_datetime};
pub use detection::RecordKind;
pub use error::{IngestError, Result};
pub use loader::{LoadOptions, LoadedRecords, load_records, read_table};
pub use metadata::{load_collection_metadata, load_depositor_config};
pub use spreadsheet::{cell_to_string, read_spreadsheet_table};
pub use table::SourceTable;
