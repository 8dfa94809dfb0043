use thiserror::Error;

/// Failures while assembling a deposit document.
#[derive(Debug, Error)]
pub enum DepositError {
    #[error("malformed publication date {value:?} in record {record}: expected YYYY-MM-DD")]
    MalformedDate { record: usize, value: String },
    #[error("proceedings deposit requires at least one record")]
    EmptyProceedings,
}

pub type Result<T> = std::result::Result<T, DepositError>;
