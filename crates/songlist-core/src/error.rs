use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed song record on line {line}: expected 4 fields, found {fields}")]
    MalformedRecord { line: u64, fields: usize },

    #[error("invalid year on line {line}: {value:?}")]
    InvalidYear { line: u64, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
