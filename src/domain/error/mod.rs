use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("sales file is missing required column {name}")]
    MissingColumn { name: &'static str },
    #[error("line {line}: could not parse {column} value {value:?} as a number")]
    InvalidNumber {
        column: &'static str,
        line: u64,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
