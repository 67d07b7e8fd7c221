use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open sales file")]
    FileError(#[from] std::io::Error),
    #[error("could not parse CSV rows to sales records")]
    CsvError(#[from] csv::Error),
    #[error("could not write order workbook")]
    WorkbookError(#[from] rust_xlsxwriter::XlsxError),
    #[error(transparent)]
    DataError(#[from] crate::domain::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
