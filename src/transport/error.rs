// Sheetkey — Transport error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Spreadsheet not found")]
    DocumentNotFound,

    #[error("Row {0} is out of bounds")]
    RowOutOfBounds(usize),

    #[error("Column {0} is out of bounds")]
    ColumnOutOfBounds(usize),

    #[error("API error: {0}")]
    Api(String),
}
