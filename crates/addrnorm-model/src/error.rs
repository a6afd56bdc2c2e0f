use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("row has {actual} cells but table has {expected} columns")]
    RowArity { expected: usize, actual: usize },
    #[error("column '{column}' has {actual} values but table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
