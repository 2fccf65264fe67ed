use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Column not found in original table: '{column}' is not a column of '{source_name}'")]
    ColumnNotFound { column: String, source_name: String },

    #[error("Field not found in original table fields: '{field}' is not projected by '{source_name}'")]
    FieldNotFound { field: String, source_name: String },

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Invalid render settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}
