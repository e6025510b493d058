use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("CSV writer error: {message}")]
    CsvWriterError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid UTF-8 in rendered output: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Record {index} is invalid: {source}")]
    RecordError {
        index: usize,
        #[source]
        source: Box<CatalogError>,
    },
}

impl CatalogError {
    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::InvalidValueError { field, reason, .. } => {
                format!("Field '{}' is invalid: {}", field, reason)
            }
            CatalogError::RecordError { index, source } => {
                format!("Vehicle #{}: {}", index, source.user_friendly_message())
            }
            CatalogError::CsvError(_)
            | CatalogError::CsvWriterError { .. }
            | CatalogError::SerializationError(_)
            | CatalogError::Utf8Error(_) => format!("Failed to render catalog: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
