use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Registry error: {message}")]
    Registry { message: String },

    #[error("Source load failed: {message}")]
    Source { message: String },

    #[error("Catalog load failed: {message}")]
    Catalog { message: String },

    #[error("Output write failed: {message}")]
    Output { message: String },
}

pub type Result<T> = std::result::Result<T, MergeError>;
