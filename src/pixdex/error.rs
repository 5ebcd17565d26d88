use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
