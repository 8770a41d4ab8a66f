use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read image: {0}")]
    Decode(String),

    #[error("Cannot write image: {0}")]
    Encode(String),

    #[error("Cannot create face engine: {0}")]
    EngineUnavailable(String),

    #[error("Face engine processing failed: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, Error>;
