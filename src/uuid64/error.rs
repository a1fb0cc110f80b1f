use thiserror::Error;

#[derive(Error, Debug)]
pub enum Uuid64Error {
    #[error("could not parse uuid {input}: {source}")]
    Uuid { input: String, source: uuid::Error },

    #[error("could not parse byte string {input}: {source}")]
    Base64 {
        input: String,
        source: base64::DecodeError,
    },

    #[error("input byte string is not UUID compatible: invalid UUID (got {0} bytes)")]
    ByteLength(usize),

    #[error("no input provided")]
    NoInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Uuid64Error>;
