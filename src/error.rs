use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("DegenerateEquation: a = b = 0 gives gcd 0, no solution family exists")]
    DegenerateEquation,

    #[error("Overflow: {0} does not fit in a signed 64-bit integer")]
    Overflow(&'static str),

    #[error("Invalid integer: {0:?}")]
    InvalidInteger(String),

    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
