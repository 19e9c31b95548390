//! Error kinds for the wavelet codec.
//!
//! Mirrors the five error kinds of the original design: a malformed
//! container or PGM header, an unexpected end of the payload, a value
//! presented to a codec outside its codeable range, a Shannon-Fano table
//! that has grown past its cap, and a plain I/O failure.

/// Errors produced anywhere in the codec pipeline.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("input format error: {0}")]
    InputFormat(String),

    #[error("truncated stream: expected more data than was available")]
    Truncated,

    #[error("value {0} is out of the codeable range")]
    OutOfRange(i64),

    #[error("shannon-fano table exceeded its capacity")]
    TableOverflow,

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type DYNERR = Box<dyn std::error::Error>;
pub type STDRESULT = Result<(), DYNERR>;
