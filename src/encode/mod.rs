use std::{error, fmt, io};

use crate::TabulatedFunction;

/// Error
///
/// Enum used to represent potential errors when encoding a `TabulatedFunction`. Bytes written
/// before an error stay in the sink.
#[derive(Debug, PartialEq)]
pub enum Error {
    Io(io::ErrorKind),
    TooManyPoints(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(kind) => write!(f, "Failed to write to the sink: {}", kind),
            Error::TooManyPoints(n) => write!(f, "Cannot store {} points in the header", n),
        }
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err.kind())
    }
}

pub trait Encode {
    /// Write all points of `f` and flush the underlying sink.
    fn encode<F>(&mut self, f: &F) -> Result<(), Error>
    where
        F: TabulatedFunction + ?Sized;
}

/// write_text writes `f` to `w` in the text format and flushes `w`.
pub fn write_text<F, W>(f: &F, w: W) -> Result<(), Error>
where
    F: TabulatedFunction + ?Sized,
    W: io::Write,
{
    TextEncoder::new(w).encode(f)
}

/// write_binary writes `f` to `w` in the binary format and flushes `w`.
pub fn write_binary<F, W>(f: &F, w: W) -> Result<(), Error>
where
    F: TabulatedFunction + ?Sized,
    W: io::Write,
{
    BinaryEncoder::new(w).encode(f)
}

pub mod binary_encoder;
pub use self::binary_encoder::BinaryEncoder;

pub mod text_encoder;
pub use self::text_encoder::TextEncoder;
