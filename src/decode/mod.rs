use std::{error, fmt, io};

use crate::stream::{self, Tokenizer};
use crate::ArrayTabulatedFunction;

/// Number of points the decoders allocate for before the first point is read. Larger tables grow
/// as points actually arrive, so a corrupt header cannot trigger a huge allocation by itself.
pub const PREALLOC_POINTS: usize = 1 << 12;

/// Error
///
/// Enum used to represent potential errors when decoding a `TabulatedFunction`.
#[derive(Debug, PartialEq)]
pub enum Error {
    Io(io::ErrorKind),
    UnexpectedEnd,
    MissingToken,
    UnexpectedToken(char),
    InvalidNumber(String),
    InvalidPointCount(i64),
    TooManyPoints { count: usize, max: usize },
}

impl Error {
    /// Returns `true` for errors caused by text that does not follow the token grammar or the
    /// declared point count.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            *self,
            Error::MissingToken
                | Error::UnexpectedToken(_)
                | Error::InvalidNumber(_)
                | Error::InvalidPointCount(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(kind) => write!(f, "Failed to read from the source: {}", kind),
            Error::UnexpectedEnd => write!(f, "Source ended before the declared points"),
            Error::MissingToken => write!(f, "Expected a number, found the end of the input"),
            Error::UnexpectedToken(c) => write!(f, "Expected a number, found {:?}", c),
            Error::InvalidNumber(ref word) => write!(f, "Failed to parse number {:?}", word),
            Error::InvalidPointCount(n) => write!(f, "Invalid point count {}", n),
            Error::TooManyPoints { count, max } => {
                write!(f, "Declared {} points, at most {} allowed", count, max)
            }
        }
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Error::UnexpectedEnd,
            kind => Error::Io(kind),
        }
    }
}

impl From<stream::Error> for Error {
    fn from(err: stream::Error) -> Error {
        match err {
            stream::Error::EOF => Error::MissingToken,
            stream::Error::Io(kind) => Error::Io(kind),
        }
    }
}

/// Limits
///
/// Limits configures what a decoder accepts beyond the format itself. The default trusts the
/// declared point count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_points: Option<usize>,
}

impl Limits {
    pub fn new() -> Self {
        Limits::default()
    }

    /// Reject inputs declaring more than `max` points.
    pub fn max_points(mut self, max: usize) -> Self {
        self.max_points = Some(max);
        self
    }

    /// check validates a declared point count, returning it as a `usize`.
    pub(crate) fn check(&self, declared: i64) -> Result<usize, Error> {
        if declared < 2 {
            return Err(Error::InvalidPointCount(declared));
        }

        let count = usize::try_from(declared).map_err(|_| Error::InvalidPointCount(declared))?;
        match self.max_points {
            Some(max) if count > max => Err(Error::TooManyPoints { count, max }),
            _ => Ok(count),
        }
    }
}

pub trait Decode {
    fn decode(&mut self) -> Result<ArrayTabulatedFunction, Error>;
}

/// read_text parses a function in the text format from `r`. Anything after the last declared
/// point is left unread or ignored.
pub fn read_text<R>(r: R) -> Result<ArrayTabulatedFunction, Error>
where
    R: io::BufRead,
{
    TextDecoder::new(Tokenizer::new(r)).decode()
}

/// read_binary parses a function in the binary format from `r`, consuming exactly the bytes of
/// the header and the declared records.
pub fn read_binary<R>(r: R) -> Result<ArrayTabulatedFunction, Error>
where
    R: io::Read,
{
    BinaryDecoder::new(r).decode()
}

pub mod binary_decoder;
pub use self::binary_decoder::BinaryDecoder;

pub mod text_decoder;
pub use self::text_decoder::TextDecoder;

#[cfg(test)]
mod tests {
    use std::io;

    use super::{Error, Limits};
    use crate::stream;

    #[test]
    fn limits_check() {
        let unlimited = Limits::new();
        assert_eq!(unlimited.check(2).unwrap(), 2);
        assert_eq!(unlimited.check(1 << 40).unwrap(), 1 << 40);
        assert_eq!(unlimited.check(1).err().unwrap(), Error::InvalidPointCount(1));
        assert_eq!(unlimited.check(-7).err().unwrap(), Error::InvalidPointCount(-7));

        let limited = Limits::new().max_points(10);
        assert_eq!(limited.max_points, Some(10));
        assert_eq!(limited.check(10).unwrap(), 10);
        assert_eq!(
            limited.check(11).err().unwrap(),
            Error::TooManyPoints { count: 11, max: 10 }
        );
    }

    #[test]
    fn error_conversions() {
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        assert_eq!(Error::from(eof), Error::UnexpectedEnd);

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(Error::from(denied), Error::Io(io::ErrorKind::PermissionDenied));

        assert_eq!(Error::from(stream::Error::EOF), Error::MissingToken);
    }

    #[test]
    fn parse_failures() {
        assert!(Error::MissingToken.is_parse_failure());
        assert!(Error::UnexpectedToken('a').is_parse_failure());
        assert!(Error::InvalidNumber("1.2.3".to_string()).is_parse_failure());
        assert!(Error::InvalidPointCount(0).is_parse_failure());

        assert!(!Error::UnexpectedEnd.is_parse_failure());
        assert!(!Error::Io(io::ErrorKind::Other).is_parse_failure());
    }
}
