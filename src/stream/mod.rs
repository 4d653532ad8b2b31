use std::{error, fmt, io};

/// Error
///
/// Enum used to represent potential errors when reading tokens from a stream.
#[derive(Debug, PartialEq)]
pub enum Error {
    EOF,
    Io(io::ErrorKind),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::EOF => write!(f, "Encountered the end of the stream"),
            Error::Io(kind) => write!(f, "Failed to read from the stream: {}", kind),
        }
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err.kind())
    }
}

/// Token
///
/// A single token of the text format. A `Word` is a maximal run of word characters (the digits,
/// `-`, `+` and `.`). Any other non whitespace character is returned on its own as `Ordinary`.
#[derive(Debug, PartialEq)]
pub enum Token {
    Word(String),
    Ordinary(char),
}

/// TokenRead
///
/// TokenRead is a trait that encapsulates the functionality required to read a stream of tokens.
pub trait TokenRead {
    /// Read the next token, skipping any whitespace before it. Returns `Error::EOF` once only
    /// whitespace remains.
    fn next_token(&mut self) -> Result<Token, Error>;
}

/// Whitespace is every byte from NUL up to and including the space character.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    b <= b' '
}

#[inline]
pub fn is_word(b: u8) -> bool {
    b.is_ascii_digit() || b == b'-' || b == b'+' || b == b'.'
}

pub mod tokenizer;
pub use self::tokenizer::Tokenizer;
