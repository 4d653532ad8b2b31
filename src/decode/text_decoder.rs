use std::str::FromStr;

use tracing::{debug, warn};

use crate::decode::{Decode, Error, Limits, PREALLOC_POINTS};
use crate::stream::{Token, TokenRead};
use crate::{ArrayTabulatedFunction, Point};

/// TextDecoder
///
/// TextDecoder is used to decode the text format: a point count followed by that many `x y`
/// pairs, all separated by arbitrary whitespace.
#[derive(Debug)]
pub struct TextDecoder<T: TokenRead> {
    tokens: T,
    limits: Limits,
}

impl<T> TextDecoder<T>
where
    T: TokenRead,
{
    /// new creates a new TextDecoder which will read tokens from `tokens`
    pub fn new(tokens: T) -> Self {
        TextDecoder::with_limits(tokens, Limits::default())
    }

    pub fn with_limits(tokens: T, limits: Limits) -> Self {
        TextDecoder { tokens, limits }
    }

    pub fn into_inner(self) -> T {
        self.tokens
    }

    fn read_word(&mut self) -> Result<String, Error> {
        match self.tokens.next_token()? {
            Token::Word(word) => Ok(word),
            Token::Ordinary(c) => Err(Error::UnexpectedToken(c)),
        }
    }

    fn read_number<N: FromStr>(&mut self) -> Result<N, Error> {
        let word = self.read_word()?;
        word.parse().map_err(|_| Error::InvalidNumber(word))
    }

    fn read_point_count(&mut self) -> Result<usize, Error> {
        let declared: i32 = self.read_number()?;
        self.limits.check(i64::from(declared)).map_err(|err| {
            warn!(declared, "rejecting text header");
            err
        })
    }
}

impl<T> Decode for TextDecoder<T>
where
    T: TokenRead,
{
    fn decode(&mut self) -> Result<ArrayTabulatedFunction, Error> {
        let n = self.read_point_count()?;
        debug!(points = n, "reading text");

        let mut points = Vec::with_capacity(n.min(PREALLOC_POINTS));
        for _ in 0..n {
            let x = self.read_number()?;
            let y = self.read_number()?;
            points.push(Point::new(x, y));
        }

        Ok(ArrayTabulatedFunction::from_counted(points))
    }
}
