use std::io::{self, BufRead};

use crate::stream::{is_whitespace, is_word, Error, Token, TokenRead};

#[derive(Debug)]
pub struct Tokenizer<R> {
    r: R,
}

impl<R> Tokenizer<R>
where
    R: BufRead,
{
    pub fn new(r: R) -> Self {
        Tokenizer { r }
    }

    pub fn into_inner(self) -> R {
        self.r
    }

    // Look at the next byte without consuming it, `None` at the end of the stream.
    fn peek_byte(&mut self) -> Result<Option<u8>, Error> {
        loop {
            match self.r.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    // Decode the UTF-8 character starting with the already consumed byte `lead`. Malformed
    // sequences come back as U+FFFD, only the continuation bytes actually present are consumed.
    fn read_ordinary(&mut self, lead: u8) -> Result<char, Error> {
        let len = match lead {
            0x00..=0x7f => return Ok(lead as char),
            0xc2..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf4 => 4,
            _ => return Ok(char::REPLACEMENT_CHARACTER),
        };

        let mut buf = [lead, 0, 0, 0];
        let mut n = 1;
        while n < len {
            match self.peek_byte()? {
                Some(b) if b & 0xc0 == 0x80 => {
                    buf[n] = b;
                    n += 1;
                    self.r.consume(1);
                }
                _ => break,
            }
        }

        Ok(std::str::from_utf8(&buf[..n])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

impl<R> TokenRead for Tokenizer<R>
where
    R: BufRead,
{
    fn next_token(&mut self) -> Result<Token, Error> {
        let first = loop {
            match self.peek_byte()? {
                None => return Err(Error::EOF),
                Some(b) if is_whitespace(b) => self.r.consume(1),
                Some(b) => break b,
            }
        };

        self.r.consume(1);
        if !is_word(first) {
            return self.read_ordinary(first).map(Token::Ordinary);
        }

        // only ASCII bytes ever land in a word
        let mut word = String::new();
        word.push(first as char);
        while let Some(b) = self.peek_byte()? {
            if !is_word(b) {
                break;
            }
            word.push(b as char);
            self.r.consume(1);
        }

        Ok(Token::Word(word))
    }
}
