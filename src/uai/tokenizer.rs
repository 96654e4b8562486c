use std::io::BufRead;

use crate::uai::error::UaiError;

/// A single whitespace-delimited token together with its position.
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    /// Byte offset of the token's first character in the stream
    pub offset: u64,
    /// Ordinal of the token within the stream, starting at 0
    pub index: usize,
}

impl Token {
    pub fn as_integer(&self, expected: &'static str) -> Result<i64, UaiError> {
        self.text.parse().map_err(|_| self.malformed(expected))
    }

    pub fn as_float(&self, expected: &'static str) -> Result<f64, UaiError> {
        self.text.parse().map_err(|_| self.malformed(expected))
    }

    fn malformed(&self, expected: &'static str) -> UaiError {
        UaiError::MalformedToken {
            token: self.text.clone(),
            index: self.index,
            offset: self.offset,
            expected,
        }
    }
}

/// Streaming tokenizer over a buffered byte stream.
///
/// Tokens are maximal runs of non-whitespace bytes; any run of ASCII
/// whitespace separates them. The reader pulls one buffer at a time from the
/// underlying stream and holds at most the current token in memory, so
/// arbitrarily large factor tables stream through without slurping the file.
pub struct TokenReader<R> {
    input: R,
    byte_offset: u64,
    next_index: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            byte_offset: 0,
            next_index: 0,
        }
    }

    /// The next token, or `None` at end of stream.
    pub fn next_token(&mut self) -> Result<Option<Token>, UaiError> {
        let mut text = String::new();
        let mut start = self.byte_offset;
        loop {
            let buf = self.input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut done = false;
            for &byte in buf {
                consumed += 1;
                if byte.is_ascii_whitespace() {
                    if text.is_empty() {
                        continue;
                    }
                    done = true;
                    break;
                }
                if text.is_empty() {
                    start = self.byte_offset + consumed as u64 - 1;
                }
                text.push(byte as char);
            }
            self.byte_offset += consumed as u64;
            self.input.consume(consumed);
            if done {
                break;
            }
        }
        if text.is_empty() {
            return Ok(None);
        }
        let index = self.next_index;
        self.next_index += 1;
        Ok(Some(Token {
            text,
            offset: start,
            index,
        }))
    }

    /// The next token, failing if the stream ends first.
    pub fn expect_token(&mut self, expected: &'static str) -> Result<Token, UaiError> {
        self.next_token()?.ok_or(UaiError::UnexpectedEndOfInput {
            offset: self.byte_offset,
            expected,
        })
    }

    /// The next token parsed as a signed integer.
    pub fn expect_integer(&mut self, expected: &'static str) -> Result<i64, UaiError> {
        self.expect_token(expected)?.as_integer(expected)
    }

    /// The next token parsed as a non-negative count.
    pub fn expect_count(&mut self, expected: &'static str) -> Result<usize, UaiError> {
        let value = self.expect_integer(expected)?;
        if value < 0 {
            return Err(UaiError::InvalidCount {
                what: expected,
                value,
            });
        }
        Ok(value as usize)
    }

    /// The next token parsed as a floating-point value.
    pub fn expect_float(&mut self, expected: &'static str) -> Result<f64, UaiError> {
        self.expect_token(expected)?.as_float(expected)
    }
}
