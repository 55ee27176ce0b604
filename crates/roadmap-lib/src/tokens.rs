//! Whitespace tokenizer shared by the key point and road readers.

use std::str::{FromStr, Lines};

use crate::error::ParseTruncation;

/// A single whitespace-delimited token and the 1-based line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub line: usize,
    pub text: &'a str,
}

/// Line-aware token stream over an in-memory input.
pub(crate) struct Tokens<'a> {
    lines: Lines<'a>,
    line: usize,
    rest: Option<&'a str>,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            line: 0,
            rest: None,
        }
    }

    /// Consume the remainder of the current line, trimmed.
    pub fn rest_of_line(&mut self) -> &'a str {
        self.rest.take().map(str::trim).unwrap_or("")
    }

    /// Parse the next token as `T`, reporting a truncation on failure.
    pub fn parse_next<T: FromStr>(
        &mut self,
        expected: &'static str,
    ) -> Result<T, ParseTruncation> {
        match self.next() {
            Some(token) => token.text.parse().map_err(|_| ParseTruncation {
                line: token.line,
                expected,
                found: Some(token.text.to_string()),
            }),
            None => Err(ParseTruncation {
                line: self.line,
                expected,
                found: None,
            }),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(rest) = self.rest {
                let trimmed = rest.trim_start();
                if !trimmed.is_empty() {
                    let end = trimmed
                        .find(char::is_whitespace)
                        .unwrap_or(trimmed.len());
                    let (text, remainder) = trimmed.split_at(end);
                    self.rest = Some(remainder);
                    return Some(Token {
                        line: self.line,
                        text,
                    });
                }
            }

            let next_line = self.lines.next()?;
            self.line += 1;
            self.rest = Some(next_line);
        }
    }
}
