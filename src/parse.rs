//! Parser for the canonical bracketed matrix format.
//!
//! Grammar: `"[" row ("," row)* "]"` where `row = "[" number ("," number)* "]"`.
//! Space characters between tokens are ignored. `[]` parses to the empty
//! matrix and `[[]]` to a single empty row. Rows of differing lengths are
//! accepted here and only surface later as access-time bound failures.
//!
//! Implemented as an explicit character scanner so that malformed input
//! produces a precise error (offending token or byte position) instead of
//! depending on incidental substring splits.
use std::str::FromStr;

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_matrix(s)
    }
}

/// Parses a matrix literal such as `[[1,2,3],[4,5,6]]`.
pub fn parse_matrix(input: &str) -> Result<Matrix, MatrixError> {
    let mut scanner = Scanner::new(input);

    scanner.expect('[')?;
    let mut rows = Vec::new();
    if !scanner.eat(']') {
        loop {
            rows.push(scanner.row()?);
            if scanner.eat(']') {
                break;
            }
            scanner.expect(',')?;
        }
    }

    // Nothing may follow the closing bracket.
    if let Some((at, found)) = scanner.peek() {
        return Err(MatrixError::UnexpectedChar { found, at });
    }

    Ok(Matrix::from_rows(rows))
}

/// Parses a single-row vector literal such as `[[1,2,3]]` and returns row 0.
pub fn vector_from_str(input: &str) -> Result<Vec<f64>, MatrixError> {
    let matrix = parse_matrix(input)?;
    Ok(matrix.row(0)?.to_vec())
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Next character and its byte position, skipping spaces.
    fn peek(&mut self) -> Option<(usize, char)> {
        while self.input[self.pos..].starts_with(' ') {
            self.pos += 1;
        }
        self.input[self.pos..]
            .chars()
            .next()
            .map(|c| (self.pos, c))
    }

    /// Consumes `expected` if it is the next character.
    fn eat(&mut self, expected: char) -> bool {
        match self.peek() {
            Some((_, c)) if c == expected => {
                self.pos += expected.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Consumes `expected` or fails with the character actually found.
    fn expect(&mut self, expected: char) -> Result<(), MatrixError> {
        match self.peek() {
            Some((_, c)) if c == expected => {
                self.pos += expected.len_utf8();
                Ok(())
            }
            Some((at, found)) => Err(MatrixError::UnexpectedChar { found, at }),
            None => Err(MatrixError::UnexpectedEnd),
        }
    }

    /// One bracketed row: `[` number (`,` number)* `]`, or `[]`.
    fn row(&mut self) -> Result<Vec<f64>, MatrixError> {
        self.expect('[')?;
        let mut values = Vec::new();
        if self.eat(']') {
            return Ok(values);
        }
        loop {
            values.push(self.number()?);
            if self.eat(']') {
                break;
            }
            self.expect(',')?;
        }
        Ok(values)
    }

    /// The maximal run of non-delimiter characters, parsed as an `f64`.
    fn number(&mut self) -> Result<f64, MatrixError> {
        let (start, first) = match self.peek() {
            Some(pair) => pair,
            None => return Err(MatrixError::UnexpectedEnd),
        };
        if matches!(first, '[' | ']' | ',') {
            return Err(MatrixError::UnexpectedChar {
                found: first,
                at: start,
            });
        }

        let mut end = start;
        for c in self.input[start..].chars() {
            if matches!(c, '[' | ']' | ',' | ' ') {
                break;
            }
            end += c.len_utf8();
        }
        self.pos = end;

        let token = &self.input[start..end];
        token.parse::<f64>().map_err(|_| MatrixError::NumberFormat {
            token: token.to_string(),
        })
    }
}
