//! A forward-only reader over the lexer's output.
//!
//! There is no pushback and no peeking: every encoding rule consumes exactly
//! the operands its form needs, in order.
use super::error::{Error, Result};
use super::token::{Token, TokenKind};

pub struct Cursor<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, index: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    /// Pops a token off the input stream.
    pub fn next(&mut self) -> Result<&'a Token> {
        let tokens = self.tokens;
        let tok = tokens.get(self.index).ok_or(Error::EndOfInput)?;
        self.index += 1;
        Ok(tok)
    }

    /// Consumes the next token, failing if it is none of `kinds`.
    pub fn expect(&mut self, kinds: &[TokenKind]) -> Result<&'a Token> {
        let tok = self.next()?;
        require(tok, kinds)?;
        Ok(tok)
    }
}

/// Checks an already consumed token against the kinds an operand slot allows.
pub fn require(tok: &Token, kinds: &[TokenKind]) -> Result<()> {
    if kinds.contains(&tok.kind()) {
        Ok(())
    } else {
        Err(Error::UnexpectedToken {
            expected: kinds.to_vec(),
            actual: tok.kind(),
            line: tok.line(),
        })
    }
}
