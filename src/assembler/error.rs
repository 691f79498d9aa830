//! Every failure the lexer and the assembler can report.
use thiserror::Error;

use super::token::TokenKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Pattern(#[from] regex::Error),

    #[error("unable to parse `{fragment}` on line {line}")]
    Lex { line: usize, fragment: String },

    #[error("expected {} on line {line}, got {actual}", kind_list(.expected))]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        actual: TokenKind,
        line: usize,
    },

    #[error("expected an operand, got end of input")]
    EndOfInput,

    #[error("unknown instruction `{name}` on line {line}")]
    UnknownMnemonic { name: String, line: usize },

    #[error("invalid operand `{operand}` on line {line}, expected {expected}")]
    InvalidOperand {
        operand: String,
        expected: &'static str,
        line: usize,
    },

    #[error("program does not fit into {capacity} bytes")]
    BufferOverflow { capacity: usize },

    #[error("label `{name}` on line {line} is not declared before its use")]
    UnresolvedLabel { name: String, line: usize },

    #[error("label `{name}` on line {line} is already declared")]
    DuplicateLabel { name: String, line: usize },
}

fn kind_list(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
