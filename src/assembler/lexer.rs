//! This lexer tokenizes CHIP-8 assembly.
//!
//! Tokens are matched by an ordered list of rules. Labels (`name:`) and
//! mnemonics (`CLS`, `LD`, ...) are only recognized at the very start of a
//! line; everything after them is an operand: a register (`V0`-`VF`), a hex
//! literal (`0x1F`) or a name (label references and `DT`, `ST`, `I`, `K`,
//! `F`, `B`). Operands are delimited by spaces, tabs and commas. Comments are
//! prefixed with semicolons (;) and are single-line only.
use regex::{Captures, Regex};

use super::error::{Error, Result};
use super::token::Token;

type Build = fn(&Captures, usize) -> Token;

struct Rule {
    pattern: Regex,
    build: Build,
}

impl Rule {
    fn new(pattern: &str, build: Build) -> Result<Self> {
        Ok(Rule { pattern: Regex::new(pattern)?, build })
    }
}

pub struct Lexer {
    line_start: Vec<Rule>,
    operand: Vec<Rule>,
}

/// Tokenizes `text` with a freshly built lexer.
pub fn parse(text: &str) -> Result<Vec<Token>> {
    Lexer::new()?.tokenize(text)
}

impl Lexer {
    pub fn new() -> Result<Self> {
        let line_start = vec![
            Rule::new(r"^([a-zA-Z_][a-zA-Z0-9_\-]*):", |c, line| {
                Token::Section(c[1].to_owned(), line)
            })?,
            Rule::new(r"^[A-Z]+", |c, line| Token::Instruction(c[0].to_owned(), line))?,
        ];

        let operand = vec![
            Rule::new(r"^V([0-9A-F])", |c, line| Token::Register(hex_value(&c[1]) as u8, line))?,
            Rule::new(r"^0x([0-9A-F]+)", |c, line| Token::Hex(hex_value(&c[1]), line))?,
            Rule::new(r"^[a-zA-Z_][a-zA-Z0-9_\-]*", |c, line| Token::Name(c[0].to_owned(), line))?,
        ];

        Ok(Lexer { line_start, operand })
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = Vec::with_capacity(256);

        for (index, line) in text.lines().enumerate() {
            self.tokenize_line(line, index + 1, &mut tokens)?;
        }

        debug!("lexed {} token(s)", tokens.len());
        Ok(tokens)
    }

    fn tokenize_line(&self, line: &str, line_num: usize, out: &mut Vec<Token>) -> Result<()> {
        let mut pos = match first_match(&self.line_start, line, line_num) {
            Some((tok, len)) => {
                out.push(tok);
                len
            }
            None => 0,
        };

        loop {
            pos += skip_separators(&line[pos..]);
            let rest = &line[pos..];
            if rest.is_empty() || rest.starts_with(';') {
                return Ok(());
            }

            match first_match(&self.operand, rest, line_num) {
                Some((tok, len)) => {
                    out.push(tok);
                    pos += len;
                }
                None => {
                    return Err(Error::Lex {
                        line: line_num,
                        fragment: rest.trim_end().to_owned(),
                    })
                }
            }
        }
    }
}

/// Tries each rule in order against the start of `text`, returning the
/// token and the number of bytes it consumed.
fn first_match(rules: &[Rule], text: &str, line: usize) -> Option<(Token, usize)> {
    rules.iter().find_map(|rule| {
        rule.pattern
            .captures(text)
            .map(|caps| ((rule.build)(&caps, line), caps[0].len()))
    })
}

fn skip_separators(text: &str) -> usize {
    text.len()
        - text
            .trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\r' | ','))
            .len()
}

// Keeps the low 64 bits of arbitrarily long literals; accessors never look
// past the low 12.
fn hex_value(digits: &str) -> u64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0u64, |acc, d| (acc << 4) | u64::from(d))
}
