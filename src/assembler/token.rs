//! Tokens produced by the lexer.
//!
//! Tokens are tuples of their value and the (1-based) line they appear on.
//! The `as_*` accessors project the value into the bit field an opcode slot
//! needs. They only mask, so callers check the kind first.
use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Section(String, usize),
    Instruction(String, usize),
    Register(u8, usize),
    Hex(u64, usize),
    Name(String, usize),
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Section,
    Instruction,
    Register,
    Hex,
    Name,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Section => "section",
            TokenKind::Instruction => "instruction",
            TokenKind::Register => "register",
            TokenKind::Hex => "hex",
            TokenKind::Name => "name",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Section(name, _) => write!(f, "{}:", name),
            Token::Instruction(name, _) | Token::Name(name, _) => write!(f, "{}", name),
            Token::Register(reg, _) => write!(f, "V{:X}", reg),
            Token::Hex(val, _) => write!(f, "0x{:X}", val),
        }
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Section(..) => TokenKind::Section,
            Token::Instruction(..) => TokenKind::Instruction,
            Token::Register(..) => TokenKind::Register,
            Token::Hex(..) => TokenKind::Hex,
            Token::Name(..) => TokenKind::Name,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    pub fn line(&self) -> usize {
        match self {
            Token::Section(_, line)
            | Token::Instruction(_, line)
            | Token::Register(_, line)
            | Token::Hex(_, line)
            | Token::Name(_, line) => *line,
        }
    }

    /// The identifier carried by section, instruction and name tokens.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Section(s, _) | Token::Instruction(s, _) | Token::Name(s, _) => Some(s),
            Token::Register(..) | Token::Hex(..) => None,
        }
    }

    /// Numeric value of the token. Text-valued tokens are zero.
    fn value(&self) -> u64 {
        match self {
            Token::Register(reg, _) => u64::from(*reg),
            Token::Hex(val, _) => *val,
            _ => 0,
        }
    }

    pub fn as_byte(&self) -> u16 {
        (self.value() & 0xFF) as u16
    }

    pub fn as_address(&self) -> u16 {
        (self.value() & 0xFFF) as u16
    }

    pub fn as_nibble(&self) -> u16 {
        (self.value() & 0xF) as u16
    }

    pub fn as_register(&self) -> u16 {
        self.as_nibble()
    }

    /// Register shifted into bits 8-11.
    pub fn as_register_x(&self) -> u16 {
        self.as_register() << 8
    }

    /// Register shifted into bits 4-7.
    pub fn as_register_y(&self) -> u16 {
        self.as_register() << 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accessors() {
        let hex = Token::Hex(0x12345, 1);
        assert_eq!(hex.as_byte(), 0x45);
        assert_eq!(hex.as_address(), 0x345);
        assert_eq!(hex.as_nibble(), 0x5);

        let reg = Token::Register(0xA, 1);
        assert_eq!(reg.as_register(), 0xA);
        assert_eq!(reg.as_register_x(), 0x0A00);
        assert_eq!(reg.as_register_y(), 0x00A0);
    }

    #[test]
    fn test_text_tokens_project_to_zero() {
        let name = Token::Name("DT".to_owned(), 4);
        assert_eq!(name.as_byte(), 0);
        assert_eq!(name.as_address(), 0);
        assert_eq!(name.text(), Some("DT"));
        assert_eq!(name.line(), 4);
        assert_eq!(Token::Hex(1, 0).text(), None);
    }

    #[test]
    fn test_kind() {
        assert!(Token::Section("a".to_owned(), 0).is(TokenKind::Section));
        assert!(Token::Instruction("CLS".to_owned(), 0).is(TokenKind::Instruction));
        assert!(Token::Register(0, 0).is(TokenKind::Register));
        assert!(Token::Hex(0, 0).is(TokenKind::Hex));
        assert!(!Token::Name("I".to_owned(), 0).is(TokenKind::Register));
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Register(15, 0).to_string(), "VF");
        assert_eq!(Token::Hex(0x2A, 0).to_string(), "0x2A");
        assert_eq!(Token::Section("loop".to_owned(), 0).to_string(), "loop:");
    }
}
