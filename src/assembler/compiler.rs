//! Single forward pass from tokens to the program image.
use super::buffer::OpcodeBuffer;
use super::cursor::Cursor;
use super::encoder::encode;
use super::error::{Error, Result};
use super::labels::Labels;
use super::mnemonic::Mnemonic;
use super::token::{Token, TokenKind};

/// Address the image is loaded at; labels are relative to it.
pub const BASE_ADDRESS: u16 = 0x200;

/// Compiles a token stream into a memory image.
///
/// Labels bind to `BASE_ADDRESS` plus the number of bytes emitted so far and
/// can only be referenced after their declaration. Bare hex tokens are
/// emitted as single data bytes. On error no bytes are returned.
pub fn compile(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut buffer = OpcodeBuffer::new();
    let mut labels = Labels::new();
    let mut cursor = Cursor::new(tokens);

    while cursor.has_next() {
        let tok = cursor.next()?;
        match tok {
            Token::Section(name, line) => {
                labels.declare(name, BASE_ADDRESS + buffer.byte_length() as u16, *line)?
            }
            Token::Hex(..) => buffer.put_byte(tok.as_byte() as u8)?,
            Token::Instruction(name, line) => {
                let mnemonic = Mnemonic::from_name(name).ok_or_else(|| Error::UnknownMnemonic {
                    name: name.to_owned(),
                    line: *line,
                })?;
                let word = encode(mnemonic, &mut cursor, &labels)?;
                debug!("line {}: {} => 0x{:04X}", line, mnemonic, word);
                buffer.put(word)?;
            }
            Token::Register(_, line) | Token::Name(_, line) => {
                return Err(Error::UnexpectedToken {
                    expected: vec![TokenKind::Section, TokenKind::Hex, TokenKind::Instruction],
                    actual: tok.kind(),
                    line: *line,
                })
            }
        }
    }

    info!("assembled {} byte(s)", buffer.byte_length());
    Ok(buffer.save().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::buffer::CAPACITY;
    use super::super::lexer::parse;
    use pretty_assertions::assert_eq;

    fn assemble(source: &str) -> Result<Vec<u8>> {
        compile(&parse(source)?)
    }

    #[test]
    fn test_single_instructions() {
        assert_eq!(parse("CLS").unwrap(), vec![Token::Instruction("CLS".to_owned(), 1)]);
        assert_eq!(assemble("CLS").unwrap(), vec![0x00, 0xE0]);
        assert_eq!(assemble("LD V1, 0x20").unwrap(), vec![0x61, 0x20]);
        assert_eq!(assemble("ADD I, V2").unwrap(), vec![0xF2, 0x1E]);
    }

    #[test]
    fn test_program() {
        let asm_input = "
JP 0x208
sprite:
  0xF0 0x90 0xF0 0x90 0xF0 0x00
start:
CLS
LD I, sprite
LD V0, 0x08
DRW V0, V0, 0x5
JP start
";
        assert_eq!(assemble(asm_input).unwrap(), vec![
            0x12, 0x08,
            0xF0, 0x90, 0xF0, 0x90, 0xF0, 0x00,
            0x00, 0xE0,
            0xA2, 0x02,
            0x60, 0x08,
            0xD0, 0x05,
            0x12, 0x08,
        ]);
    }

    #[test]
    fn test_backward_label() {
        let asm_input = "
CLS
RET
start:
ADD V0, 0x01
JP start
";
        assert_eq!(assemble(asm_input).unwrap(), vec![0x00, 0xE0, 0x00, 0xEE, 0x70, 0x01, 0x12, 0x04]);
    }

    #[test]
    fn test_forward_reference_is_not_resolved() {
        let asm_input = "
JP later
later:
CLS
";
        match assemble(asm_input) {
            Err(Error::UnresolvedLabel { name, line }) => {
                assert_eq!(name, "later");
                assert_eq!(line, 2);
            }
            other => panic!("expected an unresolved label, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_mnemonic() {
        let tokens = vec![Token::Instruction("NOP".to_owned(), 1)];
        match compile(&tokens) {
            Err(Error::UnknownMnemonic { name, .. }) => assert_eq!(name, "NOP"),
            other => panic!("expected an unknown mnemonic, got {:?}", other),
        }
    }

    #[test]
    fn test_lex_error_propagates() {
        match assemble("XYZ123!!!") {
            Err(Error::Lex { fragment, .. }) => assert_eq!(fragment, "123!!!"),
            other => panic!("expected a lex error, got {:?}", other),
        }
    }

    #[test]
    fn test_stray_operand() {
        // Indented mnemonics lex as names and are rejected here.
        assert!(matches!(
            assemble("  CLS"),
            Err(Error::UnexpectedToken { actual: TokenKind::Name, .. })
        ));
        assert!(matches!(
            compile(&[Token::Register(1, 1)]),
            Err(Error::UnexpectedToken { actual: TokenKind::Register, .. })
        ));
    }

    #[test]
    fn test_missing_operand() {
        assert!(matches!(assemble("SKP"), Err(Error::EndOfInput)));
        assert!(matches!(assemble("DRW V0, V1"), Err(Error::EndOfInput)));
    }

    #[test]
    fn test_data_bytes_make_odd_lengths() {
        assert_eq!(assemble("CLS\n 0x01").unwrap().len(), 3);
        assert_eq!(assemble("CLS\nRET").unwrap().len(), 4);
    }

    #[test]
    fn test_overflow() {
        let full = "CLS\n".repeat(CAPACITY / 2);
        assert_eq!(assemble(&full).unwrap().len(), CAPACITY);

        let over = format!("{} 0x00", full);
        assert!(matches!(assemble(&over), Err(Error::BufferOverflow { .. })));
    }

    #[test]
    fn test_duplicate_label() {
        assert!(matches!(assemble("a:\nCLS\na:\nRET"), Err(Error::DuplicateLabel { .. })));
    }

    #[test]
    fn test_idempotent() {
        let tokens = parse("start:\nLD V1, 0x20\nSE V1, V2\nJP start\n 0xAB").unwrap();
        let first = compile(&tokens).unwrap();
        let second = compile(&tokens).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec![0x61, 0x20, 0x51, 0x20, 0x12, 0x00, 0xAB]);
    }
}
