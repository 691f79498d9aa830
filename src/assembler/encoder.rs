//! Turns a mnemonic and its operands into a single 16-bit instruction word.
//!
//! Every rule reads its operands through the cursor and resolves label
//! references through the table built so far. Nothing is written here; the
//! caller puts the returned word into the output buffer.
use super::cursor::{require, Cursor};
use super::error::{Error, Result};
use super::labels::Labels;
use super::mnemonic::Mnemonic;
use super::token::Token;
use super::token::TokenKind::{Hex, Name, Register};

pub fn encode(mnemonic: Mnemonic, cursor: &mut Cursor, labels: &Labels) -> Result<u16> {
    use Mnemonic::*;
    match mnemonic {
        CLS  => Ok(0x00E0),
        RET  => Ok(0x00EE),
        SYS  => with_address(cursor, labels, 0x0000),
        JP   => jp(cursor, labels),
        CALL => with_address(cursor, labels, 0x2000),
        SE   => with_register_x_byte_or_y(cursor, 0x3000, 0x5000),
        SNE  => with_register_x_byte_or_y(cursor, 0x4000, 0x9000),
        LD   => ld(cursor, labels),
        ADD  => add(cursor),
        OR   => with_register_xy(cursor, 0x8001),
        AND  => with_register_xy(cursor, 0x8002),
        XOR  => with_register_xy(cursor, 0x8003),
        SUB  => with_register_xy(cursor, 0x8005),
        SHR  => with_register_xy(cursor, 0x8006),
        SUBN => with_register_xy(cursor, 0x8007),
        SHL  => with_register_xy(cursor, 0x800E),
        RND  => rnd(cursor),
        DRW  => drw(cursor),
        SKP  => with_register_x(cursor, 0xE09E),
        SKNP => with_register_x(cursor, 0xE0A1),
    }
}

/// Resolves a name or hex operand to a 12-bit address.
fn address(tok: &Token, labels: &Labels) -> Result<u16> {
    match tok {
        Token::Name(name, line) => Ok(labels.resolve(name, *line)? & 0xFFF),
        _ => Ok(tok.as_address()),
    }
}

/// `opcode | nnn`, where nnn is a label or a literal.
fn with_address(cursor: &mut Cursor, labels: &Labels, opcode: u16) -> Result<u16> {
    let p1 = cursor.expect(&[Name, Hex])?;
    Ok(opcode | address(p1, labels)?)
}

fn with_register_x(cursor: &mut Cursor, opcode: u16) -> Result<u16> {
    let p1 = cursor.expect(&[Register])?;
    Ok(opcode | p1.as_register_x())
}

fn with_register_xy(cursor: &mut Cursor, opcode: u16) -> Result<u16> {
    let p1 = cursor.expect(&[Register])?;
    let p2 = cursor.expect(&[Register])?;
    Ok(opcode | p1.as_register_x() | p2.as_register_y())
}

/// Picks `with_hex` for `Vx, byte` and `with_register` for `Vx, Vy`.
fn with_register_x_byte_or_y(cursor: &mut Cursor, with_hex: u16, with_register: u16) -> Result<u16> {
    let p1 = cursor.expect(&[Register])?;
    let p2 = cursor.expect(&[Hex, Register])?;
    if p2.is(Hex) {
        Ok(with_hex | p1.as_register_x() | p2.as_byte())
    } else {
        Ok(with_register | p1.as_register_x() | p2.as_register_y())
    }
}

// 1nnn - JP addr
// Bnnn - JP V0, addr
fn jp(cursor: &mut Cursor, labels: &Labels) -> Result<u16> {
    let p1 = cursor.expect(&[Name, Hex, Register])?;
    if p1.is(Register) {
        if p1.as_register() != 0 {
            return Err(invalid(p1, "V0"));
        }
        with_address(cursor, labels, 0xB000)
    } else {
        Ok(0x1000 | address(p1, labels)?)
    }
}

fn ld(cursor: &mut Cursor, labels: &Labels) -> Result<u16> {
    let p1 = cursor.expect(&[Register, Name])?;
    let p2 = cursor.expect(&[Hex, Register, Name])?;

    if p1.is(Register) {
        let x = p1.as_register_x();
        return match p2 {
            Token::Hex(..) => Ok(0x6000 | x | p2.as_byte()),
            Token::Name(name, _) => match name.as_str() {
                "DT" => Ok(0xF007 | x),
                "K" => Ok(0xF00A | x),
                "I" => Ok(0xF065 | x),
                _ => Err(invalid(p2, "DT, K or I")),
            },
            // Vy
            _ => Ok(0x8000 | x | p2.as_register_y()),
        };
    }

    let opcode = match p1.text() {
        Some("I") => {
            if p2.is(Register) {
                return Ok(0xF055 | p2.as_register_x());
            }
            return Ok(0xA000 | address(p2, labels)?);
        }
        Some("DT") => 0xF015,
        Some("ST") => 0xF018,
        Some("F") => 0xF029,
        Some("B") => 0xF033,
        _ => return Err(invalid(p1, "I, DT, ST, F or B")),
    };
    require(p2, &[Register])?;
    Ok(opcode | p2.as_register_x())
}

// 7xkk - ADD Vx, byte
// 8xy4 - ADD Vx, Vy
// Fx1E - ADD I, Vx
fn add(cursor: &mut Cursor) -> Result<u16> {
    let p1 = cursor.expect(&[Name, Register])?;
    if p1.is(Register) {
        let p2 = cursor.expect(&[Hex, Register])?;
        return if p2.is(Hex) {
            Ok(0x7000 | p1.as_register_x() | p2.as_byte())
        } else {
            Ok(0x8004 | p1.as_register_x() | p2.as_register_y())
        };
    }

    if p1.text() != Some("I") {
        return Err(invalid(p1, "I"));
    }
    let p2 = cursor.expect(&[Register])?;
    Ok(0xF01E | p2.as_register_x())
}

fn rnd(cursor: &mut Cursor) -> Result<u16> {
    let p1 = cursor.expect(&[Register])?;
    let p2 = cursor.expect(&[Hex])?;
    Ok(0xC000 | p1.as_register_x() | p2.as_byte())
}

fn drw(cursor: &mut Cursor) -> Result<u16> {
    let p1 = cursor.expect(&[Register])?;
    let p2 = cursor.expect(&[Register])?;
    let p3 = cursor.expect(&[Hex])?;
    Ok(0xD000 | p1.as_register_x() | p2.as_register_y() | p3.as_nibble())
}

fn invalid(tok: &Token, expected: &'static str) -> Error {
    Error::InvalidOperand {
        operand: tok.to_string(),
        expected,
        line: tok.line(),
    }
}
