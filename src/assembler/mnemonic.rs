//! The CHIP-8 instruction set understood by the assembler.
//!
//! Labels are declared with a trailing colon at the start of a line and are
//! resolved to `0x200 + offset`. They must be declared before they are used.
//! Bare hex literals between instructions are emitted as raw data bytes.
//!
//! Supported Instructions:
//!
//! ```nasm
//! CLS              ; 00E0 clear the display
//! RET              ; 00EE return from subroutine
//! SYS  addr        ; 0nnn
//! JP   addr        ; 1nnn
//! JP   V0, addr    ; Bnnn jump to addr + V0
//! CALL addr        ; 2nnn
//! SE   Vx, byte    ; 3xkk skip if Vx == byte
//! SE   Vx, Vy      ; 5xy0
//! SNE  Vx, byte    ; 4xkk skip if Vx != byte
//! SNE  Vx, Vy      ; 9xy0
//! LD   Vx, byte    ; 6xkk
//! LD   Vx, Vy      ; 8xy0
//! LD   I, addr     ; Annn
//! LD   Vx, DT      ; Fx07
//! LD   Vx, K       ; Fx0A wait for a key press
//! LD   DT, Vx      ; Fx15
//! LD   ST, Vx      ; Fx18
//! LD   F, Vx       ; Fx29 I <= font sprite for digit Vx
//! LD   B, Vx       ; Fx33 BCD of Vx at I, I+1, I+2
//! LD   I, Vx       ; Fx55 store V0..Vx at I
//! LD   Vx, I       ; Fx65 load V0..Vx from I
//! ADD  Vx, byte    ; 7xkk
//! ADD  Vx, Vy      ; 8xy4
//! ADD  I, Vx       ; Fx1E
//! OR   Vx, Vy      ; 8xy1
//! AND  Vx, Vy      ; 8xy2
//! XOR  Vx, Vy      ; 8xy3
//! SUB  Vx, Vy      ; 8xy5
//! SHR  Vx, Vy      ; 8xy6
//! SUBN Vx, Vy      ; 8xy7
//! SHL  Vx, Vy      ; 8xyE
//! RND  Vx, byte    ; Cxkk
//! DRW  Vx, Vy, n   ; Dxyn
//! SKP  Vx          ; Ex9E skip if key Vx is down
//! SKNP Vx          ; ExA1
//! ```
//!
//! Example source file:
//!
//! ```nasm
//! JP 0x208         ; labels cannot be used before they are declared
//! sprite:
//!   0xF0 0x90 0xF0 0x90 0xF0 0x00
//! start:
//! CLS
//! LD I, sprite
//! LD V0, 0x08
//! DRW V0, V0, 0x5
//! JP start
//! ```
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mnemonic {
    CLS,
    RET,
    SYS,
    JP,
    CALL,
    SE,
    SNE,
    LD,
    ADD,
    OR,
    AND,
    XOR,
    SUB,
    SHR,
    SUBN,
    SHL,
    RND,
    DRW,
    SKP,
    SKNP,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Mnemonic {
    /// Looks up an instruction name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        use Mnemonic::*;
        match name {
            "CLS" => Some(CLS),
            "RET" => Some(RET),
            "SYS" => Some(SYS),
            "JP" => Some(JP),
            "CALL" => Some(CALL),
            "SE" => Some(SE),
            "SNE" => Some(SNE),
            "LD" => Some(LD),
            "ADD" => Some(ADD),
            "OR" => Some(OR),
            "AND" => Some(AND),
            "XOR" => Some(XOR),
            "SUB" => Some(SUB),
            "SHR" => Some(SHR),
            "SUBN" => Some(SUBN),
            "SHL" => Some(SHL),
            "RND" => Some(RND),
            "DRW" => Some(DRW),
            "SKP" => Some(SKP),
            "SKNP" => Some(SKNP),
            _ => None,
        }
    }
}
