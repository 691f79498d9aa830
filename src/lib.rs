//! chip8asm assembles CHIP-8 mnemonics into a binary image
//! ready to be loaded at `0x200`.

#[macro_use] extern crate log;

pub mod assembler;
