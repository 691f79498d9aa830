//! The Assembler module is in charge of taking CHIP-8
//! assembly source and producing a loadable memory image.
//!
//! It does this by running an ordered-rule lexer over the
//! source and then a single forward pass over the tokens,
//! encoding one instruction word per mnemonic.

pub mod buffer;
pub mod compiler;
pub mod cursor;
pub mod encoder;
pub mod error;
pub mod labels;
pub mod lexer;
pub mod mnemonic;
pub mod token;

pub use compiler::{compile, BASE_ADDRESS};
pub use error::{Error, Result};
pub use lexer::parse;
