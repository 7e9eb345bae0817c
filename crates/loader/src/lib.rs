//! LS-8 program loader: image text ↔ program bytes.
//!
//! An image is newline-delimited text holding one byte per line as an
//! 8-digit binary literal. `#` starts a comment; blank lines are ignored.
//!
//! # Usage
//!
//! ```
//! use ls8_loader::{disassemble, parse};
//!
//! let text = "\
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ";
//! let program = parse(text).unwrap();
//! assert_eq!(program.len(), 6);
//! assert_eq!(disassemble(&program), text);
//! ```

pub mod error;

mod disassembler;
mod lexer;

pub use error::LoadError;

use lexer::scan_line;
use ls8_common::Program;
use std::fs;
use std::path::Path;

/// Parse image text into a program.
///
/// Returns the first error encountered, tagged with its 1-based line number.
pub fn parse(text: &str) -> Result<Program, LoadError> {
    let mut bytes = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if let Some(byte) = scan_line(line, idx + 1)? {
            bytes.push(byte);
        }
    }

    Ok(Program::new(bytes))
}

/// Read and parse an image file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Program, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse(&text)
}

/// Disassemble a program into annotated image text.
///
/// One line per byte; each instruction's first line carries its mnemonic as
/// a comment. Bytes that do not decode are marked `# data`.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}
