//! Program images for the LS-8.
//!
//! A program is the raw byte image that gets copied into memory starting at
//! address 0. Instructions and data share the same byte stream; there is no
//! header.

use crate::error::DecodeError;
use crate::instruction::Instruction;

/// An LS-8 program image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The image bytes, in load order.
    pub bytes: Vec<u8>,
}

impl Program {
    /// Create a program from raw image bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Build an image by encoding each instruction back to back.
    pub fn from_instructions(instructions: &[Instruction]) -> Self {
        let bytes = instructions.iter().flat_map(Instruction::encode).collect();
        Self { bytes }
    }

    /// Number of bytes in the image.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the image is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Walk the image linearly, decoding one instruction at a time.
    ///
    /// Yields `(address, result)`. An undecodable byte yields an error and the
    /// walk resumes at the next byte, so data embedded in the image does not
    /// stop the walk.
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions {
            bytes: &self.bytes,
            pc: 0,
        }
    }
}

/// Iterator returned by [`Program::instructions`].
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
    bytes: &'a [u8],
    pc: usize,
}

impl Iterator for Instructions<'_> {
    type Item = (usize, Result<Instruction, DecodeError>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pc >= self.bytes.len() {
            return None;
        }

        let at = self.pc;
        let result = Instruction::decode(&self.bytes[at..]);
        self.pc += match &result {
            Ok(instr) => instr.len(),
            Err(_) => 1,
        };
        Some((at, result))
    }
}
