//! LS-8 common types and instruction decoding.
//!
//! This crate provides the foundational data structures for the LS-8
//! instruction set:
//!
//! - [`Opcode`]: the closed table of 15 instructions
//! - [`Instruction`]: a decoded opcode plus up to two operand bytes
//! - [`Program`]: a raw program image, one byte per memory cell
//! - [`DecodeError`]: errors from decoding byte streams
//!
//! # Opcode layout
//!
//! Every opcode byte is laid out as `AABCDDDD`:
//!
//! ```text
//! AA    number of operands (0-2), so instruction length is AA + 1
//! B     1 if the instruction is handled by the ALU
//! C     1 if the instruction sets the PC itself
//! DDDD  instruction identifier
//! ```

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::Program;
