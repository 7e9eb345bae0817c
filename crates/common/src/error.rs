//! Decode errors for LS-8 instruction streams.

use thiserror::Error;

/// Errors that occur during instruction decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Byte is not in the instruction table.
    #[error("unknown opcode: {0:#010b}")]
    UnknownOpcode(u8),

    /// The byte stream ends before all of an instruction's operands.
    #[error("truncated {mnemonic}: needs {needed} bytes, {available} available")]
    Truncated {
        mnemonic: &'static str,
        needed: usize,
        available: usize,
    },
}
