//! Runtime errors for the LS-8 VM.
//!
//! Every fault that happens while executing an instruction carries the
//! address of that instruction (`at`) for debugging.

use thiserror::Error;

/// Errors that terminate execution.
///
/// All faults are final: after one is returned the machine refuses to step
/// again (see [`RuntimeError::NotRunning`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The byte at the PC is not in the instruction table.
    #[error("unknown instruction {opcode:#010b} at address {at}")]
    UnknownInstruction { opcode: u8, at: usize },

    /// DIV with a zero divisor.
    #[error("division by zero at address {at}")]
    DivisionByZero { at: usize },

    /// PUSH or CALL with the stack pointer already at address 0.
    #[error("stack overflow at address {at}")]
    StackOverflow { at: usize },

    /// POP or RET with nothing on the stack.
    #[error("stack underflow at address {at}")]
    StackUnderflow { at: usize },

    /// Memory access outside the address space.
    #[error("address {address} out of range at address {at}")]
    AddressOutOfRange { address: usize, at: usize },

    /// Register operand does not name one of the 8 registers.
    #[error("register {index} out of range at address {at}")]
    RegisterOutOfRange { index: u8, at: usize },

    /// Program image does not fit in memory.
    #[error("program is {size} bytes, memory holds {capacity}")]
    ProgramTooLarge { size: usize, capacity: usize },

    /// Writing PRN output failed.
    #[error("output error at address {at}: {message}")]
    Output { at: usize, message: String },

    /// `step` called after the machine halted or faulted.
    #[error("machine is not running")]
    NotRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        assert_eq!(
            RuntimeError::UnknownInstruction {
                opcode: 0b1111_1111,
                at: 5
            }
            .to_string(),
            "unknown instruction 0b11111111 at address 5"
        );
        assert_eq!(
            RuntimeError::DivisionByZero { at: 9 }.to_string(),
            "division by zero at address 9"
        );
        assert_eq!(
            RuntimeError::RegisterOutOfRange { index: 8, at: 0 }.to_string(),
            "register 8 out of range at address 0"
        );
        assert_eq!(
            RuntimeError::ProgramTooLarge {
                size: 300,
                capacity: 256
            }
            .to_string(),
            "program is 300 bytes, memory holds 256"
        );
        assert_eq!(RuntimeError::NotRunning.to_string(), "machine is not running");
    }
}
