//! LS-8 virtual machine: executes 8-bit program images.
//!
//! The machine has:
//! - 256 bytes of memory shared by program and stack
//! - Eight 8-bit registers, R7 doubling as the stack pointer
//! - Less/greater/equal flags written by CMP
//!
//! # Usage
//!
//! ```
//! use ls8_common::{Instruction, Opcode, Program};
//! use ls8_vm::run;
//!
//! let program = Program::from_instructions(&[
//!     Instruction::new(Opcode::Ldi, 0, 8),
//!     Instruction::new(Opcode::Ldi, 1, 9),
//!     Instruction::new(Opcode::Mul, 0, 1),
//!     Instruction::new(Opcode::Prn, 0, 0),
//!     Instruction::new(Opcode::Hlt, 0, 0),
//! ]);
//!
//! let mut out: Vec<u8> = Vec::new();
//! run(&program, &mut out).unwrap();
//! assert_eq!(out, b"72\n");
//! ```

pub mod alu;
pub mod error;
pub mod execute;
pub mod machine;
pub mod memory;

pub use alu::{AluOp, Flags};
pub use error::RuntimeError;
pub use execute::Step;
pub use machine::{State, Vm};

use ls8_common::Program;
use std::io::Write;

/// Load a program into a fresh machine and execute it.
///
/// Returns `Ok(())` once HLT executes. PRN output is written to `out`.
///
/// # Errors
///
/// Returns [`RuntimeError`] if the image does not fit in memory or
/// execution faults (unknown instruction, division by zero, stack
/// overflow/underflow, etc.).
pub fn run<W: Write>(program: &Program, out: &mut W) -> Result<(), RuntimeError> {
    let mut vm = Vm::with_program(program)?;
    vm.run(out)
}
