//! VM state: memory, registers, flags, program counter.

use crate::alu::Flags;
use crate::error::RuntimeError;
use crate::memory::{Memory, Registers};
use ls8_common::Program;

/// Bytes of addressable memory.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Register index used as the stack pointer.
pub const SP: u8 = 7;

/// Initial stack pointer. The stack grows down from here; addresses at and
/// above it are never written by PUSH or CALL.
pub const STACK_BASE: u8 = 0xF4;

/// Where the machine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
    Faulted,
}

/// The LS-8 virtual machine.
#[derive(Debug, Clone)]
pub struct Vm {
    /// Program and stack share this memory.
    pub(crate) memory: Memory,
    pub(crate) registers: Registers,
    pub(crate) flags: Flags,
    /// Address of the next instruction.
    pub(crate) pc: usize,
    pub(crate) state: State,
    /// SP value at which the stack is empty. Moves with every program write
    /// to SP, so a program may place its stack anywhere.
    pub(crate) stack_base: u8,
}

impl Vm {
    /// A machine with zeroed memory and registers, SP at [`STACK_BASE`].
    pub fn new() -> Self {
        let mut registers = Registers::default();
        registers.set_sp(STACK_BASE);
        Self {
            memory: Memory::new(),
            registers,
            flags: Flags::default(),
            pc: 0,
            state: State::Running,
            stack_base: STACK_BASE,
        }
    }

    /// A fresh machine with `program` loaded at address 0.
    pub fn with_program(program: &Program) -> Result<Self, RuntimeError> {
        let mut vm = Self::new();
        vm.memory.load(&program.bytes)?;
        Ok(vm)
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Current stack pointer.
    pub fn sp(&self) -> u8 {
        self.registers.sp()
    }

    /// SP value of an empty stack: [`STACK_BASE`] until the program writes SP.
    pub fn stack_base(&self) -> u8 {
        self.stack_base
    }

    /// One-line dump of the PC, the three bytes at the PC and every register.
    ///
    /// ```text
    /// TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4
    /// ```
    ///
    /// Bytes past the end of memory show as `00`.
    pub fn trace(&self) -> String {
        let byte = |offset: usize| self.memory.read(self.pc + offset).unwrap_or(0);
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            byte(0),
            byte(1),
            byte(2)
        );
        for reg in self.registers.as_slice() {
            line.push_str(&format!(" {reg:02X}"));
        }
        line
    }

    /// Read memory, faulting on an out-of-range address.
    pub(crate) fn read(&self, address: usize) -> Result<u8, RuntimeError> {
        self.memory
            .read(address)
            .ok_or(RuntimeError::AddressOutOfRange {
                address,
                at: self.pc,
            })
    }

    /// Write memory, faulting on an out-of-range address.
    pub(crate) fn write(&mut self, address: usize, value: u8) -> Result<(), RuntimeError> {
        let at = self.pc;
        self.memory
            .write(address, value)
            .ok_or(RuntimeError::AddressOutOfRange { address, at })
    }

    /// Read a register, faulting on a bad index.
    pub(crate) fn reg(&self, index: u8) -> Result<u8, RuntimeError> {
        self.registers
            .get(index)
            .ok_or(RuntimeError::RegisterOutOfRange { index, at: self.pc })
    }

    /// Write a register, faulting on a bad index.
    ///
    /// Writing SP starts a new, empty stack at the written value.
    pub(crate) fn set_reg(&mut self, index: u8, value: u8) -> Result<(), RuntimeError> {
        let at = self.pc;
        self.registers
            .set(index, value)
            .ok_or(RuntimeError::RegisterOutOfRange { index, at })?;
        if index == SP {
            self.stack_base = value;
        }
        Ok(())
    }

    /// Push a byte onto the stack.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), RuntimeError> {
        let sp = self
            .sp()
            .checked_sub(1)
            .ok_or(RuntimeError::StackOverflow { at: self.pc })?;
        self.write(usize::from(sp), value)?;
        self.registers.set_sp(sp);
        Ok(())
    }

    /// Pop a byte off the stack.
    pub(crate) fn pop(&mut self) -> Result<u8, RuntimeError> {
        let sp = self.sp();
        if sp >= self.stack_base {
            return Err(RuntimeError::StackUnderflow { at: self.pc });
        }
        let value = self.read(usize::from(sp))?;
        self.registers.set_sp(sp + 1);
        Ok(value)
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}
