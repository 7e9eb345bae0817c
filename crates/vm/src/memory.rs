//! Memory and register file: the fixed-size storage the engine runs against.
//!
//! Both containers hand out `Option`s for out-of-range indices; the machine
//! turns those into [`RuntimeError`]s carrying the faulting PC.

use crate::error::RuntimeError;
use crate::machine::{MEMORY_SIZE, REGISTER_COUNT, SP};

/// Flat byte-addressed RAM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zero-filled memory.
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Read the byte at `address`, or `None` if it is outside memory.
    pub fn read(&self, address: usize) -> Option<u8> {
        self.cells.get(address).copied()
    }

    /// Write `value` at `address`. Returns `None` if it is outside memory.
    pub fn write(&mut self, address: usize, value: u8) -> Option<()> {
        let cell = self.cells.get_mut(address)?;
        *cell = value;
        Some(())
    }

    /// Copy a program image to the start of memory.
    pub fn load(&mut self, image: &[u8]) -> Result<(), RuntimeError> {
        let dest = self
            .cells
            .get_mut(..image.len())
            .ok_or(RuntimeError::ProgramTooLarge {
                size: image.len(),
                capacity: MEMORY_SIZE,
            })?;
        dest.copy_from_slice(image);
        Ok(())
    }

    /// Number of addressable cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The raw cells.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

/// The eight general-purpose registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    regs: [u8; REGISTER_COUNT],
}

impl Registers {
    /// Value of register `index`, or `None` if there is no such register.
    pub fn get(&self, index: u8) -> Option<u8> {
        self.regs.get(usize::from(index)).copied()
    }

    /// Set register `index`. Returns `None` if there is no such register.
    pub fn set(&mut self, index: u8, value: u8) -> Option<()> {
        let reg = self.regs.get_mut(usize::from(index))?;
        *reg = value;
        Some(())
    }

    /// The stack pointer register.
    pub fn sp(&self) -> u8 {
        self.regs[usize::from(SP)]
    }

    pub(crate) fn set_sp(&mut self, value: u8) {
        self.regs[usize::from(SP)] = value;
    }

    /// All registers, R0 first.
    pub fn as_slice(&self) -> &[u8] {
        &self.regs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_starts_zeroed() {
        let mem = Memory::new();
        assert_eq!(mem.len(), MEMORY_SIZE);
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn memory_read_write() {
        let mut mem = Memory::new();
        assert_eq!(mem.write(0x10, 42), Some(()));
        assert_eq!(mem.read(0x10), Some(42));
        assert_eq!(mem.write(MEMORY_SIZE - 1, 7), Some(()));
        assert_eq!(mem.read(MEMORY_SIZE - 1), Some(7));
    }

    #[test]
    fn memory_out_of_range() {
        let mut mem = Memory::new();
        assert_eq!(mem.read(MEMORY_SIZE), None);
        assert_eq!(mem.write(MEMORY_SIZE, 1), None);
    }

    #[test]
    fn memory_load_places_image_at_zero() {
        let mut mem = Memory::new();
        mem.load(&[1, 2, 3]).unwrap();
        assert_eq!(&mem.as_slice()[..4], &[1, 2, 3, 0]);
    }

    #[test]
    fn memory_load_full_image() {
        let mut mem = Memory::new();
        assert!(mem.load(&[0xAA; MEMORY_SIZE]).is_ok());
        assert_eq!(mem.read(MEMORY_SIZE - 1), Some(0xAA));
    }

    #[test]
    fn memory_load_too_large() {
        let mut mem = Memory::new();
        assert_eq!(
            mem.load(&[0; MEMORY_SIZE + 1]),
            Err(RuntimeError::ProgramTooLarge {
                size: MEMORY_SIZE + 1,
                capacity: MEMORY_SIZE,
            })
        );
    }

    #[test]
    fn registers_get_set() {
        let mut regs = Registers::default();
        assert_eq!(regs.set(3, 99), Some(()));
        assert_eq!(regs.get(3), Some(99));
        assert_eq!(regs.get(0), Some(0));
    }

    #[test]
    fn registers_out_of_range() {
        let mut regs = Registers::default();
        assert_eq!(regs.get(8), None);
        assert_eq!(regs.set(8, 1), None);
        assert_eq!(regs.get(255), None);
    }
}
