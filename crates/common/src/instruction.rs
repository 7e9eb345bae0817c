//! Instruction encoding and decoding for the LS-8 instruction set.
//!
//! Instructions are variable length, 1 to 3 bytes:
//! ```text
//! Byte 0:  opcode
//! Byte 1:  arg1 (register index), if the opcode takes one or more operands
//! Byte 2:  arg2 (register index or immediate), if the opcode takes two
//! ```

use crate::error::DecodeError;
use crate::opcode::Opcode;

/// A single decoded LS-8 instruction.
///
/// Operands the opcode does not use are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// First operand. Always a register index.
    pub arg1: u8,
    /// Second operand. A register index, or the immediate for LDI.
    pub arg2: u8,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(opcode: Opcode, arg1: u8, arg2: u8) -> Self {
        Self { opcode, arg1, arg2 }
    }

    /// Encoded length in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.opcode.len()
    }

    /// Encode this instruction to its 1-3 byte form.
    pub fn encode(&self) -> Vec<u8> {
        let bytes = [self.opcode as u8, self.arg1, self.arg2];
        bytes[..self.len()].to_vec()
    }

    /// Decode the instruction at the start of `bytes`.
    ///
    /// Trailing bytes beyond the instruction's length are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let (&first, rest) = bytes.split_first().ok_or(DecodeError::Truncated {
            mnemonic: "instruction",
            needed: 1,
            available: 0,
        })?;
        let opcode = Opcode::try_from(first)?;

        let operands = opcode.operand_count();
        if rest.len() < operands {
            return Err(DecodeError::Truncated {
                mnemonic: opcode.mnemonic(),
                needed: opcode.len(),
                available: bytes.len(),
            });
        }

        let arg1 = if operands >= 1 { rest[0] } else { 0 };
        let arg2 = if operands >= 2 { rest[1] } else { 0 };
        Ok(Self { opcode, arg1, arg2 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_lengths_follow_opcode() {
        assert_eq!(Instruction::new(Opcode::Hlt, 0, 0).encode(), vec![0b0000_0001]);
        assert_eq!(
            Instruction::new(Opcode::Prn, 3, 0).encode(),
            vec![0b0100_0111, 3]
        );
        assert_eq!(
            Instruction::new(Opcode::Ldi, 0, 8).encode(),
            vec![0b1000_0010, 0, 8]
        );
    }

    #[test]
    fn decode_ldi() {
        let instr = Instruction::decode(&[0b1000_0010, 1, 9]).unwrap();
        assert_eq!(instr, Instruction::new(Opcode::Ldi, 1, 9));
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let instr = Instruction::decode(&[0b0100_0111, 0, 0xFF, 0xFF]).unwrap();
        assert_eq!(instr, Instruction::new(Opcode::Prn, 0, 0));
    }

    #[test]
    fn decode_zeroes_unused_operands() {
        let instr = Instruction::decode(&[0b0000_0001, 7, 7]).unwrap();
        assert_eq!(instr.arg1, 0);
        assert_eq!(instr.arg2, 0);
    }

    #[test]
    fn decode_empty_is_truncated() {
        assert_eq!(
            Instruction::decode(&[]),
            Err(DecodeError::Truncated {
                mnemonic: "instruction",
                needed: 1,
                available: 0,
            })
        );
    }

    #[test]
    fn decode_missing_operand_is_truncated() {
        assert_eq!(
            Instruction::decode(&[0b1010_0010, 0]),
            Err(DecodeError::Truncated {
                mnemonic: "MUL",
                needed: 3,
                available: 2,
            })
        );
    }

    #[test]
    fn decode_unknown_opcode() {
        assert_eq!(
            Instruction::decode(&[0b1111_1111]),
            Err(DecodeError::UnknownOpcode(0b1111_1111))
        );
    }
}
