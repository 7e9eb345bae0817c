//! Opcode definitions for the LS-8 instruction set.

use crate::error::DecodeError;

/// Identifies the operation to perform.
///
/// The `#[repr(u8)]` attribute pins each variant to its machine byte, so
/// `opcode as u8` is the encoding.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // No operands
    /// Halt the machine.
    Hlt = 0b0000_0001,
    /// Pop the return address into the PC.
    Ret = 0b0001_0001,

    // One operand
    /// Push `reg[a]` onto the stack.
    Push = 0b0100_0101,
    /// Pop the top of the stack into `reg[a]`.
    Pop = 0b0100_0110,
    /// Print `reg[a]` as a decimal integer.
    Prn = 0b0100_0111,
    /// Push the return address, jump to `reg[a]`.
    Call = 0b0101_0000,
    /// Jump to `reg[a]`.
    Jmp = 0b0101_0100,
    /// Jump to `reg[a]` if the equal flag is set.
    Jeq = 0b0101_0101,
    /// Jump to `reg[a]` if the equal flag is clear.
    Jne = 0b0101_0110,

    // Two operands
    /// Load immediate `b` into `reg[a]`.
    Ldi = 0b1000_0010,
    /// `reg[a] += reg[b]`
    Add = 0b1010_0000,
    /// `reg[a] -= reg[b]`
    Sub = 0b1010_0001,
    /// `reg[a] *= reg[b]`
    Mul = 0b1010_0010,
    /// `reg[a] /= reg[b]`, integer division.
    Div = 0b1010_0011,
    /// Compare `reg[a]` with `reg[b]` and set the flags.
    Cmp = 0b1010_0111,
}

/// All valid opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 15] = [
    Opcode::Hlt,
    Opcode::Ret,
    Opcode::Push,
    Opcode::Pop,
    Opcode::Prn,
    Opcode::Call,
    Opcode::Jmp,
    Opcode::Jeq,
    Opcode::Jne,
    Opcode::Ldi,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mul,
    Opcode::Div,
    Opcode::Cmp,
];

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b0000_0001 => Ok(Opcode::Hlt),
            0b0001_0001 => Ok(Opcode::Ret),

            0b0100_0101 => Ok(Opcode::Push),
            0b0100_0110 => Ok(Opcode::Pop),
            0b0100_0111 => Ok(Opcode::Prn),
            0b0101_0000 => Ok(Opcode::Call),
            0b0101_0100 => Ok(Opcode::Jmp),
            0b0101_0101 => Ok(Opcode::Jeq),
            0b0101_0110 => Ok(Opcode::Jne),

            0b1000_0010 => Ok(Opcode::Ldi),
            0b1010_0000 => Ok(Opcode::Add),
            0b1010_0001 => Ok(Opcode::Sub),
            0b1010_0010 => Ok(Opcode::Mul),
            0b1010_0011 => Ok(Opcode::Div),
            0b1010_0111 => Ok(Opcode::Cmp),

            _ => Err(DecodeError::UnknownOpcode(value)),
        }
    }
}

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Ret => "RET",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Prn => "PRN",
            Opcode::Call => "CALL",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
            Opcode::Ldi => "LDI",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Cmp => "CMP",
        }
    }

    /// Number of operand bytes following the opcode (the `AA` bits).
    pub fn operand_count(&self) -> usize {
        usize::from(*self as u8 >> 6)
    }

    /// Encoded length in bytes, opcode included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.operand_count() + 1
    }

    /// True if the instruction manages the PC itself (the `C` bit).
    ///
    /// The engine must not apply the default advance after these.
    pub fn sets_pc(&self) -> bool {
        *self as u8 & 0b0001_0000 != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn all_opcodes_count() {
        assert_eq!(ALL_OPCODES.len(), 15);
    }

    #[test]
    fn roundtrip_all_valid_opcodes() {
        for &opcode in &ALL_OPCODES {
            let byte = opcode as u8;
            let decoded = Opcode::try_from(byte).unwrap();
            assert_eq!(
                opcode, decoded,
                "roundtrip failed for {opcode:?} ({byte:#010b})"
            );
        }
    }

    #[test]
    fn zero_is_unknown() {
        assert_eq!(Opcode::try_from(0), Err(DecodeError::UnknownOpcode(0)));
    }

    #[test]
    fn unlisted_bytes_are_unknown() {
        let known: Vec<u8> = ALL_OPCODES.iter().map(|&op| op as u8).collect();
        for byte in 0..=255u8 {
            if known.contains(&byte) {
                continue;
            }
            assert_eq!(
                Opcode::try_from(byte),
                Err(DecodeError::UnknownOpcode(byte)),
                "byte {byte:#010b} should be unknown"
            );
        }
    }

    #[test]
    fn lengths_match_instruction_table() {
        assert_eq!(Opcode::Hlt.len(), 1);
        assert_eq!(Opcode::Ret.len(), 1);
        for op in [
            Opcode::Push,
            Opcode::Pop,
            Opcode::Prn,
            Opcode::Call,
            Opcode::Jmp,
            Opcode::Jeq,
            Opcode::Jne,
        ] {
            assert_eq!(op.len(), 2, "{op:?}");
        }
        for op in [
            Opcode::Ldi,
            Opcode::Add,
            Opcode::Sub,
            Opcode::Mul,
            Opcode::Div,
            Opcode::Cmp,
        ] {
            assert_eq!(op.len(), 3, "{op:?}");
        }
    }

    #[test]
    fn sets_pc_bit() {
        let jumps: Vec<Opcode> = ALL_OPCODES.into_iter().filter(Opcode::sets_pc).collect();
        assert_eq!(
            jumps,
            vec![
                Opcode::Ret,
                Opcode::Call,
                Opcode::Jmp,
                Opcode::Jeq,
                Opcode::Jne
            ]
        );
    }

    #[test]
    fn mnemonics_are_uppercase() {
        for &opcode in &ALL_OPCODES {
            let m = opcode.mnemonic();
            assert!(!m.is_empty(), "empty mnemonic for {opcode:?}");
            assert_eq!(m, m.to_uppercase(), "mnemonic should be uppercase: {m}");
        }
    }
}
