//! Arithmetic/logic unit and the condition flags it produces.
//!
//! All arithmetic is 8-bit and wraps modulo 256. Division truncates.

/// Condition flags written by CMP and read by JEQ/JNE.
///
/// Every flag starts cleared, so a branch taken before the first CMP sees
/// "not equal". Flags keep their last value until the next CMP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub less: bool,
    pub greater: bool,
    pub equal: bool,
}

impl Flags {
    /// Flags for comparing `a` against `b`. Exactly one flag is set.
    pub fn compare(a: u8, b: u8) -> Self {
        Self {
            less: a < b,
            greater: a > b,
            equal: a == b,
        }
    }
}

/// The operations the ALU can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    Div,
    Cmp,
}

/// What an ALU operation produces: a value for `reg[a]`, or new flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOutput {
    Value(u8),
    Flags(Flags),
}

impl AluOp {
    /// Apply the operation to `a` and `b`.
    ///
    /// Returns `None` for division by zero, following the `checked_*`
    /// convention of the integer types.
    pub fn apply(self, a: u8, b: u8) -> Option<AluOutput> {
        let value = match self {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Mul => a.wrapping_mul(b),
            AluOp::Div => a.checked_div(b)?,
            AluOp::Cmp => return Some(AluOutput::Flags(Flags::compare(a, b))),
        };
        Some(AluOutput::Value(value))
    }
}
