//! Disassembler: program image → annotated image text.
//!
//! Every byte becomes one binary literal line. The first byte of each
//! instruction carries a `# MNEMONIC operands` comment; bytes that do not
//! decode are marked `# data`.

use ls8_common::{Instruction, Opcode, Program};

/// Disassemble a program into annotated image text.
///
/// The output is guaranteed to reload to an identical image
/// (`parse(&disassemble(program)) == Ok(program)`).
pub fn disassemble(program: &Program) -> String {
    let mut lines = Vec::new();

    for (at, result) in program.instructions() {
        match result {
            Ok(instr) => {
                let bytes = instr.encode();
                lines.push(format!("{:08b} # {}", bytes[0], describe(&instr)));
                lines.extend(bytes[1..].iter().map(|b| format!("{b:08b}")));
            }
            Err(_) => lines.push(format!("{:08b} # data", program.bytes[at])),
        }
    }

    let mut result = lines.join("\n");
    if !result.is_empty() {
        result.push('\n');
    }
    result
}

/// Mnemonic plus operands, e.g. `LDI R0,8` or `MUL R0,R1`.
fn describe(instr: &Instruction) -> String {
    let mnemonic = instr.opcode.mnemonic();
    match instr.opcode {
        // Pattern A: No operands
        Opcode::Hlt | Opcode::Ret => mnemonic.to_string(),

        // Pattern B: One register
        Opcode::Push
        | Opcode::Pop
        | Opcode::Prn
        | Opcode::Call
        | Opcode::Jmp
        | Opcode::Jeq
        | Opcode::Jne => format!("{mnemonic} R{}", instr.arg1),

        // Pattern C: Register and immediate
        Opcode::Ldi => format!("{mnemonic} R{},{}", instr.arg1, instr.arg2),

        // Pattern D: Two registers
        Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div | Opcode::Cmp => {
            format!("{mnemonic} R{},R{}", instr.arg1, instr.arg2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_program() {
        assert_eq!(disassemble(&Program::default()), "");
    }

    #[test]
    fn describe_patterns() {
        assert_eq!(describe(&Instruction::new(Opcode::Hlt, 0, 0)), "HLT");
        assert_eq!(describe(&Instruction::new(Opcode::Prn, 3, 0)), "PRN R3");
        assert_eq!(describe(&Instruction::new(Opcode::Ldi, 0, 8)), "LDI R0,8");
        assert_eq!(
            describe(&Instruction::new(Opcode::Cmp, 1, 2)),
            "CMP R1,R2"
        );
    }

    #[test]
    fn operand_lines_have_no_comment() {
        let program = Program::from_instructions(&[Instruction::new(Opcode::Ldi, 0, 8)]);
        assert_eq!(
            disassemble(&program),
            "10000010 # LDI R0,8\n00000000\n00001000\n"
        );
    }

    #[test]
    fn unknown_bytes_are_data() {
        let program = Program::new(vec![0b1111_1111, 0b0000_0001]);
        assert_eq!(disassemble(&program), "11111111 # data\n00000001 # HLT\n");
    }
}
