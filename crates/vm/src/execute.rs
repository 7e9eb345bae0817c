//! Fetch-decode-execute loop and opcode dispatch for the LS-8 VM.

use std::io::Write;

use crate::alu::{AluOp, AluOutput};
use crate::error::RuntimeError;
use crate::machine::{State, Vm};
use ls8_common::{Instruction, Opcode};
use log::{debug, trace};

/// Outcome of a single successful step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The instruction executed and the machine is still running.
    Continue,
    /// HLT executed.
    Halted,
}

impl Vm {
    /// Execute until HLT or a fault.
    ///
    /// PRN output goes to `out`, one decimal number per line.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), RuntimeError> {
        while self.step(out)? == Step::Continue {}
        Ok(())
    }

    /// Execute exactly one instruction.
    ///
    /// Any error moves the machine to [`State::Faulted`]. Stepping a machine
    /// that is no longer running returns [`RuntimeError::NotRunning`].
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<Step, RuntimeError> {
        if self.state != State::Running {
            return Err(RuntimeError::NotRunning);
        }

        match self.step_inner(out) {
            Ok(Step::Halted) => {
                debug!("halted at {:#04x}", self.pc);
                self.state = State::Halted;
                Ok(Step::Halted)
            }
            Ok(Step::Continue) => Ok(Step::Continue),
            Err(e) => {
                debug!("fault: {e}");
                self.state = State::Faulted;
                Err(e)
            }
        }
    }

    /// While an instruction executes, `self.pc` still points at it, so every
    /// fault reports the faulting instruction's address.
    fn step_inner<W: Write>(&mut self, out: &mut W) -> Result<Step, RuntimeError> {
        let instr = self.fetch()?;
        let next = self.pc + instr.len();
        trace!(
            "{:#04x}: {} {} {}",
            self.pc,
            instr.opcode.mnemonic(),
            instr.arg1,
            instr.arg2
        );

        match instr.opcode {
            Opcode::Hlt => return Ok(Step::Halted),
            Opcode::Ldi => self.set_reg(instr.arg1, instr.arg2)?,
            Opcode::Prn => self.exec_prn(&instr, out)?,
            Opcode::Push => self.exec_push(&instr)?,
            Opcode::Pop => self.exec_pop(&instr)?,
            Opcode::Call => self.exec_call(&instr, next)?,
            Opcode::Ret => self.exec_ret()?,
            Opcode::Jmp => self.jump_to(instr.arg1)?,
            Opcode::Jeq => self.branch_if(self.flags.equal, instr.arg1, next)?,
            Opcode::Jne => self.branch_if(!self.flags.equal, instr.arg1, next)?,
            Opcode::Add => self.exec_alu(AluOp::Add, &instr)?,
            Opcode::Sub => self.exec_alu(AluOp::Sub, &instr)?,
            Opcode::Mul => self.exec_alu(AluOp::Mul, &instr)?,
            Opcode::Div => self.exec_alu(AluOp::Div, &instr)?,
            Opcode::Cmp => self.exec_alu(AluOp::Cmp, &instr)?,
        }

        if !instr.opcode.sets_pc() {
            self.pc = next;
        }
        Ok(Step::Continue)
    }

    /// Decode the instruction at the PC without advancing it.
    fn fetch(&self) -> Result<Instruction, RuntimeError> {
        let byte = self.read(self.pc)?;
        let opcode = Opcode::try_from(byte).map_err(|_| RuntimeError::UnknownInstruction {
            opcode: byte,
            at: self.pc,
        })?;

        let mut args = [0u8; 2];
        for (i, arg) in args.iter_mut().take(opcode.operand_count()).enumerate() {
            *arg = self.read(self.pc + 1 + i)?;
        }
        Ok(Instruction::new(opcode, args[0], args[1]))
    }

    fn exec_alu(&mut self, op: AluOp, instr: &Instruction) -> Result<(), RuntimeError> {
        let a = self.reg(instr.arg1)?;
        let b = self.reg(instr.arg2)?;
        match op
            .apply(a, b)
            .ok_or(RuntimeError::DivisionByZero { at: self.pc })?
        {
            AluOutput::Value(v) => self.set_reg(instr.arg1, v),
            AluOutput::Flags(flags) => {
                self.flags = flags;
                Ok(())
            }
        }
    }

    fn exec_prn<W: Write>(
        &mut self,
        instr: &Instruction,
        out: &mut W,
    ) -> Result<(), RuntimeError> {
        let value = self.reg(instr.arg1)?;
        writeln!(out, "{value}").map_err(|e| RuntimeError::Output {
            at: self.pc,
            message: e.to_string(),
        })
    }

    fn exec_push(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        let value = self.reg(instr.arg1)?;
        self.push(value)
    }

    fn exec_pop(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        // Validate the destination first so a bad index leaves SP untouched.
        self.reg(instr.arg1)?;
        let value = self.pop()?;
        self.set_reg(instr.arg1, value)
    }

    /// Push the address after the CALL, then jump.
    fn exec_call(&mut self, instr: &Instruction, next: usize) -> Result<(), RuntimeError> {
        let target = self.reg(instr.arg1)?;
        let return_addr = u8::try_from(next).map_err(|_| RuntimeError::AddressOutOfRange {
            address: next,
            at: self.pc,
        })?;
        self.push(return_addr)?;
        self.pc = usize::from(target);
        Ok(())
    }

    fn exec_ret(&mut self) -> Result<(), RuntimeError> {
        let return_addr = self.pop()?;
        self.pc = usize::from(return_addr);
        Ok(())
    }

    /// Set the PC to the address held in register `index`.
    fn jump_to(&mut self, index: u8) -> Result<(), RuntimeError> {
        self.pc = usize::from(self.reg(index)?);
        Ok(())
    }

    /// Jump if `taken`, otherwise fall through to `next`.
    fn branch_if(&mut self, taken: bool, index: u8, next: usize) -> Result<(), RuntimeError> {
        if taken {
            self.jump_to(index)
        } else {
            self.pc = next;
            Ok(())
        }
    }
}
