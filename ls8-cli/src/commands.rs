//! CLI command implementations.

use std::io::{self, Write};

use log::info;
use ls8_common::Program;
use ls8_vm::{Step, Vm};

/// Load and execute a program image.
pub fn run(args: &[String]) -> Result<(), i32> {
    let Some(input) = args.first() else {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: ls8 run <program.ls8> [--trace]");
        return Err(1);
    };

    let mut trace = false;
    for flag in &args[1..] {
        match flag.as_str() {
            "--trace" => trace = true,
            other => {
                eprintln!("error: unknown flag '{other}'");
                return Err(1);
            }
        }
    }

    let program = read_program(input)?;
    let mut vm = Vm::with_program(&program).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    loop {
        if trace {
            eprintln!("{}", vm.trace());
        }
        match vm.step(&mut out) {
            Ok(Step::Continue) => {}
            Ok(Step::Halted) => break,
            Err(e) => {
                let _ = out.flush();
                eprintln!("runtime error: {e}");
                return Err(3);
            }
        }
    }

    writeln!(out, "Exiting...").map_err(|e| {
        eprintln!("error: cannot write output: {e}");
        1
    })?;
    Ok(())
}

/// Print a program image with each instruction's mnemonic as a comment.
pub fn disassemble(args: &[String]) -> Result<(), i32> {
    let Some(input) = args.first() else {
        eprintln!("error: disassemble requires an input file");
        eprintln!("Usage: ls8 disassemble <program.ls8>");
        return Err(1);
    };

    let program = read_program(input)?;
    print!("{}", ls8_loader::disassemble(&program));
    Ok(())
}

fn read_program(path: &str) -> Result<Program, i32> {
    let program = ls8_loader::load_file(path).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;
    info!("loaded {} bytes from '{path}'", program.len());
    Ok(program)
}
