//! LS-8 CLI: run and disassemble program images.
//!
//! Exit codes:
//! - 0: Success (program halted)
//! - 1: Usage or load error
//! - 3: Runtime fault

mod commands;

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "disassemble" => commands::disassemble(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: ls8 <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <program.ls8> [--trace]     Load and execute a program image");
    eprintln!("  disassemble <program.ls8>       Annotate a program image with mnemonics");
    eprintln!();
    eprintln!("Set RUST_LOG=trace to log every executed instruction.");
}
