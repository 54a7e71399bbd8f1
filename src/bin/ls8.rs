// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use log::{error, info, warn};
use ls8::core::config::Config;
use ls8::core::cpu::{Disassembler, HaltReason, CPU};
use ls8::core::error::{EmulatorError, Result};
use ls8::core::loader::Program;
use ls8::core::system::System;

/// Exit status for usage errors and fatal emulation faults
const EXIT_FAILURE: u8 = 1;
/// Exit status when the program file does not exist
const EXIT_NOT_FOUND: u8 = 2;

/// LS8 8-bit CPU emulator
#[derive(Parser)]
#[command(name = "ls8")]
#[command(version, about = "LS8 8-bit CPU emulator", long_about = None)]
struct Args {
    /// Path to an .ls8 program file
    program: PathBuf,

    /// Print a trace line to stderr before every cycle
    #[arg(short = 't', long)]
    trace: bool,

    /// Configuration file (defaults to ls8.toml in the working directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Stop after this many cycles
    #[arg(short = 'n', long)]
    max_cycles: Option<u64>,

    /// Print a disassembly of the program instead of running it
    #[arg(short = 'd', long)]
    disassemble: bool,
}

fn main() -> ExitCode {
    // Load .env file if present (LS8_* overrides, RUST_LOG)
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_FAILURE),
            };
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(EmulatorError::ProgramNotFound(path)) => {
            eprintln!("{} file not found", path);
            ExitCode::from(EXIT_NOT_FOUND)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    info!("ls8 v{}", env!("CARGO_PKG_VERSION"));

    if args.disassemble {
        return disassemble(args);
    }

    let mut config = Config::load(args.config.as_deref())?;
    if args.trace {
        config.debug.trace = true;
    }
    if let Some(max_cycles) = args.max_cycles {
        config.debug.max_cycles = max_cycles;
    }

    let mut system = System::new();
    system.configure(&config);
    system.load_program(&args.program)?;

    info!("Running {}", args.program.display());
    let result = system.run_with_limit(config.max_cycles());

    match &result {
        Ok(Some(HaltReason::Instruction)) => info!("Halted after {} cycles", system.cycles()),
        Ok(Some(reason)) => warn!("Halted on {:?} after {} cycles", reason, system.cycles()),
        Ok(None) => warn!(
            "Cycle budget exhausted at PC=0x{:02X} after {} cycles",
            system.pc(),
            system.cycles()
        ),
        Err(e) => {
            error!("Error at PC=0x{:02X}: {}", system.pc(), e);
            if log::log_enabled!(log::Level::Debug) {
                system.cpu().dump_registers();
            }
        }
    }

    result.map(|_| ())
}

fn disassemble(args: &Args) -> Result<()> {
    let program = Program::from_file(&args.program)?;
    let mut cpu = CPU::new();
    cpu.load_program(program.bytes())?;

    for line in Disassembler::listing(cpu.memory(), program.len()) {
        println!("{}", line);
    }
    Ok(())
}
