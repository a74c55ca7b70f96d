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

use clap::Parser;
use log::{error, info};
use rvx::core::config::MachineConfig;
use rvx::core::error::Result;
use rvx::core::system::{ExitReason, System};

/// RISC-V RV32I instruction set simulator
#[derive(Parser)]
#[command(name = "rvx")]
#[command(about = "RV32I instruction set simulator", long_about = None)]
struct Args {
    /// Path to a statically linked RV32I ELF executable
    elf_file: String,

    /// Path to a TOML machine configuration (memory map)
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Maximum number of instructions to execute
    #[arg(short = 'n', long, default_value = "1000000")]
    instructions: u64,
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("rvx v{}", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading machine configuration from: {}", path);
            MachineConfig::from_file(path)?
        }
        None => MachineConfig::default(),
    };

    let mut system = System::with_config(config)?;

    info!("Loading executable from: {}", args.elf_file);
    if let Err(e) = system.load_executable(&args.elf_file) {
        error!("Failed to load executable: {}", e);
        return Err(e);
    }

    info!("Starting simulation...");
    match system.run(Some(args.instructions)) {
        Ok(ExitReason::Halted) => {
            info!(
                "Guest halted after {} instructions | PC: 0x{:08X}",
                system.retired(),
                system.pc()
            );
        }
        Ok(ExitReason::LimitReached) => {
            info!(
                "Instruction limit ({}) reached | PC: 0x{:08X}",
                args.instructions,
                system.pc()
            );
        }
        Err(e) => {
            error!("Fault at PC=0x{:08X}: {}", system.pc(), e);
            error!("Instructions retired: {}", system.retired());
            system.hart().dump_registers();
            return Err(e);
        }
    }

    Ok(())
}
