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

//! System integration module
//!
//! Ties the hart to a driver loop: load an executable, then step until
//! the guest halts through sim-control, an instruction faults, or the
//! caller's instruction limit runs out.

use std::path::Path;

use log::debug;

use super::config::MachineConfig;
use super::cpu::Hart;
use super::error::Result;
use super::loader::Executable;

/// Why [`System::run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The guest halted the simulation through sim-control
    Halted,
    /// The caller's instruction limit was reached first
    LimitReached,
}

/// A complete simulated machine
///
/// # Example
///
/// ```no_run
/// use rvx::core::system::System;
///
/// let mut system = System::new().unwrap();
/// system.load_executable("guest.elf").unwrap();
/// let reason = system.run(Some(1_000_000)).unwrap();
/// println!("stopped: {:?}, a0 = 0x{:08X}", reason, system.reg(10));
/// ```
pub struct System {
    /// The single hart
    hart: Hart,
    /// Instructions retired since construction
    retired: u64,
}

impl System {
    /// Create a system with the default memory map
    ///
    /// # Errors
    ///
    /// Propagates hart construction failures (overlapping memory map).
    pub fn new() -> Result<Self> {
        Self::with_config(MachineConfig::default())
    }

    /// Create a system with an explicit memory map
    ///
    /// # Errors
    ///
    /// Propagates hart construction failures (overlapping memory map).
    pub fn with_config(config: MachineConfig) -> Result<Self> {
        Ok(Self {
            hart: Hart::with_config(config)?,
            retired: 0,
        })
    }

    /// Load an ELF executable into the machine's memories
    ///
    /// # Errors
    ///
    /// Surfaces loader validation failures and segments that do not fit
    /// the configured memories.
    pub fn load_executable<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let executable = Executable::from_file(path)?;
        debug!("image entry point: 0x{:08X}", executable.entry());
        self.hart.load(&executable)
    }

    /// Execute one instruction
    ///
    /// # Errors
    ///
    /// Surfaces any fault raised by fetch, decode, or execution.
    pub fn step(&mut self) -> Result<()> {
        self.hart.step()?;
        self.retired += 1;
        Ok(())
    }

    /// Step until the guest halts or `limit` instructions have retired
    ///
    /// With `limit == None` the loop runs until the halt flag rises or an
    /// instruction faults.
    ///
    /// # Errors
    ///
    /// The first instruction fault stops the loop and surfaces here.
    pub fn run(&mut self, limit: Option<u64>) -> Result<ExitReason> {
        let mut remaining = limit;
        loop {
            if self.hart.halted() {
                debug!("halt raised after {} instructions", self.retired);
                return Ok(ExitReason::Halted);
            }
            if let Some(ref mut n) = remaining {
                if *n == 0 {
                    return Ok(ExitReason::LimitReached);
                }
                *n -= 1;
            }
            self.step()?;
        }
    }

    /// Current program counter
    pub fn pc(&self) -> u32 {
        self.hart.pc()
    }

    /// Read general purpose register `index`
    pub fn reg(&self, index: u8) -> u32 {
        self.hart.reg(index)
    }

    /// Whether the guest has halted the simulation
    pub fn halted(&self) -> bool {
        self.hart.halted()
    }

    /// Instructions retired since construction
    pub fn retired(&self) -> u64 {
        self.retired
    }

    /// The hart, for drivers that need direct access
    pub fn hart(&self) -> &Hart {
        &self.hart
    }

    /// Mutable access to the hart
    pub fn hart_mut(&mut self) -> &mut Hart {
        &mut self.hart
    }
}
