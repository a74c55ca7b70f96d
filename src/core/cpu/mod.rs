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

//! RV32I hart
//!
//! A hart is one hardware thread of execution: a program counter, the
//! 32-entry register file, and the system bus carrying the memories and
//! the sim-control peripheral. [`Hart::step`] advances the machine by one
//! instruction: fetch a word at the PC, decode it, apply its architectural
//! effect, then advance the PC by 4 unless the instruction wrote it.

pub mod decode;
pub mod instruction;

mod instructions;

#[cfg(test)]
mod tests;

use std::cell::Cell;
use std::rc::Rc;

use log::{info, trace};

use super::config::MachineConfig;
use super::error::Result;
use super::loader::{Executable, SegmentFlags};
use super::memory::{Memory, SimControl, SystemBus};
use super::register::RegisterFile;

use self::decode::decode;

/// Bus port name of the instruction memory
pub const INSTRUCTION_MEMORY_PORT: &str = "instruction memory";

/// Bus port name of the data memory
pub const DATA_MEMORY_PORT: &str = "data memory";

/// Bus port name of the sim-control peripheral
pub const SIM_CONTROL_PORT: &str = "sim control";

/// A single RV32I hart
///
/// # Example
///
/// ```
/// use rvx::core::cpu::Hart;
///
/// let mut hart = Hart::new().unwrap();
/// assert_eq!(hart.reg(0), 0); // x0 is always 0
///
/// hart.set_reg(1, 0x12345678);
/// assert_eq!(hart.reg(1), 0x12345678);
/// ```
pub struct Hart {
    /// Program counter
    pc: u32,

    /// General purpose registers x0-x31
    register_file: RegisterFile,

    /// System bus owning the memories and peripherals
    bus: SystemBus,

    /// Halt flag shared with the sim-control peripheral
    halt: Rc<Cell<bool>>,

    /// Set by branch/jump execution when the PC was written directly,
    /// suppressing the post-execute increment
    pc_written: bool,

    /// Memory map this hart was built with
    config: MachineConfig,
}

impl Hart {
    /// Create a hart with the default memory map
    ///
    /// # Errors
    ///
    /// Returns `SimError::RangeOverlap` if the configured ranges collide
    /// (impossible with the default configuration).
    pub fn new() -> Result<Self> {
        Self::with_config(MachineConfig::default())
    }

    /// Create a hart with an explicit memory map
    ///
    /// Attaches instruction memory, data memory, and the sim-control
    /// peripheral to a fresh bus at the configured base addresses.
    ///
    /// # Errors
    ///
    /// Returns `SimError::RangeOverlap` if any two configured ranges
    /// intersect.
    pub fn with_config(config: MachineConfig) -> Result<Self> {
        let mut bus = SystemBus::new();

        bus.attach(
            INSTRUCTION_MEMORY_PORT,
            config.instruction_memory_base,
            config.instruction_memory_size,
            Box::new(Memory::new(config.instruction_memory_size as usize)),
        )?;
        bus.attach(
            DATA_MEMORY_PORT,
            config.data_memory_base,
            config.data_memory_size,
            Box::new(Memory::new(config.data_memory_size as usize)),
        )?;

        let sim_control = SimControl::new();
        let halt = sim_control.halt_flag();
        bus.attach(
            SIM_CONTROL_PORT,
            config.sim_control_base,
            MachineConfig::SIM_CONTROL_SIZE,
            Box::new(sim_control),
        )?;

        Ok(Self {
            pc: 0,
            register_file: RegisterFile::new(),
            bus,
            halt,
            pc_written: false,
            config,
        })
    }

    /// Step the hart forward by one instruction
    ///
    /// Fetch, decode, execute, then advance the PC by 4 unless a branch
    /// or jump wrote it during execution.
    ///
    /// # Errors
    ///
    /// Any fault raised by the fetch, the decoder, or the instruction's
    /// own memory traffic surfaces here; the step has no partial-retry
    /// semantics.
    pub fn step(&mut self) -> Result<()> {
        // fetch
        let word = self.bus.read(self.pc, 4)?;
        trace!("fetch: pc=0x{:08X} word=0x{:08X}", self.pc, word);

        // decode
        let instr = decode(word)?;
        trace!("decode: {:?}", instr);

        // execute
        self.pc_written = false;
        self.execute(&instr)?;

        if !self.pc_written {
            self.pc = self.pc.wrapping_add(4);
        }
        Ok(())
    }

    /// Load an executable image into the memories
    ///
    /// Executable segments are written verbatim into instruction memory
    /// starting at its base; all other loadable segments go to data memory
    /// starting at its base. The image's link addresses must match the
    /// configured memory map.
    ///
    /// # Errors
    ///
    /// Returns `SimError::AccessFault` if a segment does not fit its
    /// memory.
    pub fn load(&mut self, executable: &Executable) -> Result<()> {
        for segment in executable.segments() {
            let base = if segment.flags.contains(SegmentFlags::EXECUTABLE) {
                self.config.instruction_memory_base
            } else {
                self.config.data_memory_base
            };
            self.bus.load_bytes(base, &segment.data)?;
        }
        Ok(())
    }

    /// Current program counter
    #[inline(always)]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Set the program counter
    ///
    /// Drivers and tests use this to start execution somewhere other than
    /// address 0.
    pub fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Read general purpose register `index`
    #[inline(always)]
    pub fn reg(&self, index: u8) -> u32 {
        self.register_file.read(index)
    }

    /// Write general purpose register `index`
    ///
    /// Writes to x0 are discarded.
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u32) {
        self.register_file.write(index, value);
    }

    /// Whether the sim-control halt trigger has fired
    pub fn halted(&self) -> bool {
        self.halt.get()
    }

    /// The memory map this hart was built with
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Direct access to the system bus
    pub fn bus(&self) -> &SystemBus {
        &self.bus
    }

    /// Mutable access to the system bus
    pub fn bus_mut(&mut self) -> &mut SystemBus {
        &mut self.bus
    }

    /// Log all 32 registers (with ABI names) and the PC
    pub fn dump_registers(&self) {
        info!("pc  = 0x{:08X}", self.pc);
        for row in 0..8 {
            let i = row * 4;
            info!(
                "{:>4} = 0x{:08X}  {:>4} = 0x{:08X}  {:>4} = 0x{:08X}  {:>4} = 0x{:08X}",
                RegisterFile::name_of(i),
                self.reg(i),
                RegisterFile::name_of(i + 1),
                self.reg(i + 1),
                RegisterFile::name_of(i + 2),
                self.reg(i + 2),
                RegisterFile::name_of(i + 3),
                self.reg(i + 3),
            );
        }
    }
}
