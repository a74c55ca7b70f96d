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

//! Core simulation components
//!
//! This module contains all simulator components:
//! - Registers (32-bit cells with a hard-wired zero register)
//! - Memory (byte-addressable, little-endian)
//! - System bus (address-range dispatch to peripherals)
//! - Memory-mapped peripherals (sparse register maps with write triggers)
//! - CPU (RV32I hart: decoder + execution semantics)
//! - ELF executable loader
//! - System integration (run-until-halt driver)

pub mod config;
pub mod cpu;
pub mod error;
pub mod loader;
pub mod memory;
pub mod register;
pub mod system;

// Re-export commonly used types
pub use config::MachineConfig;
pub use cpu::Hart;
pub use error::{Result, SimError};
pub use loader::Executable;
pub use memory::{Memory, MmioPeripheral, Peripheral, SimControl, SystemBus};
pub use register::{Register, RegisterFile};
pub use system::{ExitReason, System};
