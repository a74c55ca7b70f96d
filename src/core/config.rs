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

//! Machine configuration
//!
//! The memory map of the basic hart is a configuration parameter rather
//! than a set of hard-coded constants. The defaults place instruction
//! memory at the bottom of the address space, data memory directly above
//! it, and the sim-control peripheral on its own page near the top.
//!
//! A configuration can be loaded from a TOML file:
//!
//! ```toml
//! instruction_memory_base = 0x00000000
//! instruction_memory_size = 0x00200000
//! data_memory_base = 0x00200000
//! data_memory_size = 0x00600000
//! sim_control_base = 0xFFFF0000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};

/// Memory map layout for a hart
///
/// All ranges are half-open `[base, base + size)`. The bus rejects
/// overlapping ranges when the hart is built, so a bad configuration
/// fails at construction time rather than at run time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineConfig {
    /// Base address of instruction memory
    pub instruction_memory_base: u32,
    /// Size of instruction memory in bytes
    pub instruction_memory_size: u32,
    /// Base address of data memory
    pub data_memory_base: u32,
    /// Size of data memory in bytes
    pub data_memory_size: u32,
    /// Base address of the sim-control peripheral page
    pub sim_control_base: u32,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            instruction_memory_base: 0x0000_0000,
            instruction_memory_size: 2 * 1024 * 1024,
            data_memory_base: 0x0020_0000,
            data_memory_size: 6 * 1024 * 1024,
            sim_control_base: 0xFFFF_0000,
        }
    }
}

impl MachineConfig {
    /// Size of the sim-control peripheral page in bytes
    pub const SIM_CONTROL_SIZE: u32 = 0x1000;

    /// Parse a machine configuration from TOML text
    ///
    /// Missing fields fall back to the defaults; unknown fields are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if the text is not valid TOML or
    /// contains unknown fields.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SimError::Config {
            message: e.to_string(),
        })
    }

    /// Load a machine configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `SimError::Io` if the file cannot be read and
    /// `SimError::Config` if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
