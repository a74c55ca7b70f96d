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

//! Simulator error types
//!
//! Faults are not recovered internally: the RISC-V trap architecture is out
//! of scope, so every error surfaces to the driver through the `Result`
//! channel instead of being delivered to the guest.

use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimError>;

/// Simulator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Bus access with an unsupported width or an unaligned address
    #[error("misaligned {size}-byte access at address 0x{address:08X}")]
    AddressMisaligned {
        /// The address that was accessed
        address: u32,
        /// The size of the access in bytes
        size: u32,
    },

    /// Bus access outside any peripheral range, or out of a memory's bounds
    #[error("access fault at address 0x{address:08X}")]
    AccessFault {
        /// The address that was accessed
        address: u32,
    },

    /// MMIO access to a register that was never allocated
    #[error("unallocated peripheral register at address 0x{address:08X}")]
    UnallocatedAddress {
        /// The word address that was accessed
        address: u32,
    },

    /// The decoder cannot match an opcode/funct3/funct7 combination
    #[error("invalid instruction word 0x{word:08X}")]
    InvalidInstruction {
        /// The instruction word that failed to decode
        word: u32,
    },

    /// Attempt to attach a peripheral over an already claimed address range
    #[error("address range of port '{name}' overlaps an existing port")]
    RangeOverlap {
        /// Name of the port being attached
        name: String,
    },

    /// Executable image does not meet the required shape
    #[error("unsupported executable: {reason}")]
    UnsupportedExecutable {
        /// Why the image was rejected
        reason: String,
    },

    /// Malformed machine configuration
    #[error("configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error (file operations)
    #[error("I/O error: {message}")]
    Io {
        /// Error message
        message: String,
    },
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io {
            message: err.to_string(),
        }
    }
}
