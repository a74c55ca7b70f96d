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

//! Executable loading
//!
//! This module parses statically linked RISC-V ELF executables into the
//! loadable segments the hart seeds its memories from.
//!
//! # Required image shape
//!
//! - 32-bit ELF (`ELFCLASS32`)
//! - little-endian (`ELFDATA2LSB`)
//! - executable file type (`ET_EXEC`)
//! - RISC-V machine type (`EM_RISCV`)
//!
//! Anything else is rejected with `UnsupportedExecutable`.
//!
//! # ELF32 header fields used
//!
//! ```text
//! 0x00-0x03: 0x7F "ELF" magic
//! 0x04:      class (1 = 32-bit)
//! 0x05:      data encoding (1 = little-endian)
//! 0x10-0x11: object file type (2 = executable)
//! 0x12-0x13: machine (243 = RISC-V)
//! 0x18-0x1B: entry point
//! 0x1C-0x1F: program header table offset
//! 0x2A-0x2B: program header entry size
//! 0x2C-0x2D: program header count
//! ```
//!
//! Each `PT_LOAD` program header contributes one [`Segment`]: the file
//! bytes at `p_offset`, zero-padded out to `p_memsz`, tagged with the
//! segment permission flags.

use std::path::Path;

use bitflags::bitflags;
use log::debug;

use super::error::{Result, SimError};

/// ELF magic number
const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];

/// 32-bit class in `e_ident`
const ELFCLASS32: u8 = 1;

/// Little-endian data encoding in `e_ident`
const ELFDATA2LSB: u8 = 1;

/// Executable object file type
const ET_EXEC: u16 = 2;

/// RISC-V machine type
const EM_RISCV: u16 = 243;

/// Loadable program header type
const PT_LOAD: u32 = 1;

bitflags! {
    /// Program segment permission flags (`p_flags`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SegmentFlags: u32 {
        /// Segment is executable (`PF_X`)
        const EXECUTABLE = 0x1;
        /// Segment is writable (`PF_W`)
        const WRITABLE = 0x2;
        /// Segment is readable (`PF_R`)
        const READABLE = 0x4;
    }
}

/// One loadable segment of an executable image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Segment bytes: file contents padded with zeros out to `p_memsz`
    pub data: Vec<u8>,
    /// Permission flags; `EXECUTABLE` routes the segment to instruction
    /// memory
    pub flags: SegmentFlags,
}

/// A parsed executable image
///
/// # Example
///
/// ```no_run
/// use rvx::core::loader::Executable;
///
/// let exe = Executable::from_file("guest.elf").unwrap();
/// for segment in exe.segments() {
///     println!("{} bytes, {:?}", segment.data.len(), segment.flags);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executable {
    entry: u32,
    segments: Vec<Segment>,
}

fn unsupported(reason: &str) -> SimError {
    SimError::UnsupportedExecutable {
        reason: reason.to_string(),
    }
}

fn read_u16(data: &[u8], offset: usize) -> Result<u16> {
    let bytes = data
        .get(offset..offset + 2)
        .ok_or_else(|| unsupported("truncated header"))?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    let bytes = data
        .get(offset..offset + 4)
        .ok_or_else(|| unsupported("truncated header"))?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

impl Executable {
    /// Parse an executable from raw image bytes
    ///
    /// # Errors
    ///
    /// Returns `SimError::UnsupportedExecutable` if the image is not a
    /// 32-bit little-endian RISC-V executable, or if its headers do not
    /// fit the file.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.get(..4) != Some(&ELF_MAGIC) {
            return Err(unsupported("bad ELF magic"));
        }
        if data.get(4) != Some(&ELFCLASS32) {
            return Err(unsupported("not a 32-bit image"));
        }
        if data.get(5) != Some(&ELFDATA2LSB) {
            return Err(unsupported("not little-endian"));
        }
        if read_u16(data, 0x10)? != ET_EXEC {
            return Err(unsupported("not an executable image"));
        }
        if read_u16(data, 0x12)? != EM_RISCV {
            return Err(unsupported("not a RISC-V image"));
        }

        let entry = read_u32(data, 0x18)?;
        let phoff = read_u32(data, 0x1C)? as usize;
        let phentsize = read_u16(data, 0x2A)? as usize;
        let phnum = read_u16(data, 0x2C)? as usize;

        let mut segments = Vec::new();
        for i in 0..phnum {
            let ph = phoff + i * phentsize;
            if read_u32(data, ph)? != PT_LOAD {
                continue;
            }

            let p_offset = read_u32(data, ph + 0x04)? as usize;
            let p_filesz = read_u32(data, ph + 0x10)? as usize;
            let p_memsz = read_u32(data, ph + 0x14)? as usize;
            let p_flags = read_u32(data, ph + 0x18)?;

            if p_memsz < p_filesz {
                return Err(unsupported("segment memory size below file size"));
            }
            let file_bytes = data
                .get(p_offset..p_offset + p_filesz)
                .ok_or_else(|| unsupported("segment data outside file"))?;

            // Zero-fill the tail (.bss) out to the in-memory size
            let mut bytes = file_bytes.to_vec();
            bytes.resize(p_memsz, 0);

            let flags = SegmentFlags::from_bits_truncate(p_flags);
            debug!(
                "segment {}: {} file bytes, {} memory bytes, {:?}",
                i, p_filesz, p_memsz, flags
            );
            segments.push(Segment { data: bytes, flags });
        }

        Ok(Self { entry, segments })
    }

    /// Read and parse an executable file
    ///
    /// # Errors
    ///
    /// `SimError::Io` if the file cannot be read, otherwise as
    /// [`Executable::parse`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::parse(&data)
    }

    /// Entry point recorded in the image header
    pub fn entry(&self) -> u32 {
        self.entry
    }

    /// The loadable segments, in program-header order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}
