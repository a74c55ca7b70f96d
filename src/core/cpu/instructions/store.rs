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

use super::super::instruction::SFrame;
use super::super::Hart;
use crate::core::error::Result;

impl Hart {
    // === Store instructions ===
    //
    // The effective address is rs1 plus the sign-extended S-format
    // offset; the data is the low n bytes of rs2. Stores to peripheral
    // registers fire any matching write triggers before the store
    // instruction completes.

    /// Store the low `n` bytes of rs2 at rs1 + offset
    #[inline(always)]
    fn store(&mut self, f: SFrame, n: u32) -> Result<()> {
        let addr = self.reg(f.rs1).wrapping_add(f.imm as u32);
        self.bus.write(addr, self.reg(f.rs2), n)
    }

    /// SB: Store Byte
    ///
    /// Format: sb rs2, offset(rs1)
    /// Operation: mem[rs1 + offset] = rs2[7:0]
    pub(in crate::core::cpu) fn op_sb(&mut self, f: SFrame) -> Result<()> {
        self.store(f, 1)
    }

    /// SH: Store Halfword
    ///
    /// Format: sh rs2, offset(rs1)
    /// Operation: mem[rs1 + offset] = rs2[15:0]
    pub(in crate::core::cpu) fn op_sh(&mut self, f: SFrame) -> Result<()> {
        self.store(f, 2)
    }

    /// SW: Store Word
    ///
    /// Format: sw rs2, offset(rs1)
    /// Operation: mem[rs1 + offset] = rs2
    pub(in crate::core::cpu) fn op_sw(&mut self, f: SFrame) -> Result<()> {
        self.store(f, 4)
    }
}
