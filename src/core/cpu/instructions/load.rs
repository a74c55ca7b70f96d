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

use super::super::instruction::IFrame;
use super::super::Hart;
use crate::core::error::Result;

impl Hart {
    // === Load instructions ===
    //
    // The effective address is rs1 plus the sign-extended 12-bit offset.
    // Alignment is enforced by the bus; a faulting load leaves every
    // register untouched because the destination is written only after
    // the bus read succeeds.

    /// Effective address of a load: rs1 + offset
    #[inline(always)]
    fn load_addr(&self, f: IFrame) -> u32 {
        self.reg(f.rs1).wrapping_add(f.imm as u32)
    }

    /// LB: Load Byte (sign-extended)
    ///
    /// Format: lb rd, offset(rs1)
    /// Operation: rd = sign_extend(mem[rs1 + offset], 8)
    pub(in crate::core::cpu) fn op_lb(&mut self, f: IFrame) -> Result<()> {
        let value = self.bus.read(self.load_addr(f), 1)?;
        self.set_reg(f.rd, value as u8 as i8 as i32 as u32);
        Ok(())
    }

    /// LH: Load Halfword (sign-extended)
    ///
    /// Format: lh rd, offset(rs1)
    /// Operation: rd = sign_extend(mem[rs1 + offset], 16)
    pub(in crate::core::cpu) fn op_lh(&mut self, f: IFrame) -> Result<()> {
        let value = self.bus.read(self.load_addr(f), 2)?;
        self.set_reg(f.rd, value as u16 as i16 as i32 as u32);
        Ok(())
    }

    /// LW: Load Word
    ///
    /// Format: lw rd, offset(rs1)
    /// Operation: rd = mem[rs1 + offset]
    pub(in crate::core::cpu) fn op_lw(&mut self, f: IFrame) -> Result<()> {
        let value = self.bus.read(self.load_addr(f), 4)?;
        self.set_reg(f.rd, value);
        Ok(())
    }

    /// LBU: Load Byte Unsigned (zero-extended)
    ///
    /// Format: lbu rd, offset(rs1)
    /// Operation: rd = zero_extend(mem[rs1 + offset], 8)
    pub(in crate::core::cpu) fn op_lbu(&mut self, f: IFrame) -> Result<()> {
        let value = self.bus.read(self.load_addr(f), 1)?;
        self.set_reg(f.rd, value);
        Ok(())
    }

    /// LHU: Load Halfword Unsigned (zero-extended)
    ///
    /// Format: lhu rd, offset(rs1)
    /// Operation: rd = zero_extend(mem[rs1 + offset], 16)
    pub(in crate::core::cpu) fn op_lhu(&mut self, f: IFrame) -> Result<()> {
        let value = self.bus.read(self.load_addr(f), 2)?;
        self.set_reg(f.rd, value);
        Ok(())
    }
}
