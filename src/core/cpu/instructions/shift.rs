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

use super::super::instruction::{IFrame, RFrame};
use super::super::Hart;
use crate::core::error::Result;

impl Hart {
    // === Shift instructions ===
    //
    // Shift amounts are taken modulo 32 (the low 5 bits of the register
    // or immediate), matching the hardware.

    /// SLLI: Shift Left Logical Immediate
    ///
    /// Format: slli rd, rs1, shamt
    /// Operation: rd = rs1 << shamt
    pub(in crate::core::cpu) fn op_slli(&mut self, f: IFrame) -> Result<()> {
        let result = self.reg(f.rs1) << (f.imm as u32 & 0x1F);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// SRLI: Shift Right Logical Immediate
    ///
    /// Fresh bits are zero.
    ///
    /// Format: srli rd, rs1, shamt
    /// Operation: rd = rs1 >> shamt
    pub(in crate::core::cpu) fn op_srli(&mut self, f: IFrame) -> Result<()> {
        let result = self.reg(f.rs1) >> (f.imm as u32 & 0x1F);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// SRAI: Shift Right Arithmetic Immediate
    ///
    /// Fresh bits copy the sign bit.
    ///
    /// Format: srai rd, rs1, shamt
    /// Operation: rd = signed(rs1) >> shamt
    pub(in crate::core::cpu) fn op_srai(&mut self, f: IFrame) -> Result<()> {
        let result = ((self.reg(f.rs1) as i32) >> (f.imm as u32 & 0x1F)) as u32;
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// SLL: Shift Left Logical
    ///
    /// Format: sll rd, rs1, rs2
    /// Operation: rd = rs1 << (rs2 & 0x1F)
    pub(in crate::core::cpu) fn op_sll(&mut self, f: RFrame) -> Result<()> {
        let result = self.reg(f.rs1) << (self.reg(f.rs2) & 0x1F);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// SRL: Shift Right Logical
    ///
    /// Format: srl rd, rs1, rs2
    /// Operation: rd = rs1 >> (rs2 & 0x1F)
    pub(in crate::core::cpu) fn op_srl(&mut self, f: RFrame) -> Result<()> {
        let result = self.reg(f.rs1) >> (self.reg(f.rs2) & 0x1F);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// SRA: Shift Right Arithmetic
    ///
    /// Format: sra rd, rs1, rs2
    /// Operation: rd = signed(rs1) >> (rs2 & 0x1F)
    pub(in crate::core::cpu) fn op_sra(&mut self, f: RFrame) -> Result<()> {
        let result = ((self.reg(f.rs1) as i32) >> (self.reg(f.rs2) & 0x1F)) as u32;
        self.set_reg(f.rd, result);
        Ok(())
    }
}
