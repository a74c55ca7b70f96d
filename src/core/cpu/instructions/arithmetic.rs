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

use super::super::instruction::{IFrame, RFrame, UFrame};
use super::super::Hart;
use crate::core::error::Result;

impl Hart {
    // === Arithmetic and comparison instructions ===

    /// ADDI: Add Immediate
    ///
    /// Adds the sign-extended immediate to the source register. Overflow
    /// wraps around (modulo 2^32); RV32I has no overflow traps.
    ///
    /// Format: addi rd, rs1, imm
    /// Operation: rd = rs1 + imm
    pub(in crate::core::cpu) fn op_addi(&mut self, f: IFrame) -> Result<()> {
        let result = self.reg(f.rs1).wrapping_add(f.imm as u32);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// SLTI: Set on Less Than Immediate (signed)
    ///
    /// Compares the source register with the sign-extended immediate as
    /// signed integers. Sets rd to 1 if rs1 < imm, otherwise 0.
    ///
    /// Format: slti rd, rs1, imm
    /// Operation: rd = (signed(rs1) < imm) ? 1 : 0
    pub(in crate::core::cpu) fn op_slti(&mut self, f: IFrame) -> Result<()> {
        let result = u32::from((self.reg(f.rs1) as i32) < f.imm);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// SLTIU: Set on Less Than Immediate Unsigned
    ///
    /// Compares the source register with the sign-extended immediate as
    /// unsigned values. `sltiu rd, rs1, 1` is the idiomatic rs1 == 0 test
    /// (`seqz`).
    ///
    /// Format: sltiu rd, rs1, imm
    /// Operation: rd = (rs1 < unsigned(imm)) ? 1 : 0
    pub(in crate::core::cpu) fn op_sltiu(&mut self, f: IFrame) -> Result<()> {
        let result = u32::from(self.reg(f.rs1) < f.imm as u32);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// ADD: Add
    ///
    /// Format: add rd, rs1, rs2
    /// Operation: rd = rs1 + rs2
    pub(in crate::core::cpu) fn op_add(&mut self, f: RFrame) -> Result<()> {
        let result = self.reg(f.rs1).wrapping_add(self.reg(f.rs2));
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// SUB: Subtract
    ///
    /// Format: sub rd, rs1, rs2
    /// Operation: rd = rs1 - rs2
    pub(in crate::core::cpu) fn op_sub(&mut self, f: RFrame) -> Result<()> {
        let result = self.reg(f.rs1).wrapping_sub(self.reg(f.rs2));
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// SLT: Set on Less Than (signed)
    ///
    /// Format: slt rd, rs1, rs2
    /// Operation: rd = (signed(rs1) < signed(rs2)) ? 1 : 0
    pub(in crate::core::cpu) fn op_slt(&mut self, f: RFrame) -> Result<()> {
        let result = u32::from((self.reg(f.rs1) as i32) < (self.reg(f.rs2) as i32));
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// SLTU: Set on Less Than Unsigned
    ///
    /// Format: sltu rd, rs1, rs2
    /// Operation: rd = (rs1 < rs2) ? 1 : 0
    pub(in crate::core::cpu) fn op_sltu(&mut self, f: RFrame) -> Result<()> {
        let result = u32::from(self.reg(f.rs1) < self.reg(f.rs2));
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// LUI: Load Upper Immediate
    ///
    /// The decoder delivers the 20-bit immediate already shifted into bits
    /// 31:12, so the stored value is the immediate itself.
    ///
    /// Format: lui rd, imm
    /// Operation: rd = imm << 12
    pub(in crate::core::cpu) fn op_lui(&mut self, f: UFrame) -> Result<()> {
        self.set_reg(f.rd, f.imm);
        Ok(())
    }

    /// AUIPC: Add Upper Immediate to PC
    ///
    /// Format: auipc rd, imm
    /// Operation: rd = pc + (imm << 12)
    pub(in crate::core::cpu) fn op_auipc(&mut self, f: UFrame) -> Result<()> {
        let result = self.pc().wrapping_add(f.imm);
        self.set_reg(f.rd, result);
        Ok(())
    }
}
