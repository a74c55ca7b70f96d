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
    // === Logical instructions ===
    //
    // The immediate variants operate on the sign-extended immediate
    // reinterpreted as u32, so `xori rd, rs1, -1` is bitwise NOT.

    /// XORI: Exclusive Or Immediate
    ///
    /// Format: xori rd, rs1, imm
    /// Operation: rd = rs1 ^ imm
    pub(in crate::core::cpu) fn op_xori(&mut self, f: IFrame) -> Result<()> {
        let result = self.reg(f.rs1) ^ (f.imm as u32);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// ORI: Or Immediate
    ///
    /// Format: ori rd, rs1, imm
    /// Operation: rd = rs1 | imm
    pub(in crate::core::cpu) fn op_ori(&mut self, f: IFrame) -> Result<()> {
        let result = self.reg(f.rs1) | (f.imm as u32);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// ANDI: And Immediate
    ///
    /// Format: andi rd, rs1, imm
    /// Operation: rd = rs1 & imm
    pub(in crate::core::cpu) fn op_andi(&mut self, f: IFrame) -> Result<()> {
        let result = self.reg(f.rs1) & (f.imm as u32);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// XOR: Exclusive Or
    ///
    /// Format: xor rd, rs1, rs2
    /// Operation: rd = rs1 ^ rs2
    pub(in crate::core::cpu) fn op_xor(&mut self, f: RFrame) -> Result<()> {
        let result = self.reg(f.rs1) ^ self.reg(f.rs2);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// OR: Or
    ///
    /// Format: or rd, rs1, rs2
    /// Operation: rd = rs1 | rs2
    pub(in crate::core::cpu) fn op_or(&mut self, f: RFrame) -> Result<()> {
        let result = self.reg(f.rs1) | self.reg(f.rs2);
        self.set_reg(f.rd, result);
        Ok(())
    }

    /// AND: And
    ///
    /// Format: and rd, rs1, rs2
    /// Operation: rd = rs1 & rs2
    pub(in crate::core::cpu) fn op_and(&mut self, f: RFrame) -> Result<()> {
        let result = self.reg(f.rs1) & self.reg(f.rs2);
        self.set_reg(f.rd, result);
        Ok(())
    }
}
