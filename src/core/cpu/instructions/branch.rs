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

use super::super::instruction::BFrame;
use super::super::Hart;
use crate::core::error::Result;

impl Hart {
    // === Branch instructions ===
    //
    // The decoder delivers the branch offset already shifted and
    // sign-extended. A taken branch writes pc + offset directly; an
    // untaken branch leaves the PC for the step loop to advance.

    /// Branch to pc + offset when `taken`
    #[inline(always)]
    fn branch_if(&mut self, taken: bool, offset: i32) {
        if taken {
            let target = self.pc().wrapping_add(offset as u32);
            self.write_pc(target);
        }
    }

    /// BEQ: Branch on Equal
    ///
    /// Format: beq rs1, rs2, offset
    /// Operation: if (rs1 == rs2) pc = pc + offset
    pub(in crate::core::cpu) fn op_beq(&mut self, f: BFrame) -> Result<()> {
        self.branch_if(self.reg(f.rs1) == self.reg(f.rs2), f.imm);
        Ok(())
    }

    /// BNE: Branch on Not Equal
    ///
    /// Format: bne rs1, rs2, offset
    /// Operation: if (rs1 != rs2) pc = pc + offset
    pub(in crate::core::cpu) fn op_bne(&mut self, f: BFrame) -> Result<()> {
        self.branch_if(self.reg(f.rs1) != self.reg(f.rs2), f.imm);
        Ok(())
    }

    /// BLT: Branch on Less Than (signed)
    ///
    /// Format: blt rs1, rs2, offset
    /// Operation: if (signed(rs1) < signed(rs2)) pc = pc + offset
    pub(in crate::core::cpu) fn op_blt(&mut self, f: BFrame) -> Result<()> {
        self.branch_if(
            (self.reg(f.rs1) as i32) < (self.reg(f.rs2) as i32),
            f.imm,
        );
        Ok(())
    }

    /// BGE: Branch on Greater Than or Equal (signed)
    ///
    /// Format: bge rs1, rs2, offset
    /// Operation: if (signed(rs1) >= signed(rs2)) pc = pc + offset
    pub(in crate::core::cpu) fn op_bge(&mut self, f: BFrame) -> Result<()> {
        self.branch_if(
            (self.reg(f.rs1) as i32) >= (self.reg(f.rs2) as i32),
            f.imm,
        );
        Ok(())
    }

    /// BLTU: Branch on Less Than Unsigned
    ///
    /// Format: bltu rs1, rs2, offset
    /// Operation: if (rs1 < rs2) pc = pc + offset
    pub(in crate::core::cpu) fn op_bltu(&mut self, f: BFrame) -> Result<()> {
        self.branch_if(self.reg(f.rs1) < self.reg(f.rs2), f.imm);
        Ok(())
    }

    /// BGEU: Branch on Greater Than or Equal Unsigned
    ///
    /// Format: bgeu rs1, rs2, offset
    /// Operation: if (rs1 >= rs2) pc = pc + offset
    pub(in crate::core::cpu) fn op_bgeu(&mut self, f: BFrame) -> Result<()> {
        self.branch_if(self.reg(f.rs1) >= self.reg(f.rs2), f.imm);
        Ok(())
    }
}
