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

use super::super::instruction::{IFrame, JFrame};
use super::super::Hart;
use crate::core::error::Result;

impl Hart {
    // === Jump instructions ===

    /// JAL: Jump and Link
    ///
    /// Links the address of the following instruction, then jumps
    /// relative to the current PC. The decoder delivers the offset
    /// already shifted and sign-extended.
    ///
    /// Format: jal rd, offset
    /// Operation: rd = pc + 4; pc = pc + offset
    pub(in crate::core::cpu) fn op_jal(&mut self, f: JFrame) -> Result<()> {
        let pc = self.pc();
        self.set_reg(f.rd, pc.wrapping_add(4));
        self.write_pc(pc.wrapping_add(f.imm as u32));
        Ok(())
    }

    /// JALR: Jump and Link Register
    ///
    /// Links the address of the following instruction, then jumps to
    /// rs1 + offset with the low bit cleared.
    ///
    /// Format: jalr rd, rs1, offset
    /// Operation: rd = pc + 4; pc = (rs1 + offset) & !1
    pub(in crate::core::cpu) fn op_jalr(&mut self, f: IFrame) -> Result<()> {
        // rs1 is read before the link write so jalr with rd == rs1 jumps
        // to the old value
        let target = self.reg(f.rs1).wrapping_add(f.imm as u32) & !1;
        self.set_reg(f.rd, self.pc().wrapping_add(4));
        self.write_pc(target);
        Ok(())
    }
}
