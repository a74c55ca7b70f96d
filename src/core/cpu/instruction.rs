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

//! Decoded instruction model
//!
//! An instruction is a tagged value: the tag names one of the RV32I
//! operations, the payload is one of six frame shapes matching the RV32I
//! encoding formats. Register fields carry register indices (0..31);
//! immediate fields hold the signed value after field assembly and sign
//! extension, so execution never touches raw encoding bits.
//!
//! Structural equality (`PartialEq`) is the comparison used by the decoder
//! tests: same tag, same payload.

/// I-format payload: register-immediate ALU ops, loads, JALR
///
/// `imm` is the sign-extended 12-bit immediate. For the shift-immediate
/// ops it holds the 5-bit shift amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IFrame {
    /// Destination register index
    pub rd: u8,
    /// Source register index
    pub rs1: u8,
    /// Sign-extended immediate
    pub imm: i32,
}

/// R-format payload: register-register ALU ops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RFrame {
    /// Destination register index
    pub rd: u8,
    /// First source register index
    pub rs1: u8,
    /// Second source register index
    pub rs2: u8,
}

/// S-format payload: stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SFrame {
    /// Base address register index
    pub rs1: u8,
    /// Data register index
    pub rs2: u8,
    /// Sign-extended 12-bit offset
    pub imm: i32,
}

/// B-format payload: conditional branches
///
/// `imm` is the branch offset, already word-aligned (bit 0 is zero) and
/// sign-extended by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BFrame {
    /// First compare register index
    pub rs1: u8,
    /// Second compare register index
    pub rs2: u8,
    /// Sign-extended, even branch offset
    pub imm: i32,
}

/// U-format payload: LUI, AUIPC
///
/// `imm` is the 20-bit immediate already shifted into bits 31:12; the low
/// 12 bits are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UFrame {
    /// Destination register index
    pub rd: u8,
    /// Upper immediate, low 12 bits zero
    pub imm: u32,
}

/// J-format payload: JAL
///
/// `imm` is the jump offset, already sign-extended with bit 0 zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JFrame {
    /// Link register index
    pub rd: u8,
    /// Sign-extended, even jump offset
    pub imm: i32,
}

/// A decoded RV32I operation
///
/// One variant per base-ISA operation, plus `Fence`, `Ecall`, and
/// `Ebreak`, which the decoder recognizes and execution treats as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    // Loads
    Lb(IFrame),
    Lh(IFrame),
    Lw(IFrame),
    Lbu(IFrame),
    Lhu(IFrame),

    // Stores
    Sb(SFrame),
    Sh(SFrame),
    Sw(SFrame),

    // Register-immediate ALU
    Addi(IFrame),
    Slti(IFrame),
    Sltiu(IFrame),
    Xori(IFrame),
    Ori(IFrame),
    Andi(IFrame),
    Slli(IFrame),
    Srli(IFrame),
    Srai(IFrame),

    // Register-register ALU
    Add(RFrame),
    Sub(RFrame),
    Sll(RFrame),
    Slt(RFrame),
    Sltu(RFrame),
    Xor(RFrame),
    Srl(RFrame),
    Sra(RFrame),
    Or(RFrame),
    And(RFrame),

    // Conditional branches
    Beq(BFrame),
    Bne(BFrame),
    Blt(BFrame),
    Bge(BFrame),
    Bltu(BFrame),
    Bgeu(BFrame),

    // Upper-immediate
    Lui(UFrame),
    Auipc(UFrame),

    // Jumps
    Jal(JFrame),
    Jalr(IFrame),

    // Recognized no-ops
    Fence,
    Ecall,
    Ebreak,
}
