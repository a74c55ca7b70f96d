// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! ALU execution tests
//!
//! The register convention mirrors the decode vectors: rd = x1,
//! rs1 = x2, rs2 = x3.

use super::super::instruction::{IFrame, Instruction, RFrame, UFrame};
use super::*;

/// Execute an I-type ALU op with rs1 preloaded, return rd
fn itype(make: fn(IFrame) -> Instruction, rs1: u32, imm: i32) -> u32 {
    let mut hart = hart();
    hart.set_reg(2, rs1);
    hart.execute(&make(IFrame { rd: 1, rs1: 2, imm })).unwrap();
    hart.reg(1)
}

/// Execute an R-type ALU op with rs1/rs2 preloaded, return rd
fn rtype(make: fn(RFrame) -> Instruction, rs1: u32, rs2: u32) -> u32 {
    let mut hart = hart();
    hart.set_reg(2, rs1);
    hart.set_reg(3, rs2);
    hart.execute(&make(RFrame {
        rd: 1,
        rs1: 2,
        rs2: 3,
    }))
    .unwrap();
    hart.reg(1)
}

// === ADDI ===

#[test]
fn test_addi() {
    assert_eq!(itype(Instruction::Addi, 10, 5), 15);
    assert_eq!(itype(Instruction::Addi, 10, -5), 5);
    assert_eq!(itype(Instruction::Addi, 10, 0), 10);
}

#[test]
fn test_addi_wraps() {
    // 0xFFFFFFFF + 1 wraps to 0
    assert_eq!(itype(Instruction::Addi, 0xFFFF_FFFF, 1), 0);
}

#[test]
fn test_addi_to_x0_discarded() {
    let mut hart = hart();
    hart.set_reg(2, 10);
    hart.execute(&Instruction::Addi(IFrame {
        rd: 0,
        rs1: 2,
        imm: 5,
    }))
    .unwrap();
    assert_eq!(hart.reg(0), 0);
}

// === SLTI / SLTIU ===

#[test]
fn test_slti() {
    assert_eq!(itype(Instruction::Slti, -48i32 as u32, -8), 1);
    assert_eq!(itype(Instruction::Slti, -48i32 as u32, 28), 1);
    assert_eq!(itype(Instruction::Slti, 28, -48), 0);
    assert_eq!(itype(Instruction::Slti, -2i32 as u32, -8), 0);
    assert_eq!(itype(Instruction::Slti, 12, 10), 0);
    assert_eq!(itype(Instruction::Slti, 5, 5), 0);
    assert_eq!(itype(Instruction::Slti, -8i32 as u32, -8), 0);
}

#[test]
fn test_sltiu() {
    assert_eq!(itype(Instruction::Sltiu, 5, 4), 0);
    assert_eq!(itype(Instruction::Sltiu, 10, 12), 1);
    assert_eq!(itype(Instruction::Sltiu, 5, 5), 0);
    // The sign-extended immediate compares as a large unsigned value
    assert_eq!(itype(Instruction::Sltiu, 5, -1), 1);
}

#[test]
fn test_sltiu_seqz_idiom() {
    // sltiu rd, rs1, 1 tests rs1 == 0
    assert_eq!(itype(Instruction::Sltiu, 0, 1), 1);
    assert_eq!(itype(Instruction::Sltiu, 7, 1), 0);
}

// === Bitwise immediates ===

#[test]
fn test_andi() {
    assert_eq!(itype(Instruction::Andi, 0b111, 0b101), 0b101);
    assert_eq!(itype(Instruction::Andi, 0b111, 0), 0);
    assert_eq!(itype(Instruction::Andi, 0b101, 0b111), 0b101);
}

#[test]
fn test_ori() {
    assert_eq!(itype(Instruction::Ori, 0b110, 0b101), 0b111);
    assert_eq!(itype(Instruction::Ori, 0b110, 0), 0b110);
    assert_eq!(itype(Instruction::Ori, 0, 0b111), 0b111);
}

#[test]
fn test_xori() {
    assert_eq!(itype(Instruction::Xori, 0b110, 0b101), 0b011);
    assert_eq!(itype(Instruction::Xori, 0b110, 0), 0b110);
    // xori rd, rs1, -1 is bitwise NOT
    assert_eq!(itype(Instruction::Xori, 0xFF00_FF00, -1), 0x00FF_00FF);
}

// === Immediate shifts ===

#[test]
fn test_slli() {
    assert_eq!(itype(Instruction::Slli, 0b0001, 2), 0b0100);
    assert_eq!(itype(Instruction::Slli, 0b0001, 0), 0b0001);
    assert_eq!(itype(Instruction::Slli, 1, 31), 0x8000_0000);
}

#[test]
fn test_srli() {
    assert_eq!(itype(Instruction::Srli, 0b1100, 2), 0b0011);
    assert_eq!(itype(Instruction::Srli, 0b1100, 0), 0b1100);
    // Logical shift pulls in zeros
    assert_eq!(itype(Instruction::Srli, 0xFFFF_FFFF, 1), 0x7FFF_FFFF);
}

#[test]
fn test_srai() {
    assert_eq!(itype(Instruction::Srai, 0b1100, 2), 0b0011);
    // Arithmetic shift copies the sign bit
    assert_eq!(itype(Instruction::Srai, 0x8000_0000, 1), 0xC000_0000);
    assert_eq!(itype(Instruction::Srai, 0xF000_0000, 4), 0xFF00_0000);
}

// === ADD / SUB ===

#[test]
fn test_add() {
    assert_eq!(rtype(Instruction::Add, 5, 7), 12);
    assert_eq!(
        rtype(Instruction::Add, -5i32 as u32, -7i32 as u32),
        -12i32 as u32
    );
    // Overflow wraps
    assert_eq!(rtype(Instruction::Add, 0xFFFF_FFFF, 1), 0);
}

#[test]
fn test_sub() {
    assert_eq!(rtype(Instruction::Sub, 10, 7), 3);
    assert_eq!(rtype(Instruction::Sub, -5i32 as u32, 7), -12i32 as u32);
    // 0 - 1 underflows to all ones
    assert_eq!(rtype(Instruction::Sub, 0, 1), 0xFFFF_FFFF);
}

// === SLT / SLTU ===

#[test]
fn test_slt() {
    assert_eq!(rtype(Instruction::Slt, -5i32 as u32, 7), 1);
    assert_eq!(rtype(Instruction::Slt, 10, 7), 0);
    assert_eq!(rtype(Instruction::Slt, 7, 7), 0);
}

#[test]
fn test_sltu() {
    assert_eq!(rtype(Instruction::Sltu, 5, 7), 1);
    // -1 is the largest unsigned value
    assert_eq!(rtype(Instruction::Sltu, 0xFFFF_FFFF, 1), 0);
    assert_eq!(rtype(Instruction::Sltu, 7, 7), 0);
}

// === Bitwise register ops ===

#[test]
fn test_and() {
    assert_eq!(rtype(Instruction::And, 0b1100, 0b1010), 0b1000);
    assert_eq!(rtype(Instruction::And, 0xFFFF_FFFF, 0x0F), 0x0F);
    assert_eq!(rtype(Instruction::And, 0xFFFF_FFFF, 0), 0);
}

#[test]
fn test_or() {
    assert_eq!(rtype(Instruction::Or, 0b1100, 0b1010), 0b1110);
    assert_eq!(rtype(Instruction::Or, 0xFFFF_FFFF, 0x0F), 0xFFFF_FFFF);
    assert_eq!(rtype(Instruction::Or, 0, 0), 0);
}

#[test]
fn test_xor() {
    assert_eq!(rtype(Instruction::Xor, 0b1100, 0b1010), 0b0110);
    assert_eq!(rtype(Instruction::Xor, 0xFFFF_FFFF, 0xFFFF_FFFF), 0);
    assert_eq!(rtype(Instruction::Xor, 0x1234_5678, 0), 0x1234_5678);
}

// === Register shifts ===

#[test]
fn test_sll() {
    assert_eq!(rtype(Instruction::Sll, 0b1, 4), 0b10000);
    assert_eq!(rtype(Instruction::Sll, 0x1234_5678, 0), 0x1234_5678);
    assert_eq!(rtype(Instruction::Sll, 1, 31), 0x8000_0000);
}

#[test]
fn test_srl() {
    assert_eq!(rtype(Instruction::Srl, 0b10000, 4), 0b1);
    assert_eq!(rtype(Instruction::Srl, 0xFFFF_FFFF, 4), 0x0FFF_FFFF);
    assert_eq!(rtype(Instruction::Srl, 0x1234_5678, 0), 0x1234_5678);
}

#[test]
fn test_sra() {
    assert_eq!(rtype(Instruction::Sra, 0b10000, 4), 0b1);
    assert_eq!(
        rtype(Instruction::Sra, -1024i32 as u32, 4),
        -64i32 as u32
    );
    assert_eq!(rtype(Instruction::Sra, 0x1234_5678, 0), 0x1234_5678);
}

#[test]
fn test_shift_amount_masked_to_five_bits() {
    // Only the low 5 bits of rs2 count
    assert_eq!(rtype(Instruction::Sll, 1, 32), 1);
    assert_eq!(rtype(Instruction::Sll, 1, 33), 2);
    assert_eq!(rtype(Instruction::Srl, 0x8000_0000, 0xFFFF_FFE1), 0x4000_0000);
}

// === LUI / AUIPC ===

#[test]
fn test_lui() {
    let mut hart = hart();
    hart.execute(&Instruction::Lui(UFrame {
        rd: 1,
        imm: 0xDEAD_B000,
    }))
    .unwrap();
    assert_eq!(hart.reg(1), 0xDEAD_B000);
}

#[test]
fn test_auipc_adds_pc() {
    let mut hart = hart();
    hart.set_pc(0x400);
    hart.execute(&Instruction::Auipc(UFrame {
        rd: 1,
        imm: 0x0000_1000,
    }))
    .unwrap();
    assert_eq!(hart.reg(1), 0x1400);
}

#[test]
fn test_noop_instructions_have_no_effect() {
    let mut hart = hart();
    hart.set_reg(1, 42);
    for instr in [Instruction::Fence, Instruction::Ecall, Instruction::Ebreak] {
        hart.execute(&instr).unwrap();
    }
    assert_eq!(hart.reg(1), 42);
    assert_eq!(hart.pc(), 0);
}
