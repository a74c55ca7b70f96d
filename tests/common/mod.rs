// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Shared helpers for integration tests
//!
//! Canonical RV32I instruction encoders plus a minimal ELF32 image
//! builder, so end-to-end tests can assemble guest programs without an
//! external toolchain.

/// addi x0, x0, 0
pub const NOP: u32 = 0x0000_0013;

/// Object file type required by the loader (ET_EXEC)
pub const ET_EXEC: u16 = 2;

/// Machine type required by the loader (EM_RISCV)
pub const EM_RISCV: u16 = 243;

pub fn addi(rd: u8, rs1: u8, imm: i32) -> u32 {
    enc_i(0b001_0011, 0b000, rd, rs1, imm)
}

pub fn add(rd: u8, rs1: u8, rs2: u8) -> u32 {
    (u32::from(rs2) << 20)
        | (u32::from(rs1) << 15)
        | (u32::from(rd) << 7)
        | 0b011_0011
}

pub fn lui(rd: u8, value: u32) -> u32 {
    (value & 0xFFFF_F000) | (u32::from(rd) << 7) | 0b011_0111
}

pub fn lb(rd: u8, rs1: u8, imm: i32) -> u32 {
    enc_i(0b000_0011, 0b000, rd, rs1, imm)
}

pub fn lw(rd: u8, rs1: u8, imm: i32) -> u32 {
    enc_i(0b000_0011, 0b010, rd, rs1, imm)
}

pub fn sw(rs2: u8, rs1: u8, imm: i32) -> u32 {
    let imm = imm as u32;
    (((imm >> 5) & 0x7F) << 25)
        | (u32::from(rs2) << 20)
        | (u32::from(rs1) << 15)
        | (0b010 << 12)
        | ((imm & 0x1F) << 7)
        | 0b010_0011
}

pub fn beq(rs1: u8, rs2: u8, offset: i32) -> u32 {
    let imm = offset as u32;
    (((imm >> 12) & 0x1) << 31)
        | (((imm >> 5) & 0x3F) << 25)
        | (u32::from(rs2) << 20)
        | (u32::from(rs1) << 15)
        | (((imm >> 1) & 0xF) << 8)
        | (((imm >> 11) & 0x1) << 7)
        | 0b110_0011
}

pub fn jal(rd: u8, offset: i32) -> u32 {
    let imm = offset as u32;
    (((imm >> 20) & 0x1) << 31)
        | (((imm >> 1) & 0x3FF) << 21)
        | (((imm >> 11) & 0x1) << 20)
        | (((imm >> 12) & 0xFF) << 12)
        | (u32::from(rd) << 7)
        | 0b110_1111
}

pub fn jalr(rd: u8, rs1: u8, imm: i32) -> u32 {
    enc_i(0b110_0111, 0b000, rd, rs1, imm)
}

fn enc_i(opcode: u32, funct3: u32, rd: u8, rs1: u8, imm: i32) -> u32 {
    (((imm as u32) & 0xFFF) << 20)
        | (u32::from(rs1) << 15)
        | (funct3 << 12)
        | (u32::from(rd) << 7)
        | opcode
}

/// Pack instruction words into little-endian bytes
pub fn assemble(words: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * 4);
    for w in words {
        bytes.extend_from_slice(&w.to_le_bytes());
    }
    bytes
}

/// Build a minimal ELF32 executable with one executable segment (`text`)
/// and, when non-empty, one read-write data segment
pub fn build_elf(machine: u16, file_type: u16, text: &[u8], data: &[u8]) -> Vec<u8> {
    let phnum = if data.is_empty() { 1usize } else { 2 };
    let phoff = 0x34usize;
    let phentsize = 0x20usize;
    let text_off = phoff + phnum * phentsize;
    let data_off = text_off + text.len();

    let mut image = vec![0u8; text_off];
    image[..4].copy_from_slice(&[0x7F, b'E', b'L', b'F']);
    image[4] = 1; // ELFCLASS32
    image[5] = 1; // ELFDATA2LSB
    image[6] = 1; // EI_VERSION
    image[0x10..0x12].copy_from_slice(&file_type.to_le_bytes());
    image[0x12..0x14].copy_from_slice(&machine.to_le_bytes());
    image[0x1C..0x20].copy_from_slice(&(phoff as u32).to_le_bytes());
    image[0x2A..0x2C].copy_from_slice(&(phentsize as u16).to_le_bytes());
    image[0x2C..0x2E].copy_from_slice(&(phnum as u16).to_le_bytes());

    {
        let mut phdr = |index: usize, offset: usize, filesz: usize, flags: u32| {
            let ph = phoff + index * phentsize;
            image[ph..ph + 4].copy_from_slice(&1u32.to_le_bytes()); // PT_LOAD
            image[ph + 0x04..ph + 0x08].copy_from_slice(&(offset as u32).to_le_bytes());
            image[ph + 0x10..ph + 0x14].copy_from_slice(&(filesz as u32).to_le_bytes());
            image[ph + 0x14..ph + 0x18].copy_from_slice(&(filesz as u32).to_le_bytes());
            image[ph + 0x18..ph + 0x1C].copy_from_slice(&flags.to_le_bytes());
        };
        phdr(0, text_off, text.len(), 0x5); // r-x
        if !data.is_empty() {
            phdr(1, data_off, data.len(), 0x6); // rw-
        }
    }

    image.extend_from_slice(text);
    image.extend_from_slice(data);
    image
}
