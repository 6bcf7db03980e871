//! # Arithmetic Instruction Tests
//!
//! Executed behavior of INC/DEC in both widths, accumulator addition in
//! all three operand forms, and 16-bit addition into HL. Cycle costs and
//! the untouched-flag rules are pinned alongside the results.

use sm83_core::core::{Flag, Pair, Reg8};

use crate::common::TestContext;

/// Tests `INC r` at the half-carry boundary.
#[test]
fn inc_reg() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x04]);
    ctx.set_reg(Reg8::B, 0x0F);
    let cycles = ctx.step();
    assert_eq!(ctx.get_reg(Reg8::B), 0x10);
    assert!(ctx.flag(Flag::HalfCarry));
    assert!(!ctx.flag(Flag::Subtract));
    assert_eq!(cycles, 4);
}

/// Tests `DEC r` reaching zero.
#[test]
fn dec_reg() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x05]);
    ctx.set_reg(Reg8::B, 0x01);
    let cycles = ctx.step();
    assert_eq!(ctx.get_reg(Reg8::B), 0x00);
    assert!(ctx.flag(Flag::Zero));
    assert!(ctx.flag(Flag::Subtract));
    assert_eq!(cycles, 4);
}

/// Tests `INC (HL)`: the memory cell wraps and the zero flag reports it.
#[test]
fn inc_memory_cell() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x34]);
    ctx.set_pair(Pair::Hl, 0x8000);
    ctx.write_mem(0x8000, 0xFF);
    let cycles = ctx.step();
    assert_eq!(ctx.mem(0x8000), 0x00);
    assert!(ctx.flag(Flag::Zero));
    assert_eq!(cycles, 12);
}

/// Tests `DEC (HL)`: the memory cell wraps downward.
#[test]
fn dec_memory_cell() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x35]);
    ctx.set_pair(Pair::Hl, 0x8000);
    let cycles = ctx.step();
    assert_eq!(ctx.mem(0x8000), 0xFF);
    assert!(!ctx.flag(Flag::Zero));
    assert!(ctx.flag(Flag::Subtract));
    assert_eq!(cycles, 12);
}

/// Tests that INC and DEC preserve the carry flag across a whole
/// sequence.
#[test]
fn inc_dec_preserve_carry() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x04, 0x05, 0x3C, 0x3D]);
    ctx.set_flag(Flag::Carry, true);
    let _ = ctx.run(4);
    assert!(ctx.flag(Flag::Carry));
}

/// Tests `ADD A, r` overflowing both nibble and byte to exactly zero.
#[test]
fn add_a_reg() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x80]);
    ctx.set_reg(Reg8::A, 0x3A);
    ctx.set_reg(Reg8::B, 0xC6);
    let cycles = ctx.step();
    assert_eq!(ctx.get_reg(Reg8::A), 0x00);
    assert!(ctx.flag(Flag::Zero));
    assert!(ctx.flag(Flag::HalfCarry));
    assert!(ctx.flag(Flag::Carry));
    assert_eq!(cycles, 4);
}

/// Tests `ADD A, (HL)`: the operand comes through the pointer.
#[test]
fn add_a_memory() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x86]);
    ctx.set_pair(Pair::Hl, 0x8000);
    ctx.write_mem(0x8000, 0x05);
    ctx.set_reg(Reg8::A, 0x10);
    let cycles = ctx.step();
    assert_eq!(ctx.get_reg(Reg8::A), 0x15);
    assert_eq!(cycles, 8);
}

/// Tests `ADD A, d8`: the operand comes from the instruction stream.
#[test]
fn add_a_imm() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0xC6, 0x05]);
    ctx.set_reg(Reg8::A, 0x10);
    let cycles = ctx.step();
    assert_eq!(ctx.get_reg(Reg8::A), 0x15);
    assert_eq!(cycles, 8);
    assert_eq!(ctx.pc(), 0x0102);
}

/// Tests `ADD HL, rr` with the half-carry out of bit 11 and the zero
/// flag left alone.
#[test]
fn add_hl_pair() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x09]);
    ctx.set_pair(Pair::Hl, 0x0FFF);
    ctx.set_pair(Pair::Bc, 0x0001);
    ctx.set_flag(Flag::Zero, true);
    let cycles = ctx.step();
    assert_eq!(ctx.get_pair(Pair::Hl), 0x1000);
    assert!(ctx.flag(Flag::HalfCarry));
    assert!(!ctx.flag(Flag::Subtract));
    assert!(ctx.flag(Flag::Zero));
    assert_eq!(cycles, 8);
}

/// Tests `ADD HL, SP`: the stack pointer is a valid 16-bit operand.
#[test]
fn add_hl_sp() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x39]);
    ctx.set_pair(Pair::Hl, 0x1111);
    ctx.set_sp(0x1111);
    let cycles = ctx.step();
    assert_eq!(ctx.get_pair(Pair::Hl), 0x2222);
    assert_eq!(cycles, 8);
}

/// Tests `INC rr`: 16-bit increment carries across the byte boundary and
/// touches no flags.
#[test]
fn inc_wide() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x03]);
    ctx.set_pair(Pair::Bc, 0x00FF);
    ctx.set_reg(Reg8::F, 0xF0);
    let cycles = ctx.step();
    assert_eq!(ctx.get_pair(Pair::Bc), 0x0100);
    assert_eq!(ctx.get_reg(Reg8::F), 0xF0);
    assert_eq!(cycles, 8);
}

/// Tests `DEC rr`: 16-bit decrement wraps and touches no flags.
#[test]
fn dec_wide() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x0B]);
    ctx.set_pair(Pair::Bc, 0x0000);
    let cycles = ctx.step();
    assert_eq!(ctx.get_pair(Pair::Bc), 0xFFFF);
    assert_eq!(ctx.get_reg(Reg8::F), 0x00);
    assert_eq!(cycles, 8);
}

/// Tests `INC SP`: the stack pointer wraps like any wide register.
#[test]
fn inc_wide_sp_wraps() {
    let mut ctx = TestContext::new().with_program(0x0100, &[0x33]);
    ctx.set_sp(0xFFFF);
    let _ = ctx.step();
    assert_eq!(ctx.sp(), 0x0000);
}
