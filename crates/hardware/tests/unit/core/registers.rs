//! # Register File Tests
//!
//! This module contains unit tests for the register file: byte register
//! storage, 16-bit pair composition, and the wrapping PC and SP.

use proptest::prelude::*;
use sm83_core::common::Addr;
use sm83_core::core::{Pair, Reg8, RegisterFile};

/// All eight byte registers, for exhaustive sweeps.
const ALL_REGS: [Reg8; 8] = [
    Reg8::A,
    Reg8::F,
    Reg8::B,
    Reg8::C,
    Reg8::D,
    Reg8::E,
    Reg8::H,
    Reg8::L,
];

/// Tests that a fresh register file is entirely zeroed.
#[test]
fn new_register_file_is_zeroed() {
    let regs = RegisterFile::new();
    for reg in ALL_REGS {
        assert_eq!(regs.read(reg), 0, "register {reg} not zeroed");
    }
    assert_eq!(regs.pc().val(), 0);
    assert_eq!(regs.sp().val(), 0);
}

/// Tests that each register stores its own value without disturbing the
/// others.
#[test]
fn registers_are_independent() {
    let mut regs = RegisterFile::new();
    for (i, reg) in ALL_REGS.into_iter().enumerate() {
        regs.write(reg, 0x10 + i as u8);
    }
    for (i, reg) in ALL_REGS.into_iter().enumerate() {
        assert_eq!(regs.read(reg), 0x10 + i as u8, "register {reg} clobbered");
    }
}

/// Tests that a register pair composes as `high << 8 | low`.
#[test]
fn pair_composes_high_low() {
    let mut regs = RegisterFile::new();
    regs.write(Reg8::B, 0x12);
    regs.write(Reg8::C, 0x34);
    assert_eq!(regs.pair(Pair::Bc), 0x1234);
}

/// Tests that writing a pair updates both underlying byte registers.
#[test]
fn set_pair_updates_both_halves() {
    let mut regs = RegisterFile::new();
    regs.set_pair(Pair::De, 0xA1B2);
    assert_eq!(regs.read(Reg8::D), 0xA1);
    assert_eq!(regs.read(Reg8::E), 0xB2);
}

/// Tests that the AF pair stores F verbatim, low nibble included.
#[test]
fn af_pair_keeps_full_flag_byte() {
    let mut regs = RegisterFile::new();
    regs.set_pair(Pair::Af, 0xABCD);
    assert_eq!(regs.read(Reg8::A), 0xAB);
    assert_eq!(regs.read(Reg8::F), 0xCD);
    assert_eq!(regs.pair(Pair::Af), 0xABCD);
}

/// Tests PC set and get through the address type.
#[test]
fn pc_set_and_get() {
    let mut regs = RegisterFile::new();
    regs.set_pc(Addr::new(0x0100));
    assert_eq!(regs.pc().val(), 0x0100);
}

/// Tests that advancing the PC wraps at the top of the address space.
#[test]
fn advance_pc_wraps() {
    let mut regs = RegisterFile::new();
    regs.set_pc(Addr::new(0xFFFF));
    regs.advance_pc(2);
    assert_eq!(regs.pc().val(), 0x0001);
}

/// Tests SP set and get through the address type.
#[test]
fn sp_set_and_get() {
    let mut regs = RegisterFile::new();
    regs.set_sp(Addr::new(0xFFFE));
    assert_eq!(regs.sp().val(), 0xFFFE);
}

proptest! {
    /// Any byte written to any register reads back unchanged.
    #[test]
    fn register_write_read_round_trips(value in any::<u8>()) {
        let mut regs = RegisterFile::new();
        for reg in ALL_REGS {
            regs.write(reg, value);
            prop_assert_eq!(regs.read(reg), value);
        }
    }

    /// Any word written to any pair reads back unchanged, AF included.
    #[test]
    fn pair_write_read_round_trips(word in any::<u16>()) {
        let mut regs = RegisterFile::new();
        for pair in [Pair::Af, Pair::Bc, Pair::De, Pair::Hl] {
            regs.set_pair(pair, word);
            prop_assert_eq!(regs.pair(pair), word);
        }
    }
}
