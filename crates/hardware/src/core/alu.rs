//! Flag-setting arithmetic helpers.
//!
//! Each helper applies one documented hardware rule: the result wraps at the
//! operand width and the flags derive from the true pre-operation values,
//! never from sentinel comparisons. The execute stage calls these for every
//! arithmetic opcode so the rules exist in exactly one place.

use super::flags::Flag;
use super::regs::{Pair, Reg8, RegisterFile};

/// 8-bit increment.
///
/// Zero tracks the wrapped result; Subtract clears; HalfCarry is set iff the
/// pre-operation low nibble was 0xF (the increment carried across the nibble
/// boundary). Carry is untouched: the hardware defines INC to preserve it.
///
/// # Returns
///
/// The incremented value.
pub fn inc8(regs: &mut RegisterFile, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    regs.set_flag(Flag::Zero, result == 0);
    regs.set_flag(Flag::Subtract, false);
    regs.set_flag(Flag::HalfCarry, value & 0x0F == 0x0F);
    result
}

/// 8-bit decrement.
///
/// Zero tracks the wrapped result; Subtract sets; HalfCarry is set iff the
/// pre-operation low nibble was 0x0 (the decrement borrowed across the
/// nibble boundary). Carry is untouched, matching INC.
///
/// # Returns
///
/// The decremented value.
pub fn dec8(regs: &mut RegisterFile, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    regs.set_flag(Flag::Zero, result == 0);
    regs.set_flag(Flag::Subtract, true);
    regs.set_flag(Flag::HalfCarry, value & 0x0F == 0x00);
    result
}

/// 8-bit add into the accumulator.
///
/// A += rhs with all four flags: Zero from the wrapped result, Subtract
/// cleared, HalfCarry from a carry out of bit 3, Carry from a carry out of
/// bit 7.
pub fn add_a(regs: &mut RegisterFile, rhs: u8) {
    let a = regs.read(Reg8::A);
    let sum = u16::from(a) + u16::from(rhs);
    let result = sum as u8;
    regs.set_flag(Flag::Zero, result == 0);
    regs.set_flag(Flag::Subtract, false);
    regs.set_flag(Flag::HalfCarry, (a & 0x0F) + (rhs & 0x0F) > 0x0F);
    regs.set_flag(Flag::Carry, sum > 0xFF);
    regs.write(Reg8::A, result);
}

/// 16-bit add into HL.
///
/// HL += rhs with Subtract cleared, HalfCarry from a carry out of bit 11,
/// and Carry from a carry out of bit 15. Zero is untouched: 16-bit pair
/// addition does not report zero on this hardware.
pub fn add_hl(regs: &mut RegisterFile, rhs: u16) {
    let hl = regs.pair(Pair::Hl);
    let sum = u32::from(hl) + u32::from(rhs);
    regs.set_flag(Flag::Subtract, false);
    regs.set_flag(Flag::HalfCarry, (hl & 0x0FFF) + (rhs & 0x0FFF) > 0x0FFF);
    regs.set_flag(Flag::Carry, sum > 0xFFFF);
    regs.set_pair(Pair::Hl, sum as u16);
}
