//! # Renderer Tests
//!
//! Exact mnemonic strings for each instruction form, through a decode of
//! the real opcode byte rather than hand-built table entries.

use rstest::rstest;
use sm83_core::isa::{decode, disasm};

/// Renders an opcode with the given operand bytes.
fn render(opcode: u8, lo: u8, hi: u8) -> String {
    let inst = decode(opcode).unwrap();
    disasm::render(&inst, lo, hi)
}

/// Tests the operand-free forms.
#[rstest]
#[case::nop(0x00, "NOP")]
#[case::ld_reg_reg(0x41, "LD B, C")]
#[case::ld_reg_mem(0x46, "LD B, (HL)")]
#[case::ld_mem_reg(0x70, "LD (HL), B")]
#[case::ld_from_bc(0x0A, "LD A, (BC)")]
#[case::inc_reg(0x04, "INC B")]
#[case::dec_mem(0x35, "DEC (HL)")]
#[case::add_reg(0x80, "ADD A, B")]
#[case::add_mem(0x86, "ADD A, (HL)")]
#[case::add_hl(0x09, "ADD HL, BC")]
#[case::inc_wide(0x03, "INC BC")]
#[case::push(0xC5, "PUSH BC")]
#[case::pop_af(0xF1, "POP AF")]
#[case::restart(0xFF, "RST $38")]
fn plain_forms(#[case] opcode: u8, #[case] expected: &str) {
    assert_eq!(render(opcode, 0, 0), expected);
}

/// Tests the byte-immediate forms: the operand prints as a two-digit
/// hex literal.
#[test]
fn byte_immediates() {
    assert_eq!(render(0x06, 0x42, 0), "LD B, $42");
    assert_eq!(render(0x36, 0xAB, 0), "LD (HL), $AB");
    assert_eq!(render(0xC6, 0x05, 0), "ADD A, $05");
}

/// Tests the word-immediate forms: little-endian operand bytes print as
/// one four-digit address.
#[test]
fn word_immediates() {
    assert_eq!(render(0x21, 0xCD, 0xAB), "LD HL, $ABCD");
    assert_eq!(render(0xC3, 0x00, 0x02), "JP $0200");
}

/// Tests the relative jump: the operand prints as a signed displacement
/// with an explicit sign.
#[test]
fn relative_jump_is_signed() {
    assert_eq!(render(0x18, 0x05, 0), "JR +5");
    assert_eq!(render(0x18, 0xFE, 0), "JR -2");
}
