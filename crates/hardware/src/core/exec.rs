//! Fetch/decode/execute dispatch.
//!
//! This module drives the core one instruction at a time. Each
//! [`Cpu::step`] call:
//! 1. **Fetches** the opcode byte at PC and looks it up in the decode table.
//! 2. **Reads** the operand bytes the table entry declares.
//! 3. **Advances** PC past the whole instruction, then applies the
//!    transformation; control flow overwrites the advanced PC.
//! 4. **Retires** the instruction, charging its fixed cycle cost.
//!
//! A byte with no table entry stops the machine with
//! [`Fault::UnimplementedOpcode`] and PC still pointing at the faulting
//! byte.

use tracing::debug;

use crate::common::{Addr, Fault};
use crate::core::alu;
use crate::core::cpu::Cpu;
use crate::core::regs::Pair;
use crate::isa::instruction::{Op, Wide};
use crate::isa::{decode, disasm};

impl Cpu {
    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// The retired instruction's cycle cost, or
    /// [`Fault::UnimplementedOpcode`] with the machine state untouched.
    pub fn step(&mut self) -> Result<u32, Fault> {
        let pc = self.regs.pc();
        let opcode = self.mem.read(pc);

        let Some(inst) = decode(opcode) else {
            debug!(opcode = format_args!("{opcode:#04x}"), pc = %pc, "dispatch fault");
            return Err(Fault::UnimplementedOpcode { opcode, pc });
        };

        let lo = if inst.operands >= 1 {
            self.mem.read(pc.wrapping_add(1))
        } else {
            0
        };
        let hi = if inst.operands == 2 {
            self.mem.read(pc.wrapping_add(2))
        } else {
            0
        };

        if self.trace {
            println!(
                "[CPU] {pc}  {:<14} ({} cycles)",
                disasm::render(&inst, lo, hi),
                inst.cycles
            );
        }

        // The return address RST pushes and the base JR displaces from is
        // the address of the next instruction, so PC moves first.
        self.regs.advance_pc(inst.length());
        self.apply(inst.op, lo, hi);

        self.set_last_cycle_cost(inst.cycles);
        self.stats.record(inst.op.category(), inst.cycles);
        Ok(inst.cycles)
    }

    /// Applies one decoded transformation to the machine state.
    ///
    /// PC already points past the instruction; `lo` and `hi` are the
    /// operand bytes (zero when the instruction has fewer).
    fn apply(&mut self, op: Op, lo: u8, hi: u8) {
        let word = u16::from(hi) << 8 | u16::from(lo);

        match op {
            Op::Nop => {}

            Op::LdRegReg { dst, src } => {
                let value = self.regs.read(src);
                self.regs.write(dst, value);
            }
            Op::LdRegImm { dst } => self.regs.write(dst, lo),
            Op::LdRegMem { dst, addr } => {
                let cell = Addr::new(self.regs.pair(addr));
                let value = self.mem.read(cell);
                self.regs.write(dst, value);
            }
            Op::LdMemReg { addr, src } => {
                let cell = Addr::new(self.regs.pair(addr));
                self.mem.write(cell, self.regs.read(src));
            }
            Op::LdMemImm => {
                let cell = Addr::new(self.regs.pair(Pair::Hl));
                self.mem.write(cell, lo);
            }
            Op::LdWideImm { dst } => self.set_wide(dst, word),

            Op::IncReg { reg } => {
                let value = self.regs.read(reg);
                let result = alu::inc8(&mut self.regs, value);
                self.regs.write(reg, result);
            }
            Op::DecReg { reg } => {
                let value = self.regs.read(reg);
                let result = alu::dec8(&mut self.regs, value);
                self.regs.write(reg, result);
            }
            Op::IncMem => {
                let cell = Addr::new(self.regs.pair(Pair::Hl));
                let value = self.mem.read(cell);
                let result = alu::inc8(&mut self.regs, value);
                self.mem.write(cell, result);
            }
            Op::DecMem => {
                let cell = Addr::new(self.regs.pair(Pair::Hl));
                let value = self.mem.read(cell);
                let result = alu::dec8(&mut self.regs, value);
                self.mem.write(cell, result);
            }

            Op::AddReg { src } => {
                let value = self.regs.read(src);
                alu::add_a(&mut self.regs, value);
            }
            Op::AddMem => {
                let cell = Addr::new(self.regs.pair(Pair::Hl));
                let value = self.mem.read(cell);
                alu::add_a(&mut self.regs, value);
            }
            Op::AddImm => alu::add_a(&mut self.regs, lo),
            Op::AddHl { src } => {
                let value = self.wide(src);
                alu::add_hl(&mut self.regs, value);
            }

            Op::IncWide { reg } => {
                let value = self.wide(reg).wrapping_add(1);
                self.set_wide(reg, value);
            }
            Op::DecWide { reg } => {
                let value = self.wide(reg).wrapping_sub(1);
                self.set_wide(reg, value);
            }

            Op::Jump => self.regs.set_pc(Addr::new(word)),
            Op::JumpRel => {
                let target = self.regs.pc().offset(lo as i8);
                self.regs.set_pc(target);
            }

            Op::Push { pair } => {
                let value = self.regs.pair(pair);
                self.push_word(value);
            }
            Op::Pop { pair } => {
                let value = self.pop_word();
                self.regs.set_pair(pair, value);
            }
            Op::Restart { vector } => {
                let ret = self.regs.pc().val();
                self.push_word(ret);
                self.regs.set_pc(Addr::new(u16::from(vector)));
            }
        }
    }

    /// Pushes a 16-bit word: SP drops by two, high byte lands at the
    /// higher address.
    fn push_word(&mut self, word: u16) {
        let sp = self.regs.sp().wrapping_sub(2);
        self.regs.set_sp(sp);
        self.mem.write(sp.wrapping_add(1), (word >> 8) as u8);
        self.mem.write(sp, (word & 0xFF) as u8);
    }

    /// Pops a 16-bit word: low byte from SP, high byte from SP+1, SP rises
    /// by two. Exact inverse of [`push_word`](Self::push_word).
    fn pop_word(&mut self) -> u16 {
        let sp = self.regs.sp();
        let lo = self.mem.read(sp);
        let hi = self.mem.read(sp.wrapping_add(1));
        self.regs.set_sp(sp.wrapping_add(2));
        u16::from(hi) << 8 | u16::from(lo)
    }

    /// Reads a wide register, mapping SP onto the stack pointer.
    fn wide(&self, reg: Wide) -> u16 {
        match reg {
            Wide::Bc => self.regs.pair(Pair::Bc),
            Wide::De => self.regs.pair(Pair::De),
            Wide::Hl => self.regs.pair(Pair::Hl),
            Wide::Sp => self.regs.sp().val(),
        }
    }

    /// Writes a wide register, mapping SP onto the stack pointer.
    fn set_wide(&mut self, reg: Wide, word: u16) {
        match reg {
            Wide::Bc => self.regs.set_pair(Pair::Bc, word),
            Wide::De => self.regs.set_pair(Pair::De, word),
            Wide::Hl => self.regs.set_pair(Pair::Hl, word),
            Wide::Sp => self.regs.set_sp(Addr::new(word)),
        }
    }
}
