//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the SM83 core. It provides:
//! 1. **Cycle counts:** Total cycles, retired instructions, and derived CPI.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, control, stack).
//! 3. **Throughput:** Host wall-clock time and the achieved simulated clock rate.

use std::time::Instant;

use crate::isa::instruction::Category;

/// Simulation statistics structure tracking all execution metrics.
///
/// Counters are updated once per retired instruction and reported at the
/// end of a run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulated cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of ALU (arithmetic and NOP) instructions retired.
    pub inst_alu: u64,
    /// Count of control-flow instructions retired.
    pub inst_control: u64,
    /// Count of stack (PUSH/POP) instructions retired.
    pub inst_stack: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_alu: 0,
            inst_control: 0,
            inst_stack: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `category` - The instruction's mix bucket.
    /// * `cycles` - The instruction's fixed cycle cost.
    pub fn record(&mut self, category: Category, cycles: u32) {
        self.cycles += u64::from(cycles);
        self.instructions_retired += 1;
        match category {
            Category::Load => self.inst_load += 1,
            Category::Store => self.inst_store += 1,
            Category::Alu => self.inst_alu += 1,
            Category::Control => self.inst_control += 1,
            Category::Stack => self.inst_stack += 1,
        }
    }

    /// Prints all statistics to stdout.
    ///
    /// # Panics
    ///
    /// This function will not panic. Division by zero is prevented by
    /// substituting 1 for `cycles` and `instructions_retired` whenever
    /// either counter is still zero.
    pub fn print(&self) {
        let duration = self.start_time.elapsed();
        let seconds = duration.as_secs_f64();
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };

        let cpi = cyc as f64 / instr as f64;
        let mhz = (self.cycles as f64 / seconds) / 1_000_000.0;
        println!("\n==========================================================");
        println!("SM83 CORE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_freq                 {mhz:.4} MHz");
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_cpi                  {cpi:.4}");
        println!("----------------------------------------------------------");

        let total_inst = instr as f64;
        println!("INSTRUCTION MIX");
        println!(
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            (self.inst_alu as f64 / total_inst) * 100.0
        );
        println!(
            "  op.load                {} ({:.2}%)",
            self.inst_load,
            (self.inst_load as f64 / total_inst) * 100.0
        );
        println!(
            "  op.store               {} ({:.2}%)",
            self.inst_store,
            (self.inst_store as f64 / total_inst) * 100.0
        );
        println!(
            "  op.control             {} ({:.2}%)",
            self.inst_control,
            (self.inst_control as f64 / total_inst) * 100.0
        );
        println!(
            "  op.stack               {} ({:.2}%)",
            self.inst_stack,
            (self.inst_stack as f64 / total_inst) * 100.0
        );
        println!("==========================================================");
    }
}
