//! SM83 core simulator CLI.
//!
//! This binary provides a single entry point for the simulator. It performs:
//! 1. **Paced run:** Execute a raw image at the modeled clock rate until a
//!    fault or a step limit; per-instruction tracing via the config file or
//!    `--trace`.
//! 2. **Disassembly:** Render a listing of an image without executing it.

use std::process;
use std::thread;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sm83_core::config::Config;
use sm83_core::isa::{decode, disasm};
use sm83_core::sim::loader;
use sm83_core::sim::simulator::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "SM83 (Game Boy DMG) core simulator",
    long_about = "Run a raw program image on an interpreted SM83 core, paced to the modeled clock, or disassemble one without running it.\n\nConfiguration is JSON (see README); the CLI uses built-in defaults when no file is given.\n\nExamples:\n  sim run rom.bin\n  sim run rom.bin --config machine.json --steps 1000\n  sim run rom.bin --no-pace --trace\n  sim disasm rom.bin --start 256 --count 40"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a raw image from address zero of the flat memory.
    Run {
        /// Program image to execute.
        image: String,

        /// JSON configuration file (built-in defaults when omitted).
        #[arg(short, long)]
        config: Option<String>,

        /// Stop after this many instructions (overrides the config).
        #[arg(long)]
        steps: Option<u64>,

        /// Run flat out instead of pacing to the modeled clock.
        #[arg(long)]
        no_pace: bool,

        /// Print each instruction as it executes (overrides the config).
        #[arg(long)]
        trace: bool,
    },

    /// Disassemble an image without executing it.
    Disasm {
        /// Program image to render.
        image: String,

        /// Address to start rendering from.
        #[arg(long, default_value_t = 0)]
        start: u16,

        /// Number of instructions to render.
        #[arg(long, default_value_t = 32)]
        count: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            image,
            config,
            steps,
            no_pace,
            trace,
        } => cmd_run(&image, config, steps, no_pace, trace),
        Commands::Disasm {
            image,
            start,
            count,
        } => cmd_disasm(&image, start, count),
    }
}

/// Runs the simulator: loads the image, resets the core, then loops on
/// `step` until a fault or the step limit.
///
/// Each retired instruction's cycle budget is slept off when pacing is on.
/// On a fault, dumps state and exits with code 1.
fn cmd_run(
    image: &str,
    config_path: Option<String>,
    steps: Option<u64>,
    no_pace: bool,
    trace: bool,
) {
    let mut config = match config_path {
        Some(ref path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    if let Some(limit) = steps {
        config.general.max_steps = limit;
    }
    if no_pace {
        config.timing.pace = false;
    }
    if trace {
        config.general.trace_instructions = true;
    }

    let mut sim = Simulator::new(&config);

    println!(
        "Configuration: {}",
        config_path.as_deref().unwrap_or("default")
    );
    println!(
        "  Trace: {}  Start PC: {:#06x}  Pacing: {}",
        config.general.trace_instructions, config.machine.start_pc, config.timing.pace
    );
    println!();

    match sim.load_image(image) {
        Ok(bytes) => println!("[*] Loaded {bytes} bytes from {image}"),
        Err(fault) => {
            eprintln!("\n[!] FATAL: {fault}");
            process::exit(1);
        }
    }
    sim.reset();

    let pacing = config.timing.pace;
    let max_steps = config.general.max_steps;
    let mut retired: u64 = 0;

    loop {
        let started = Instant::now();
        match sim.step() {
            Ok(cycles) => {
                if pacing {
                    let wait = sim.pacer.shortfall(cycles, started.elapsed());
                    if !wait.is_zero() {
                        thread::sleep(wait);
                    }
                }
            }
            Err(fault) => {
                eprintln!("\n[!] FATAL: {fault}");
                sim.cpu.dump_state();
                sim.cpu.stats.print();
                process::exit(1);
            }
        }

        retired += 1;
        if max_steps != 0 && retired >= max_steps {
            println!("\n[*] Step limit reached ({retired} instructions)");
            sim.cpu.stats.print();
            break;
        }
    }
}

/// Renders a listing of an image to stdout without executing it.
///
/// Unknown bytes are rendered as `.db` directives and skipped one byte at
/// a time, so the listing resynchronizes on the next known opcode.
fn cmd_disasm(image: &str, start: u16, count: usize) {
    let bytes = loader::read_image(image).unwrap_or_else(|fault| {
        eprintln!("\n[!] FATAL: {fault}");
        process::exit(1);
    });

    let mut pc = start;
    for _ in 0..count {
        let Some(&opcode) = bytes.get(usize::from(pc)) else {
            break;
        };

        match decode(opcode) {
            Some(inst) => {
                let at = |offset: u16| {
                    bytes
                        .get(usize::from(pc.wrapping_add(offset)))
                        .copied()
                        .unwrap_or(0)
                };
                let lo = if inst.operands >= 1 { at(1) } else { 0 };
                let hi = if inst.operands == 2 { at(2) } else { 0 };

                let raw = match inst.operands {
                    0 => format!("{opcode:02X}"),
                    1 => format!("{opcode:02X} {lo:02X}"),
                    _ => format!("{opcode:02X} {lo:02X} {hi:02X}"),
                };
                println!("{pc:#06x}  {raw:<9} {}", disasm::render(&inst, lo, hi));
                pc = pc.wrapping_add(inst.length());
            }
            None => {
                println!("{pc:#06x}  {opcode:02X}        .db ${opcode:02X}");
                pc = pc.wrapping_add(1);
            }
        }
    }
}
