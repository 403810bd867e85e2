//! CDC 6600/7600 scoreboard timing simulator CLI.
//!
//! This binary provides a single entry point for schedule runs. It performs:
//! 1. **Program run:** Schedule a JSON program file or a built-in sample.
//! 2. **Listing:** Show the built-in sample programs.
//!
//! Logging goes to stderr through `tracing`; set `RUST_LOG=cdcsim_core=debug`
//! (or pass `--trace`) to follow every issue decision.

mod programs;
mod report;

use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cdcsim_core::config::Config;
use cdcsim_core::isa::{Instruction, Machine};
use cdcsim_core::sim::load_program_file;
use cdcsim_core::{SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "cdcsim",
    author,
    version,
    about = "CDC 6600/7600 scoreboard timing simulator",
    long_about = "Compute the issue, start, result and memory-reference cycles of a static program.\n\nExamples:\n  cdcsim run --builtin ax2-plus-b\n  cdcsim run --program poly.json --machine 6600\n  cdcsim list"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Schedule a program and print its timing table.
    Run {
        /// JSON program file (array of instructions or `{"instructions": [...]}`).
        #[arg(short, long, conflicts_with = "builtin")]
        program: Option<String>,

        /// Name of a built-in program (see `cdcsim list`).
        #[arg(short, long)]
        builtin: Option<String>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<String>,

        /// Machine model, overriding the configuration (6600 or 7600).
        #[arg(short, long)]
        machine: Option<Machine>,

        /// Cycle bound, overriding the configuration.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Print the schedule and statistics as JSON.
        #[arg(long)]
        json: bool,

        /// Log every issued instruction.
        #[arg(long)]
        trace: bool,
    },

    /// List the built-in programs.
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            program,
            builtin,
            config,
            machine,
            max_cycles,
            json,
            trace,
        }) => {
            init_logging(trace);
            let options = RunOptions {
                config,
                machine,
                max_cycles,
                json,
                trace,
            };
            if let Err(e) = cmd_run(program, builtin, &options) {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        Some(Commands::List) => cmd_list(),
        None => {
            eprintln!("CDC scoreboard simulator: pass a subcommand");
            eprintln!();
            eprintln!("  cdcsim run --builtin <name>    Schedule a sample program");
            eprintln!("  cdcsim run --program <file>    Schedule a JSON program");
            eprintln!("  cdcsim list                    Show sample programs");
            eprintln!();
            eprintln!("  cdcsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Overrides applied on top of the loaded configuration.
struct RunOptions {
    config: Option<String>,
    machine: Option<Machine>,
    max_cycles: Option<u64>,
    json: bool,
    trace: bool,
}

fn init_logging(trace: bool) {
    let default = if trace { "cdcsim=info,cdcsim_core=info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the program and configuration, runs the schedule, and prints it.
fn cmd_run(
    program: Option<String>,
    builtin: Option<String>,
    options: &RunOptions,
) -> Result<(), SimError> {
    let mut config = match &options.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(machine) = options.machine {
        config.timing.machine = machine;
    }
    if let Some(max_cycles) = options.max_cycles {
        config.general.max_cycles = max_cycles;
    }
    config.general.trace_schedule |= options.trace;

    let instructions = load_instructions(program, builtin)?;
    let machine = config.timing.machine;
    info!(%machine, instructions = instructions.len(), "program loaded");
    let mut sim = Simulator::with_program(config, instructions);
    let schedule = sim.run()?;

    if options.json {
        let out = serde_json::json!({
            "machine": machine,
            "schedule": schedule,
            "stats": sim.stats(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", report::render_table(machine, &schedule));
        println!();
        sim.stats().print();
    }
    Ok(())
}

fn load_instructions(
    program: Option<String>,
    builtin: Option<String>,
) -> Result<Vec<Instruction>, SimError> {
    match (program, builtin) {
        (Some(path), _) => load_program_file(path),
        (None, Some(name)) => match programs::find(&name) {
            Some(builtin) => Ok(builtin.program()),
            None => {
                eprintln!("Error: unknown built-in program '{name}'");
                cmd_list();
                process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("Error: specify --program <file> or --builtin <name>");
            eprintln!("  cdcsim run --builtin ax2-plus-b");
            eprintln!("  cdcsim run --program poly.json");
            process::exit(1);
        }
    }
}

fn cmd_list() {
    println!("Built-in programs:");
    for builtin in programs::BUILTINS {
        println!("  {:<20} {}", builtin.name, builtin.description);
    }
}
