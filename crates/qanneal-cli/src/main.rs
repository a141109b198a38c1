//! QAnneal Command-Line Interface
//!
//! Drive the D-Wave backends on QUBO instances from sparse text files.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{solve, terms};

/// QAnneal - QUBO solving via external annealing backends
#[derive(Parser)]
#[command(name = "qanneal")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a QUBO instance on an annealing backend
    Solve {
        /// Instance file (sparse text format: "n m" header, then "i j w" lines)
        #[arg(short, long)]
        input: PathBuf,

        /// Backend to use (qpu, sa)
        #[arg(short, long, default_value = "sa")]
        backend: String,

        /// Solver config file forwarded to the external sampler
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Recompute and check the objective of the returned assignment
        #[arg(long)]
        validate: bool,

        /// Advisory runtime limit in seconds
        #[arg(short, long, default_value = "60")]
        time_limit: f64,
    },

    /// Extract a QUBO instance's term list and print it as JSON
    Terms {
        /// Instance file (sparse text format: "n m" header, then "i j w" lines)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Solve {
            input,
            backend,
            config,
            validate,
            time_limit,
        } => solve::execute(&input, &backend, config.as_deref(), validate, time_limit),

        Commands::Terms { input } => terms::execute(&input),
    }
}
