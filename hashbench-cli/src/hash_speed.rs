// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::{Parser, Subcommand};
use hashbench::bench::{Benchmark, DEFAULT_SAMPLES, TEXT_TO_HASH};
use hashbench::error::{HashBenchError, HashBenchResult};
use hashbench::functions::{select, HASH_FUNCTIONS};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hash-speed-cli")]
#[command(about = "Time common hash functions over a fixed text sample", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Time each hash function (the default when no command is given).
    Run(RunArguments),

    /// Print the hex digest of the text under each hash function.
    Digest(DigestArguments),

    /// List the available hash functions in report order.
    List,
}

#[derive(Parser, Clone, Debug, PartialEq)]
struct RunArguments {
    /// Number of times each hash function is invoked.
    #[clap(short, long, default_value_t = DEFAULT_SAMPLES)]
    samples: u64,

    /// The text to hash.
    #[clap(short, long, default_value = TEXT_TO_HASH)]
    text: String,

    /// Only time the named hash functions. May be repeated.
    #[clap(short, long)]
    only: Vec<String>,
}

/// The arguments of a bare `run`, used when no command is given.
impl Default for RunArguments {
    fn default() -> Self {
        Self::parse_from(["run"])
    }
}

#[derive(Parser, Clone)]
struct DigestArguments {
    /// The text to hash.
    #[clap(short, long, default_value = TEXT_TO_HASH)]
    text: String,

    /// Only digest with the named hash functions. May be repeated.
    #[clap(short, long)]
    only: Vec<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let command = Cli::parse()
        .command
        .unwrap_or_else(|| Command::Run(RunArguments::default()));
    let mut stdout = std::io::stdout().lock();
    match execute(command, &mut stdout) {
        Ok(_) => {
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            // stdout may be the thing that failed.
            eprintln!("Error: {}", e);
            std::process::exit(match e {
                HashBenchError::Output(_) => exitcode::IOERR,
                _ => exitcode::DATAERR,
            });
        }
    }
}

fn execute<W: Write>(cmd: Command, out: &mut W) -> HashBenchResult<()> {
    match cmd {
        Command::Run(args) => {
            let entries = select(&args.only)?;
            let benchmark = Benchmark::new(&args.text, args.samples)?;
            benchmark.run(entries, out)?;
        }
        Command::Digest(args) => {
            for entry in select(&args.only)? {
                writeln!(
                    out,
                    "{}: {}",
                    entry.name,
                    entry.hex_digest(args.text.as_bytes())
                )?;
            }
        }
        Command::List => {
            for entry in HASH_FUNCTIONS.iter() {
                writeln!(out, "{}", entry.name)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
