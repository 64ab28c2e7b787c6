//! lz78 CLI - LZ78 file compression
//!
//! Compresses or decompresses a single file (or stdin/stdout) using the LZ78
//! stream format behind a small file header.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{cmd_decode, cmd_encode};
use std::path::PathBuf;
use utils::StreamOptions;

#[derive(Parser)]
#[command(name = "lz78")]
#[command(author, version, about = "LZ78 compression - Pure Rust")]
#[command(long_about = "
lz78 compresses files with the LZ78 dictionary algorithm.
Input defaults to stdin and output to stdout.

Examples:
  lz78 encode -i notes.txt -o notes.lz78
  lz78 decode -i notes.lz78 -o notes.txt -v
  cat notes.txt | lz78 encode > notes.lz78
  lz78 decode -i notes.lz78 --json > /dev/null
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "e")]
    Encode {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print compression statistics to stderr
        #[arg(short, long)]
        verbose: bool,

        /// Print statistics as JSON (machine-readable)
        #[arg(long)]
        json: bool,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decode {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print compression statistics to stderr
        #[arg(short, long)]
        verbose: bool,

        /// Print statistics as JSON (machine-readable)
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            verbose,
            json,
        } => cmd_encode(&StreamOptions {
            input,
            output,
            verbose,
            json,
        }),
        Commands::Decode {
            input,
            output,
            verbose,
            json,
        } => cmd_decode(&StreamOptions {
            input,
            output,
            verbose,
            json,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
