//! Utility functions for the CLI.

use lz78::CodecStats;
use serde::Serialize;
use std::fs::{File, Metadata, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Permission bits used when the source has none to offer (stdin, non-unix).
pub const DEFAULT_PROTECTION: u32 = 0o644;

/// Options shared by the encode and decode commands.
pub struct StreamOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub json: bool,
}

/// JSON serializable statistics for one run.
#[derive(Debug, Serialize)]
struct StatsJson<'a> {
    command: &'a str,
    compressed_size: u64,
    uncompressed_size: u64,
    compression_ratio: f64,
    pairs: u64,
    dictionary_resets: u64,
}

impl<'a> StatsJson<'a> {
    fn new(command: &'a str, stats: &CodecStats, compressed_is_output: bool) -> Self {
        let (compressed_size, uncompressed_size) = sizes(stats, compressed_is_output);
        Self {
            command,
            compressed_size,
            uncompressed_size,
            compression_ratio: stats.compression_ratio(compressed_is_output),
            pairs: stats.pairs,
            dictionary_resets: stats.dictionary_resets,
        }
    }
}

/// Open the input file, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn Read>> {
    match path {
        Some(path) => Ok(Box::new(File::open(path)?)),
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Create (or truncate) the output file with the given permission bits, or
/// use stdout when no path is given.
///
/// The permission bits only apply when the file is newly created.
pub fn create_output(path: Option<&Path>, protection: u32) -> io::Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdout().lock()));
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(protection);
    }
    #[cfg(not(unix))]
    let _ = protection;

    Ok(Box::new(options.open(path)?))
}

/// Permission bits of a file, for the file header.
pub fn file_protection(metadata: &Metadata) -> u32 {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode()
    }
    #[cfg(not(unix))]
    {
        let _ = metadata;
        DEFAULT_PROTECTION
    }
}

/// `(compressed, uncompressed)` byte counts of a run.
fn sizes(stats: &CodecStats, compressed_is_output: bool) -> (u64, u64) {
    if compressed_is_output {
        (stats.bytes_written, stats.bytes_read)
    } else {
        (stats.bytes_read, stats.bytes_written)
    }
}

/// Human-readable statistics, one line per entry.
fn format_stats(stats: &CodecStats, compressed_is_output: bool) -> Vec<String> {
    let (compressed, uncompressed) = sizes(stats, compressed_is_output);
    vec![
        format!("Compressed file size: {} bytes", compressed),
        format!("Uncompressed file size: {} bytes", uncompressed),
        format!(
            "Compression ratio: {:.2}%",
            stats.compression_ratio(compressed_is_output)
        ),
    ]
}

/// Print run statistics to stderr if requested.
///
/// Statistics never go to stdout, which may carry the data itself.
pub fn report_stats(
    command: &str,
    stats: &CodecStats,
    compressed_is_output: bool,
    options: &StreamOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if options.json {
        let json = StatsJson::new(command, stats, compressed_is_output);
        eprintln!("{}", serde_json::to_string_pretty(&json)?);
    } else if options.verbose {
        for line in format_stats(stats, compressed_is_output) {
            eprintln!("{}", line);
        }
    }
    Ok(())
}
