//! Encode command implementation.

use crate::utils::{
    DEFAULT_PROTECTION, StreamOptions, create_output, file_protection, report_stats,
};
use lz78::{FileHeader, HEADER_SIZE, Lz78Config, compress_stream};
use std::fs::File;
use std::io::{self, Read, Write};

pub fn cmd_encode(options: &StreamOptions) -> Result<(), Box<dyn std::error::Error>> {
    let (input, protection): (Box<dyn Read>, u32) = match &options.input {
        Some(path) => {
            let file = File::open(path)?;
            let protection = file_protection(&file.metadata()?);
            (Box::new(file), protection)
        }
        None => (Box::new(io::stdin().lock()), DEFAULT_PROTECTION),
    };

    // The compressed file gets the same permissions as its source.
    let mut output = create_output(options.output.as_deref(), protection)?;

    FileHeader::new(protection).write(&mut output)?;
    let stats = compress_stream(input, &mut output, Lz78Config::DEFAULT)?
        .with_container_bytes(HEADER_SIZE as u64, true);
    output.flush()?;

    report_stats("encode", &stats, true, options)
}
