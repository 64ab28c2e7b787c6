//! Decode command implementation.

use crate::utils::{StreamOptions, create_output, open_input, report_stats};
use lz78::{FileHeader, HEADER_SIZE, Lz78Config, decompress_stream};
use std::io::Write;

pub fn cmd_decode(options: &StreamOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = open_input(options.input.as_deref())?;

    let header = FileHeader::read(&mut input)?;
    let mut output = create_output(options.output.as_deref(), u32::from(header.protection))?;

    let stats = decompress_stream(input, &mut output, Lz78Config::DEFAULT)?
        .with_container_bytes(HEADER_SIZE as u64, false);
    output.flush()?;

    report_stats("decode", &stats, false, options)
}
