//! Command implementations for the lz78 CLI.

pub mod decode;
pub mod encode;

pub use decode::cmd_decode;
pub use encode::cmd_encode;
