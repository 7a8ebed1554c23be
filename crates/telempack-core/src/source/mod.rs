//! Packet file source.
//!
//! File I/O lives here so parsing stays pure. One file carries exactly one
//! raw downlink record; there is no framing or delimiting to handle. Length
//! and layout validation belong to the decoder, not the source.

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the raw bytes of one packet file.
pub fn read_packet_file(path: &Path) -> Result<Vec<u8>, SourceError> {
    Ok(fs::read(path)?)
}
