use std::path::Path;

use thiserror::Error;

use crate::protocols::telem::decode_telem_packet;
use crate::protocols::telem::error::TelemError;
use crate::source::{SourceError, read_packet_file};
use crate::{Report, make_report};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("Format error: {0}")]
    Format(#[from] TelemError),
}

/// Decode one packet file into a report.
///
/// Reads the file through the source layer, decodes the record, and wraps it
/// with input metadata. The report's `generated_at` keeps the library
/// default; callers that want a real timestamp stamp it themselves.
pub fn decode_packet_file(path: &Path) -> Result<Report, DecodeError> {
    let data = read_packet_file(path)?;
    let packet = decode_telem_packet(&data)?;
    Ok(make_report(
        &path.display().to_string(),
        data.len() as u64,
        packet,
    ))
}
