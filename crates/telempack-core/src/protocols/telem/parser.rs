use serde::{Deserialize, Serialize};

use super::error::TelemError;
use super::layout;
use super::reader::TelemReader;

/// Decoded downlink telemetry record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemPacket {
    /// Signal strength indicator reported by the receiver.
    pub rssi: u32,
    /// Time of day as packed by the transmitter (hours/minutes/seconds).
    pub timehms: f64,
    /// Packet counter assigned by the transmitter.
    pub pi: u16,
}

/// Decode one fixed-layout telemetry packet.
///
/// The buffer must be exactly [`layout::PACKET_LEN`] bytes, laid out as
/// big-endian `[u32][f64][u16]`. Field values are taken as-is; no range
/// validation is performed on them.
pub fn decode_telem_packet(payload: &[u8]) -> Result<TelemPacket, TelemError> {
    let reader = TelemReader::new(payload);
    reader.require_exact_len(layout::PACKET_LEN)?;

    let rssi = reader.read_u32_be(layout::RSSI_RANGE.clone())?;
    let timehms = reader.read_f64_be(layout::TIMEHMS_RANGE.clone())?;
    let pi = reader.read_u16_be(layout::PI_RANGE.clone())?;

    Ok(TelemPacket { rssi, timehms, pi })
}
