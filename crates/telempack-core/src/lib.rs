//! Telempack core library for ground-side telemetry decoding.
//!
//! This crate implements the decode pipeline used by the CLI: the packet
//! source reads one raw downlink record from disk and feeds the protocol
//! decoder (layout/reader/parser), which produces a typed record wrapped in
//! a versioned report. Parsing is byte-oriented and side-effect free; all
//! I/O is isolated in `source` modules. Wire-format conventions are captured
//! in the reader so the parser stays minimal and auditable.
//!
//! Invariants:
//! - Decoding is deterministic: equal buffers produce equal records.
//! - The packet layout is fixed at 14 big-endian bytes; any other length is
//!   rejected with an explicit error before field extraction.
//! - Report field order is stable across runs.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur du décodage télémétrie côté sol : source ->
//! décodeur (layout/reader/parser) -> rapport versionné. Les E/S restent
//! dans `source`, les conventions du format binaire dans le `reader`.
//! Garanties : décodage déterministe, longueur fixe de 14 octets, ordre
//! stable du rapport.
//!
//! # Examples
//! ```
//! use telempack_core::{PACKET_LEN, decode_telem_packet};
//!
//! let mut buf = [0u8; PACKET_LEN];
//! buf[0..4].copy_from_slice(&100u32.to_be_bytes());
//! buf[4..12].copy_from_slice(&2.71828f64.to_be_bytes());
//! buf[12..14].copy_from_slice(&3u16.to_be_bytes());
//!
//! let packet = decode_telem_packet(&buf)?;
//! assert_eq!(packet.rssi, 100);
//! assert_eq!(packet.pi, 3);
//! # Ok::<(), telempack_core::TelemError>(())
//! ```

use serde::{Deserialize, Serialize};

mod decode;
mod protocols;
mod source;

pub use decode::{DecodeError, decode_packet_file};
pub use protocols::telem::error::TelemError;
pub use protocols::telem::layout::PACKET_LEN;
pub use protocols::telem::parser::{TelemPacket, decode_telem_packet};
pub use source::{SourceError, read_packet_file};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when no generation time is available.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Decoded-packet report with stable field order.
///
/// # Examples
/// ```
/// use telempack_core::{InputInfo, Report, TelemPacket, ToolInfo};
///
/// let report = Report {
///     report_version: telempack_core::REPORT_VERSION,
///     tool: ToolInfo {
///         name: "telempack".to_string(),
///         version: "0.1.0".to_string(),
///     },
///     generated_at: telempack_core::DEFAULT_GENERATED_AT.to_string(),
///     input: InputInfo {
///         path: "packet.bin".to_string(),
///         bytes: 14,
///     },
///     packet: TelemPacket {
///         rssi: 100,
///         timehms: 2.71828,
///         pi: 3,
///     },
/// };
/// assert_eq!(report.packet.pi, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Input file metadata.
    pub input: InputInfo,
    /// The decoded telemetry record.
    pub packet: TelemPacket,
}

/// Tool metadata embedded in reports.
///
/// # Examples
/// ```
/// use telempack_core::ToolInfo;
///
/// let tool = ToolInfo {
///     name: "telempack".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(tool.name, "telempack");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "telempack").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input file metadata embedded in reports.
///
/// # Examples
/// ```
/// use telempack_core::InputInfo;
///
/// let input = InputInfo {
///     path: "packet.bin".to_string(),
///     bytes: 14,
/// };
/// assert_eq!(input.bytes, 14);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Build a report around a decoded packet.
///
/// `generated_at` is set to [`DEFAULT_GENERATED_AT`]; callers with access to
/// a clock overwrite it.
///
/// # Examples
/// ```
/// use telempack_core::{TelemPacket, make_report};
///
/// let packet = TelemPacket {
///     rssi: 100,
///     timehms: 2.71828,
///     pi: 3,
/// };
/// let report = make_report("packet.bin", 14, packet);
/// assert_eq!(report.report_version, telempack_core::REPORT_VERSION);
/// assert_eq!(report.input.bytes, 14);
/// ```
pub fn make_report(input_path: &str, input_bytes: u64, packet: TelemPacket) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "telempack".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        packet,
    }
}
