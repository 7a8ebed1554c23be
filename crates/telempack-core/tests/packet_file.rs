use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use telempack_core::{DecodeError, PACKET_LEN, decode_packet_file};

fn temp_packet_path(tag: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("telempack_{tag}_{unique}.bin"));
    path
}

fn sample_packet_bytes() -> [u8; PACKET_LEN] {
    let mut buf = [0u8; PACKET_LEN];
    buf[0..4].copy_from_slice(&100u32.to_be_bytes());
    buf[4..12].copy_from_slice(&2.71828f64.to_be_bytes());
    buf[12..14].copy_from_slice(&3u16.to_be_bytes());
    buf
}

#[test]
fn decode_packet_file_reads_valid_packet() {
    let path = temp_packet_path("valid");
    fs::write(&path, sample_packet_bytes()).unwrap();

    let report = decode_packet_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(report.input.bytes, PACKET_LEN as u64);
    assert_eq!(report.packet.rssi, 100);
    assert_eq!(report.packet.timehms, 2.71828);
    assert_eq!(report.packet.pi, 3);
}

#[test]
fn decode_packet_file_rejects_truncated_file() {
    let path = temp_packet_path("truncated");
    fs::write(&path, [0u8; PACKET_LEN - 1]).unwrap();

    let err = match decode_packet_file(&path) {
        Ok(_) => panic!("expected truncated packet to be rejected"),
        Err(err) => err,
    };
    let _ = fs::remove_file(&path);

    assert!(matches!(err, DecodeError::Format(_)));
    assert!(err.to_string().contains("wrong packet length"));
}

#[test]
fn decode_packet_file_rejects_oversized_file() {
    let path = temp_packet_path("oversized");
    fs::write(&path, [0u8; PACKET_LEN + 1]).unwrap();

    let err = match decode_packet_file(&path) {
        Ok(_) => panic!("expected oversized packet to be rejected"),
        Err(err) => err,
    };
    let _ = fs::remove_file(&path);

    assert!(err.to_string().contains("got 15"));
}

#[test]
fn decode_packet_file_missing_file_is_source_error() {
    let path = temp_packet_path("missing");
    let err = decode_packet_file(&path).unwrap_err();
    assert!(matches!(err, DecodeError::Source(_)));
}
