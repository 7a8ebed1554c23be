pub const RSSI_RANGE: std::ops::Range<usize> = 0..4;
pub const TIMEHMS_RANGE: std::ops::Range<usize> = 4..12;
pub const PI_RANGE: std::ops::Range<usize> = 12..14;

pub const PACKET_LEN: usize = 14;
