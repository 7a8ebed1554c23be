use super::error::TelemError;

pub struct TelemReader<'a> {
    payload: &'a [u8],
}

impl<'a> TelemReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_exact_len(&self, needed: usize) -> Result<(), TelemError> {
        if self.payload.len() != needed {
            return Err(TelemError::WrongLength {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, TelemError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(TelemError::WrongLength {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_be(&self, range: std::ops::Range<usize>) -> Result<u32, TelemError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 4 {
            return Err(TelemError::WrongLength {
                needed: 4,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_f64_be(&self, range: std::ops::Range<usize>) -> Result<f64, TelemError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 8 {
            return Err(TelemError::WrongLength {
                needed: 8,
                actual: bytes.len(),
            });
        }
        Ok(f64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], TelemError> {
        self.payload
            .get(range.clone())
            .ok_or(TelemError::WrongLength {
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::TelemReader;
    use crate::protocols::telem::error::TelemError;

    #[test]
    fn require_exact_len_accepts_matching_buffer() {
        let payload = [0u8; 14];
        let reader = TelemReader::new(&payload);
        assert!(reader.require_exact_len(14).is_ok());
    }

    #[test]
    fn require_exact_len_rejects_short_buffer() {
        let payload = [0u8; 13];
        let reader = TelemReader::new(&payload);
        let err = reader.require_exact_len(14).unwrap_err();
        assert!(matches!(
            err,
            TelemError::WrongLength {
                needed: 14,
                actual: 13
            }
        ));
    }

    #[test]
    fn require_exact_len_rejects_long_buffer() {
        let payload = [0u8; 15];
        let reader = TelemReader::new(&payload);
        let err = reader.require_exact_len(14).unwrap_err();
        assert!(err.to_string().contains("got 15"));
    }

    #[test]
    fn read_u32_be_reads_network_order() {
        let payload = [0x00, 0x00, 0x00, 0x64];
        let reader = TelemReader::new(&payload);
        assert_eq!(reader.read_u32_be(0..4).unwrap(), 100);
    }

    #[test]
    fn read_u16_be_reads_network_order() {
        let payload = [0x01, 0x02];
        let reader = TelemReader::new(&payload);
        assert_eq!(reader.read_u16_be(0..2).unwrap(), 0x0102);
    }

    #[test]
    fn read_f64_be_round_trips_bits() {
        let payload = 2.71828f64.to_be_bytes();
        let reader = TelemReader::new(&payload);
        assert_eq!(reader.read_f64_be(0..8).unwrap(), 2.71828);
    }

    #[test]
    fn read_slice_out_of_range() {
        let payload = [0u8; 4];
        let reader = TelemReader::new(&payload);
        let err = reader.read_slice(2..6).unwrap_err();
        assert!(matches!(err, TelemError::WrongLength { needed: 6, .. }));
    }
}
