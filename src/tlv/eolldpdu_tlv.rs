use crate::error::TlvError;
use crate::tlv::{header, TlvType};
use std::fmt::Display;

/// End of LLDP Data Unit TLV
///
/// The End of LLDPDU TLV is an optional TLV marking the end of an LLDP data unit (LLDPDU).
/// It MUST be the last TLV in an LLDPDU and can only be included once.
#[derive(Debug, Clone, PartialEq)]
pub struct EndOfLLDPDUTLV {
    pub tlv_type: TlvType,
}

impl Display for EndOfLLDPDUTLV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EndOfLLDPDUTLV")
    }
}

impl Default for EndOfLLDPDUTLV {
    fn default() -> Self {
        Self::new()
    }
}

impl EndOfLLDPDUTLV {
    pub fn new() -> EndOfLLDPDUTLV {
        EndOfLLDPDUTLV {
            tlv_type: TlvType::EndOfLLDPDU,
        }
    }

    pub fn decode(payload: &[u8]) -> Result<EndOfLLDPDUTLV, TlvError> {
        if !payload.is_empty() {
            return Err(TlvError::BadLength);
        }
        Ok(EndOfLLDPDUTLV::new())
    }

    /// Create a TLV instance from raw bytes (header + payload).
    ///
    /// Panics if the provided TLV contains errors.
    pub fn new_from_bytes(bytes: &[u8]) -> EndOfLLDPDUTLV {
        let (tlv_type, len) = header::decode(bytes).expect("malformed end-of-lldpdu header");
        assert_eq!(tlv_type, TlvType::EndOfLLDPDU, "not an end-of-lldpdu TLV");
        Self::decode(&bytes[2..2 + len]).expect("malformed end-of-lldpdu payload")
    }

    pub fn len(&self) -> usize {
        0
    }

    pub fn is_empty(&self) -> bool {
        true
    }

    pub fn bytes(&self) -> Vec<u8> {
        header::encode(self.tlv_type, 0).to_vec()
    }
}
