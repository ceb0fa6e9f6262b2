use crate::error::TlvError;
use crate::tlv::{header, TlvType};
use std::fmt::Display;

/// Port Description TLV
///
/// The Port Description TLV allows network management to advertise the device's port description.
///
/// It is an optional TLV and as such may be included in an LLDPDU zero or more times between
/// the TTL TLV and the End of LLDPDU TLV.
#[derive(Debug, Clone, PartialEq)]
pub struct PortDescriptionTLV {
    pub tlv_type: TlvType,
    pub value: String,
}

impl Display for PortDescriptionTLV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PortDescriptionTLV(\"{}\")", self.value)
    }
}

impl PortDescriptionTLV {
    /// Constructor. Panics if `value` exceeds 255 octets.
    pub fn new(value: String) -> PortDescriptionTLV {
        assert!(value.len() <= 255, "port description exceeds 255 octets");
        PortDescriptionTLV {
            tlv_type: TlvType::PortDescription,
            value,
        }
    }

    pub fn decode(payload: &[u8]) -> Result<PortDescriptionTLV, TlvError> {
        let value = String::from_utf8(payload.to_vec()).map_err(|_| TlvError::BadUtf8)?;
        Ok(PortDescriptionTLV {
            tlv_type: TlvType::PortDescription,
            value,
        })
    }

    /// Create a TLV instance from raw bytes (header + payload).
    ///
    /// Panics if the provided TLV contains errors.
    pub fn new_from_bytes(bytes: &[u8]) -> PortDescriptionTLV {
        let (tlv_type, len) = header::decode(bytes).expect("malformed port description header");
        assert_eq!(
            tlv_type,
            TlvType::PortDescription,
            "not a port description TLV"
        );
        Self::decode(&bytes[2..2 + len]).expect("malformed port description payload")
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut out = header::encode(self.tlv_type, self.len()).to_vec();
        out.extend_from_slice(self.value.as_bytes());
        out
    }
}
