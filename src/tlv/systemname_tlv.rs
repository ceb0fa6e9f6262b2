use crate::error::TlvError;
use crate::tlv::{header, TlvType};
use std::fmt::Display;

/// System Name TLV
///
/// The System Name TLV allows network management to advertise the system's assigned name.
///
/// It is an optional TLV and as such may be included in an LLDPDU zero or more times between
/// the TTL TLV and the End of LLDPDU TLV.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemNameTLV {
    pub tlv_type: TlvType,
    pub value: String,
}

impl Display for SystemNameTLV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SystemNameTLV(\"{}\")", self.value)
    }
}

impl SystemNameTLV {
    /// Constructor. Panics if `name` exceeds 255 octets.
    pub fn new(name: String) -> SystemNameTLV {
        assert!(name.len() <= 255, "system name exceeds 255 octets");
        SystemNameTLV {
            tlv_type: TlvType::SystemName,
            value: name,
        }
    }

    pub fn decode(payload: &[u8]) -> Result<SystemNameTLV, TlvError> {
        let value = String::from_utf8(payload.to_vec()).map_err(|_| TlvError::BadUtf8)?;
        Ok(SystemNameTLV {
            tlv_type: TlvType::SystemName,
            value,
        })
    }

    /// Create a TLV instance from raw bytes (header + payload).
    ///
    /// Panics if the provided TLV contains errors.
    pub fn new_from_bytes(bytes: &[u8]) -> SystemNameTLV {
        let (tlv_type, len) = header::decode(bytes).expect("malformed system name header");
        assert_eq!(tlv_type, TlvType::SystemName, "not a system name TLV");
        Self::decode(&bytes[2..2 + len]).expect("malformed system name payload")
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
