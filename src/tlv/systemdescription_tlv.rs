use crate::error::TlvError;
use crate::tlv::{header, TlvType};
use std::fmt::Display;

/// System Description TLV
///
/// The System Description TLV allows network management to advertise the system's description.
///
/// It is an optional TLV and as such may be included in an LLDPDU zero or more times between
/// the TTL TLV and the End of LLDPDU TLV.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemDescriptionTLV {
    pub tlv_type: TlvType,
    pub value: String,
}

impl Display for SystemDescriptionTLV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SystemDescriptionTLV(\"{}\")", self.value)
    }
}

impl SystemDescriptionTLV {
    /// Constructor. Panics if `description` exceeds 255 octets.
    pub fn new(description: String) -> SystemDescriptionTLV {
        assert!(
            description.len() <= 255,
            "system description exceeds 255 octets"
        );
        SystemDescriptionTLV {
            tlv_type: TlvType::SystemDescription,
            value: description,
        }
    }

    pub fn decode(payload: &[u8]) -> Result<SystemDescriptionTLV, TlvError> {
        let value = String::from_utf8(payload.to_vec()).map_err(|_| TlvError::BadUtf8)?;
        Ok(SystemDescriptionTLV {
            tlv_type: TlvType::SystemDescription,
            value,
        })
    }

    /// Create a TLV instance from raw bytes (header + payload).
    ///
    /// Panics if the provided TLV contains errors.
    pub fn new_from_bytes(bytes: &[u8]) -> SystemDescriptionTLV {
        let (tlv_type, len) = header::decode(bytes).expect("malformed system description header");
        assert_eq!(
            tlv_type,
            TlvType::SystemDescription,
            "not a system description TLV"
        );
        Self::decode(&bytes[2..2 + len]).expect("malformed system description payload")
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

#[cfg(test)]
mod tests {
    use super::*;

    fn set_up() -> (SystemDescriptionTLV, String) {
        let string = String::from("Unittest");
        (SystemDescriptionTLV::new(string.clone()), string)
    }

    #[test]
    fn test_portdescription_type() {
        let (tlv, _) = set_up();
        assert_eq!(tlv.tlv_type as u8, TlvType::SystemDescription as u8);
        assert_eq!(tlv.tlv_type as u8, 6);
    }

    #[test]
    fn test_portdescription_length() {
        let (tlv, _) = set_up();
        assert_eq!(tlv.len(), 8);
    }

    #[test]
    fn test_portdescription_value() {
        let (tlv, s) = set_up();
        assert_eq!(tlv.value, s);
    }

    #[test]
    fn test_portdescription_dump() {
        let (tlv, _) = set_up();
        assert_eq!(tlv.bytes(), b"\x0C\x08Unittest".to_vec());
    }

    #[test]
    fn test_portdescription_load() {
        let tlv = SystemDescriptionTLV::new_from_bytes(b"\x0C\x12YetAnotherUnittest".as_ref());
        assert_eq!(tlv.len(), 18);
        assert_eq!(tlv.value, String::from("YetAnotherUnittest"));
    }

    #[test]
    fn test_display() {
        let (tlv, _) = set_up();
        assert_eq!(format!("{}", tlv), "SystemDescriptionTLV(\"Unittest\")");
    }
}
