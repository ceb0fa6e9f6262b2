use crate::error::TlvError;
use crate::tlv::header;
use crate::tlv::identifier::{self, IdSubtype, IdValue};
use crate::tlv::TlvType;

use std::fmt::Display;

/// Port ID TLV
///
/// The port ID TLV identifies the port transmitting the LLDPDU.
///
/// The port ID TLV is mandatory and MUST be the second TLV in the LLDPDU.
/// Each LLDPDU MUST contain one, and only one, Port ID TLV.
///
/// Subtype and value share the identifier table documented in
/// [`crate::tlv::identifier`] rather than keeping a Port-ID-specific table
/// with different numeric values for the same concepts.
pub use identifier::IdSubtype as PortIdSubtype;
pub use identifier::IdValue as PortIdValue;

#[derive(Debug, Clone, PartialEq)]
pub struct PortIdTLV {
    pub tlv_type: TlvType,
    pub subtype: PortIdSubtype,
    pub value: PortIdValue,
}

impl Display for PortIdTLV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PortIdTLV({}, \"{}\")",
            self.subtype as u8,
            identifier::display_value(&self.value)
        )
    }
}

impl PortIdTLV {
    /// Constructor. Panics if `id`'s shape does not match `subtype`.
    pub fn new(subtype: PortIdSubtype, id: PortIdValue) -> PortIdTLV {
        identifier::validate(subtype, &id);
        PortIdTLV {
            tlv_type: TlvType::PortId,
            subtype,
            value: id,
        }
    }

    pub fn decode(payload: &[u8]) -> Result<PortIdTLV, TlvError> {
        let (subtype, value) = identifier::decode(payload)?;
        Ok(PortIdTLV {
            tlv_type: TlvType::PortId,
            subtype,
            value,
        })
    }

    /// Create a TLV instance from raw bytes (header + payload).
    ///
    /// Panics if the provided TLV contains errors.
    pub fn new_from_bytes(bytes: &[u8]) -> PortIdTLV {
        let (tlv_type, len) = header::decode(bytes).expect("malformed port id header");
        assert_eq!(tlv_type, TlvType::PortId, "not a port id TLV");
        Self::decode(&bytes[2..2 + len]).expect("malformed port id payload")
    }

    pub fn len(&self) -> usize {
        identifier::len(&self.value)
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn bytes(&self) -> Vec<u8> {
        let payload = identifier::encode(self.subtype, &self.value);
        let mut out = header::encode(self.tlv_type, payload.len()).to_vec();
        out.extend(payload);
        out
    }
}
