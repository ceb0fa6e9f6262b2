use crate::error::TlvError;
use crate::tlv::{header, TlvType};
use std::fmt::Display;

/// Organizationally Specific TLV
///
/// This TLV type is provided to allow organizations, software developers and equipment vendors to define TLVs
/// to advertise information to remote devices which can not be included in other TLV types.
///
/// It is an optional TLV and as such may be included in an LLDPDU zero or more times between the TTL TLV and the
/// End of LLDPDU TLV.
///
/// The OUI is a 24 bit number uniquely identifying a vendor, manufacturer or organization.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationallySpecificTLV {
    pub tlv_type: TlvType,
    /// Organizationally unique identifier, always 3 octets
    pub oui: Vec<u8>,
    /// Organizationally defined subtype
    pub subtype: u8,
    /// Organizationally defined information, 0-507 octets
    pub value: Vec<u8>,
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<String>()
}

impl Display for OrganizationallySpecificTLV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OrganizationallySpecificTLV(\"{}\", {}, \"{}\")",
            hex(&self.oui),
            self.subtype,
            hex(&self.value)
        )
    }
}

impl OrganizationallySpecificTLV {
    /// Constructor. Panics if `oui` is not exactly 3 octets or `value` exceeds 507 octets.
    pub fn new(oui: Vec<u8>, subtype: u8, value: Vec<u8>) -> OrganizationallySpecificTLV {
        assert_eq!(oui.len(), 3, "OUI must be exactly 3 octets");
        assert!(value.len() <= 507, "vendor payload exceeds 507 octets");
        OrganizationallySpecificTLV {
            tlv_type: TlvType::OrganizationallySpecific,
            oui,
            subtype,
            value,
        }
    }

    pub fn decode(payload: &[u8]) -> Result<OrganizationallySpecificTLV, TlvError> {
        if payload.len() < 4 {
            return Err(TlvError::ShortPayload);
        }
        let oui = payload[0..3].to_vec();
        let subtype = payload[3];
        let value = payload[4..].to_vec();
        Ok(OrganizationallySpecificTLV {
            tlv_type: TlvType::OrganizationallySpecific,
            oui,
            subtype,
            value,
        })
    }

    /// Create a TLV instance from raw bytes (header + payload).
    ///
    /// Panics if the provided TLV contains errors.
    pub fn new_from_bytes(bytes: &[u8]) -> OrganizationallySpecificTLV {
        let (tlv_type, len) =
            header::decode(bytes).expect("malformed organizationally specific header");
        assert_eq!(
            tlv_type,
            TlvType::OrganizationallySpecific,
            "not an organizationally specific TLV"
        );
        Self::decode(&bytes[2..2 + len]).expect("malformed organizationally specific payload")
    }

    pub fn len(&self) -> usize {
        4 + self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut out = header::encode(self.tlv_type, self.len()).to_vec();
        out.extend_from_slice(&self.oui);
        out.push(self.subtype);
        out.extend_from_slice(&self.value);
        out
    }
}
