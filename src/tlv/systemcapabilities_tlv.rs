use crate::error::TlvError;
use crate::tlv::{header, TlvType};
use std::{convert::TryFrom, fmt::Display};

/// Capability bit values
///
/// This enum can be used to construct a capability bitmap in a descriptive way.
///
/// To create a capability bitmap the enum values can be ORed with each other, e.g. for a WLAN router the
/// capabilities might look like this:
///
///     caps = SystemCapability::WlanAP as u16 | SystemCapability::Router as u16;
#[derive(Debug, Clone, Copy)]
pub enum SystemCapability {
    Other = 1,
    Repeater = 2,
    Bridge = 4,
    WlanAP = 8,
    Router = 16,
    Telephone = 32,
    DocsisDevice = 64,
    StationOnly = 128,
    CVlanComponent = 256,
    SVlanComponent = 512,
    TwoPortMacRelay = 1024,
}

impl TryFrom<u16> for SystemCapability {
    type Error = ();

    fn try_from(v: u16) -> Result<Self, Self::Error> {
        match v {
            x if x == SystemCapability::Other as u16 => Ok(SystemCapability::Other),
            x if x == SystemCapability::Repeater as u16 => Ok(SystemCapability::Repeater),
            x if x == SystemCapability::Bridge as u16 => Ok(SystemCapability::Bridge),
            x if x == SystemCapability::WlanAP as u16 => Ok(SystemCapability::WlanAP),
            x if x == SystemCapability::Router as u16 => Ok(SystemCapability::Router),
            x if x == SystemCapability::Telephone as u16 => Ok(SystemCapability::Telephone),
            x if x == SystemCapability::DocsisDevice as u16 => Ok(SystemCapability::DocsisDevice),
            x if x == SystemCapability::StationOnly as u16 => Ok(SystemCapability::StationOnly),
            x if x == SystemCapability::CVlanComponent as u16 => {
                Ok(SystemCapability::CVlanComponent)
            }
            x if x == SystemCapability::SVlanComponent as u16 => {
                Ok(SystemCapability::SVlanComponent)
            }
            x if x == SystemCapability::TwoPortMacRelay as u16 => {
                Ok(SystemCapability::TwoPortMacRelay)
            }
            _ => Err(()),
        }
    }
}

/// System Capabilities TLV
///
/// The System Capabilities TLV is an optional TLV that identifies the primary function(s) of the system and whether
/// or not these primary functions are enabled.
///
/// If the system capabilities field does not indicate the existence of a capability that the enabled capabilities
/// field indicates is enabled, the TLV is considered invalid (construction panics, decode returns
/// [`TlvError::CapabilityMismatch`]).
#[derive(Debug, Clone, PartialEq)]
pub struct SystemCapabilitiesTLV {
    pub tlv_type: TlvType,
    /// supported in the high 16 bits, enabled in the low 16 bits
    pub value: u32,
}

impl Display for SystemCapabilitiesTLV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let supported = (self.value >> 16) as u16;
        let enabled = (self.value & 0xFFFF) as u16;
        write!(f, "SystemCapabilitiesTLV({}, {})", supported, enabled)
    }
}

impl SystemCapabilitiesTLV {
    /// Constructor. Panics if `enabled` sets a bit `supported` does not.
    pub fn new(supported: u16, enabled: u16) -> SystemCapabilitiesTLV {
        assert_eq!(
            enabled & !supported,
            0,
            "enabled capabilities must be a subset of supported capabilities"
        );
        SystemCapabilitiesTLV {
            tlv_type: TlvType::SystemCapabilities,
            value: ((supported as u32) << 16) | enabled as u32,
        }
    }

    pub fn decode(payload: &[u8]) -> Result<SystemCapabilitiesTLV, TlvError> {
        if payload.len() != 4 {
            return Err(TlvError::BadLength);
        }
        let supported = u16::from_be_bytes([payload[0], payload[1]]);
        let enabled = u16::from_be_bytes([payload[2], payload[3]]);
        if enabled & !supported != 0 {
            return Err(TlvError::CapabilityMismatch);
        }
        Ok(SystemCapabilitiesTLV {
            tlv_type: TlvType::SystemCapabilities,
            value: ((supported as u32) << 16) | enabled as u32,
        })
    }

    /// Create a TLV instance from raw bytes (header + payload).
    ///
    /// Panics if the provided TLV contains errors.
    pub fn new_from_bytes(bytes: &[u8]) -> SystemCapabilitiesTLV {
        let (tlv_type, len) = header::decode(bytes).expect("malformed system capabilities header");
        assert_eq!(
            tlv_type,
            TlvType::SystemCapabilities,
            "not a system capabilities TLV"
        );
        Self::decode(&bytes[2..2 + len]).expect("malformed system capabilities payload")
    }

    /// Check if the system supports a given set of capabilities (ORed together).
    pub fn supports(&self, capabilities: u16) -> bool {
        let supported = (self.value >> 16) as u16;
        capabilities & supported == capabilities
    }

    /// Check if the system has a given set of capabilities enabled (ORed together).
    pub fn enabled(&self, capabilities: u16) -> bool {
        let enabled = (self.value & 0xFFFF) as u16;
        capabilities & enabled == capabilities
    }

    pub fn len(&self) -> usize {
        4
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn bytes(&self) -> Vec<u8> {
        let supported = (self.value >> 16) as u16;
        let enabled = (self.value & 0xFFFF) as u16;
        let mut out = header::encode(self.tlv_type, self.len()).to_vec();
        out.extend_from_slice(&supported.to_be_bytes());
        out.extend_from_slice(&enabled.to_be_bytes());
        out
    }
}
