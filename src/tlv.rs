use std::convert::TryFrom;
use std::fmt::Display;

use crate::error::TlvError;

pub mod chassisid_tlv;
pub mod eolldpdu_tlv;
pub mod header;
pub mod identifier;
pub mod managementaddress_tlv;
pub mod organizationallyspecific_tlv;
pub mod portdescription_tlv;
pub mod portid_tlv;
pub mod systemcapabilities_tlv;
pub mod systemdescription_tlv;
pub mod systemname_tlv;
pub mod ttl_tlv;

#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum TlvType {
    EndOfLLDPDU = 0,
    ChassisId = 1,
    PortId = 2,
    Ttl = 3,
    PortDescription = 4,
    SystemName = 5,
    SystemDescription = 6,
    SystemCapabilities = 7,
    ManagementAddress = 8,
    OrganizationallySpecific = 127,
}

impl TryFrom<u8> for TlvType {
    type Error = ();

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            x if x == TlvType::EndOfLLDPDU as u8 => Ok(TlvType::EndOfLLDPDU),
            x if x == TlvType::ChassisId as u8 => Ok(TlvType::ChassisId),
            x if x == TlvType::PortId as u8 => Ok(TlvType::PortId),
            x if x == TlvType::Ttl as u8 => Ok(TlvType::Ttl),
            x if x == TlvType::PortDescription as u8 => Ok(TlvType::PortDescription),
            x if x == TlvType::SystemName as u8 => Ok(TlvType::SystemName),
            x if x == TlvType::SystemDescription as u8 => Ok(TlvType::SystemDescription),
            x if x == TlvType::SystemCapabilities as u8 => Ok(TlvType::SystemCapabilities),
            x if x == TlvType::ManagementAddress as u8 => Ok(TlvType::ManagementAddress),
            x if x == TlvType::OrganizationallySpecific as u8 => {
                Ok(TlvType::OrganizationallySpecific)
            }
            _ => Err(()),
        }
    }
}

use crate::tlv::chassisid_tlv::ChassisIdTLV;
use crate::tlv::eolldpdu_tlv::EndOfLLDPDUTLV;
use crate::tlv::managementaddress_tlv::ManagementAddressTLV;
use crate::tlv::organizationallyspecific_tlv::OrganizationallySpecificTLV;
use crate::tlv::portdescription_tlv::PortDescriptionTLV;
use crate::tlv::portid_tlv::PortIdTLV;
use crate::tlv::systemcapabilities_tlv::SystemCapabilitiesTLV;
use crate::tlv::systemdescription_tlv::SystemDescriptionTLV;
use crate::tlv::systemname_tlv::SystemNameTLV;
use crate::tlv::ttl_tlv::TtlTLV;

/// A single decoded LLDP TLV record.
///
/// Every variant knows how to render and parse its own payload; this type
/// only dispatches on the two-octet header's type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Tlv {
    ChassisId(ChassisIdTLV),
    EndOfLldpdu(EndOfLLDPDUTLV),
    ManagementAddress(ManagementAddressTLV),
    OrganizationallySpecific(OrganizationallySpecificTLV),
    PortId(PortIdTLV),
    PortDescription(PortDescriptionTLV),
    SystemDescription(SystemDescriptionTLV),
    SystemName(SystemNameTLV),
    SystemCapabilities(SystemCapabilitiesTLV),
    Ttl(TtlTLV),
}

impl Display for Tlv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tlv::ChassisId(tlv) => write!(f, "{}", tlv),
            Tlv::EndOfLldpdu(tlv) => write!(f, "{}", tlv),
            Tlv::ManagementAddress(tlv) => write!(f, "{}", tlv),
            Tlv::OrganizationallySpecific(tlv) => write!(f, "{}", tlv),
            Tlv::PortId(tlv) => write!(f, "{}", tlv),
            Tlv::PortDescription(tlv) => write!(f, "{}", tlv),
            Tlv::SystemDescription(tlv) => write!(f, "{}", tlv),
            Tlv::SystemName(tlv) => write!(f, "{}", tlv),
            Tlv::SystemCapabilities(tlv) => write!(f, "{}", tlv),
            Tlv::Ttl(tlv) => write!(f, "{}", tlv),
        }
    }
}

impl Tlv {
    pub fn get_type(&self) -> TlvType {
        match self {
            Tlv::ChassisId(_) => TlvType::ChassisId,
            Tlv::EndOfLldpdu(_) => TlvType::EndOfLLDPDU,
            Tlv::ManagementAddress(_) => TlvType::ManagementAddress,
            Tlv::OrganizationallySpecific(_) => TlvType::OrganizationallySpecific,
            Tlv::PortId(_) => TlvType::PortId,
            Tlv::PortDescription(_) => TlvType::PortDescription,
            Tlv::SystemDescription(_) => TlvType::SystemDescription,
            Tlv::SystemName(_) => TlvType::SystemName,
            Tlv::SystemCapabilities(_) => TlvType::SystemCapabilities,
            Tlv::Ttl(_) => TlvType::Ttl,
        }
    }

    /// Return the byte representation of the TLV, header included.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Tlv::ChassisId(tlv) => tlv.bytes(),
            Tlv::EndOfLldpdu(tlv) => tlv.bytes(),
            Tlv::ManagementAddress(tlv) => tlv.bytes(),
            Tlv::OrganizationallySpecific(tlv) => tlv.bytes(),
            Tlv::PortId(tlv) => tlv.bytes(),
            Tlv::PortDescription(tlv) => tlv.bytes(),
            Tlv::SystemDescription(tlv) => tlv.bytes(),
            Tlv::SystemName(tlv) => tlv.bytes(),
            Tlv::SystemCapabilities(tlv) => tlv.bytes(),
            Tlv::Ttl(tlv) => tlv.bytes(),
        }
    }

    /// Decode one TLV (header and payload) from the front of `bytes`.
    ///
    /// Returns the parsed TLV together with the number of octets consumed,
    /// so callers can continue decoding the remainder of a buffer.
    pub fn decode(bytes: &[u8]) -> Result<(Tlv, usize), TlvError> {
        let (tlv_type, len) = header::decode(bytes)?;
        let payload = &bytes[2..2 + len];
        let consumed = 2 + len;
        let tlv = match tlv_type {
            TlvType::EndOfLLDPDU => Tlv::EndOfLldpdu(EndOfLLDPDUTLV::decode(payload)?),
            TlvType::ChassisId => Tlv::ChassisId(ChassisIdTLV::decode(payload)?),
            TlvType::PortId => Tlv::PortId(PortIdTLV::decode(payload)?),
            TlvType::Ttl => Tlv::Ttl(TtlTLV::decode(payload)?),
            TlvType::PortDescription => Tlv::PortDescription(PortDescriptionTLV::decode(payload)?),
            TlvType::SystemName => Tlv::SystemName(SystemNameTLV::decode(payload)?),
            TlvType::SystemDescription => {
                Tlv::SystemDescription(SystemDescriptionTLV::decode(payload)?)
            }
            TlvType::SystemCapabilities => {
                Tlv::SystemCapabilities(SystemCapabilitiesTLV::decode(payload)?)
            }
            TlvType::ManagementAddress => {
                Tlv::ManagementAddress(ManagementAddressTLV::decode(payload)?)
            }
            TlvType::OrganizationallySpecific => {
                Tlv::OrganizationallySpecific(OrganizationallySpecificTLV::decode(payload)?)
            }
        };
        Ok((tlv, consumed))
    }
}
