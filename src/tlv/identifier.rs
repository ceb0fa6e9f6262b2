//! The identifier payload shared by the Chassis-ID and Port-ID TLVs.
//!
//! Both TLVs carry a one-octet subtype followed by a value whose shape
//! depends on that subtype. Rather than give Chassis-ID and Port-ID their
//! own, slightly divergent subtype tables, this module holds the single
//! table both TLVs decode against.

use crate::error::TlvError;
use std::convert::TryFrom;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum IdSubtype {
    ChassisComponent = 1,
    InterfaceAlias = 2,
    PortComponent = 3,
    MacAddress = 4,
    NetworkAddress = 5,
    InterfaceName = 6,
    Local = 7,
}

impl TryFrom<u8> for IdSubtype {
    type Error = ();

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(IdSubtype::ChassisComponent),
            2 => Ok(IdSubtype::InterfaceAlias),
            3 => Ok(IdSubtype::PortComponent),
            4 => Ok(IdSubtype::MacAddress),
            5 => Ok(IdSubtype::NetworkAddress),
            6 => Ok(IdSubtype::InterfaceName),
            7 => Ok(IdSubtype::Local),
            _ => Err(()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum IdValue {
    Mac(Vec<u8>),
    Network(IpAddr),
    Text(String),
}

/// Panics if `subtype` and `value` disagree about shape (e.g. a MAC subtype
/// whose identifier isn't 6 octets). This is the construction-time
/// counterpart to [`decode`], which never panics.
pub fn validate(subtype: IdSubtype, value: &IdValue) {
    match (subtype, value) {
        (IdSubtype::MacAddress, IdValue::Mac(mac)) => {
            assert_eq!(mac.len(), 6, "MAC identifier must be exactly 6 octets");
        }
        (IdSubtype::NetworkAddress, IdValue::Network(_)) => {}
        (IdSubtype::MacAddress, _) | (IdSubtype::NetworkAddress, _) => {
            panic!("subtype {:?} requires a matching identifier value", subtype)
        }
        (_, IdValue::Text(_)) => {}
        (other, _) => panic!("subtype {:?} requires a text identifier value", other),
    }
}

pub fn len(value: &IdValue) -> usize {
    1 + match value {
        IdValue::Mac(_) => 6,
        IdValue::Network(IpAddr::V4(_)) => 5,
        IdValue::Network(IpAddr::V6(_)) => 17,
        IdValue::Text(s) => s.len(),
    }
}

pub fn encode(subtype: IdSubtype, value: &IdValue) -> Vec<u8> {
    validate(subtype, value);
    let mut out = vec![subtype as u8];
    match value {
        IdValue::Mac(mac) => out.extend_from_slice(mac),
        IdValue::Network(IpAddr::V4(v4)) => {
            out.push(1);
            out.extend_from_slice(&v4.octets());
        }
        IdValue::Network(IpAddr::V6(v6)) => {
            out.push(2);
            out.extend_from_slice(&v6.octets());
        }
        IdValue::Text(s) => out.extend_from_slice(s.as_bytes()),
    }
    out
}

pub fn decode(payload: &[u8]) -> Result<(IdSubtype, IdValue), TlvError> {
    if payload.is_empty() {
        return Err(TlvError::ShortPayload);
    }
    let subtype = IdSubtype::try_from(payload[0]).map_err(|_| TlvError::BadSubtype(payload[0]))?;
    let rest = &payload[1..];
    let value = match subtype {
        IdSubtype::MacAddress => {
            if rest.len() != 6 {
                return Err(TlvError::BadLength);
            }
            IdValue::Mac(rest.to_vec())
        }
        IdSubtype::NetworkAddress => {
            if rest.is_empty() {
                return Err(TlvError::ShortPayload);
            }
            match rest[0] {
                1 => {
                    if rest.len() != 5 {
                        return Err(TlvError::BadLength);
                    }
                    let octets: [u8; 4] = rest[1..5].try_into().unwrap();
                    IdValue::Network(IpAddr::V4(Ipv4Addr::from(octets)))
                }
                2 => {
                    if rest.len() != 17 {
                        return Err(TlvError::BadLength);
                    }
                    let octets: [u8; 16] = rest[1..17].try_into().unwrap();
                    IdValue::Network(IpAddr::V6(Ipv6Addr::from(octets)))
                }
                _ => return Err(TlvError::BadAddressFamily),
            }
        }
        _ => {
            let s = String::from_utf8(rest.to_vec()).map_err(|_| TlvError::BadUtf8)?;
            IdValue::Text(s)
        }
    };
    Ok((subtype, value))
}

/// Renders the value the way each owning TLV's `Display` impl wants it: a
/// MAC as lowercase colon-separated hex, a network address via its own
/// `Display`, text verbatim.
pub fn display_value(value: &IdValue) -> String {
    match value {
        IdValue::Mac(mac) => mac
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(":"),
        IdValue::Network(ip) => ip.to_string(),
        IdValue::Text(s) => s.clone(),
    }
}
