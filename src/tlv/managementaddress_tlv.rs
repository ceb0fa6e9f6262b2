use crate::error::TlvError;
use crate::tlv::{header, TlvType};

use std::convert::TryFrom;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IFNumberingSubtype {
    Unknown = 1,
    IfIndex = 2,
    SystemPort = 3,
}

impl TryFrom<u8> for IFNumberingSubtype {
    type Error = ();

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            x if x == IFNumberingSubtype::Unknown as u8 => Ok(IFNumberingSubtype::Unknown),
            x if x == IFNumberingSubtype::IfIndex as u8 => Ok(IFNumberingSubtype::IfIndex),
            x if x == IFNumberingSubtype::SystemPort as u8 => Ok(IFNumberingSubtype::SystemPort),
            _ => Err(()),
        }
    }
}

/// Management Address TLV
///
/// The Management Address TLV identifies an address associated with the local LLDP agent that may be used to reach
/// higher layer entities to assist discovery by network management, e.g. a web interface for device configuration.
///
/// It is an optional TLV and as such may be included in an LLDPDU zero or more times between
/// the TTL TLV and the End of LLDPDU TLV.
///
/// The "Address String Length" field is one more than the number of address
/// octets (it also counts the one-octet address family that precedes them):
/// 5 for IPv4, 17 for IPv6.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagementAddressTLV {
    pub tlv_type: TlvType,
    pub subtype: IFNumberingSubtype,
    pub value: IpAddr,
    pub interface_number: u32,
    pub oid: Vec<u8>,
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<String>()
}

fn addr_octets(addr: &IpAddr) -> usize {
    match addr {
        IpAddr::V4(_) => 4,
        IpAddr::V6(_) => 16,
    }
}

impl Display for ManagementAddressTLV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ManagementAddressTLV(\"{}\", {}, \"{}\")",
            self.value, self.interface_number, hex(&self.oid)
        )
    }
}

impl ManagementAddressTLV {
    /// Constructor. Panics if `oid` exceeds 128 octets.
    pub fn new(
        address: IpAddr,
        interface_number: u32,
        ifsubtype: IFNumberingSubtype,
        oid: Vec<u8>,
    ) -> ManagementAddressTLV {
        assert!(oid.len() <= 128, "OID exceeds 128 octets");
        ManagementAddressTLV {
            tlv_type: TlvType::ManagementAddress,
            subtype: ifsubtype,
            value: address,
            interface_number,
            oid,
        }
    }

    pub fn decode(payload: &[u8]) -> Result<ManagementAddressTLV, TlvError> {
        if payload.len() < 2 {
            return Err(TlvError::ShortPayload);
        }
        let al = payload[0] as usize;
        if al == 0 || payload.len() < 1 + al {
            return Err(TlvError::ShortPayload);
        }
        let family = payload[1];
        let addr_len = al - 1;
        if payload.len() < 2 + addr_len {
            return Err(TlvError::ShortPayload);
        }
        let address = match family {
            1 => {
                if addr_len != 4 {
                    return Err(TlvError::BadLength);
                }
                let octets: [u8; 4] = payload[2..6].try_into().unwrap();
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            2 => {
                if addr_len != 16 {
                    return Err(TlvError::BadLength);
                }
                let octets: [u8; 16] = payload[2..18].try_into().unwrap();
                IpAddr::V6(Ipv6Addr::from(octets))
            }
            _ => return Err(TlvError::BadAddressFamily),
        };

        let rest = &payload[2 + addr_len..];
        if rest.len() < 6 {
            return Err(TlvError::ShortPayload);
        }
        let subtype = IFNumberingSubtype::try_from(rest[0]).map_err(|_| TlvError::BadSubtype(rest[0]))?;
        let interface_number = u32::from_be_bytes(rest[1..5].try_into().unwrap());
        let oid_len = rest[5] as usize;
        if rest.len() < 6 + oid_len {
            return Err(TlvError::ShortPayload);
        }
        let oid = rest[6..6 + oid_len].to_vec();

        Ok(ManagementAddressTLV {
            tlv_type: TlvType::ManagementAddress,
            subtype,
            value: address,
            interface_number,
            oid,
        })
    }

    /// Create a TLV instance from raw bytes (header + payload).
    ///
    /// Panics if the provided TLV contains errors.
    pub fn new_from_bytes(bytes: &[u8]) -> ManagementAddressTLV {
        let (tlv_type, len) =
            header::decode(bytes).expect("malformed management address header");
        assert_eq!(
            tlv_type,
            TlvType::ManagementAddress,
            "not a management address TLV"
        );
        Self::decode(&bytes[2..2 + len]).expect("malformed management address payload")
    }

    pub fn len(&self) -> usize {
        8 + addr_octets(&self.value) + self.oid.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn bytes(&self) -> Vec<u8> {
        let octets = addr_octets(&self.value);
        let al = (octets + 1) as u8;
        let mut out = header::encode(self.tlv_type, self.len()).to_vec();
        out.push(al);
        match self.value {
            IpAddr::V4(v4) => {
                out.push(1);
                out.extend_from_slice(&v4.octets());
            }
            IpAddr::V6(v6) => {
                out.push(2);
                out.extend_from_slice(&v6.octets());
            }
        }
        out.push(self.subtype as u8);
        out.extend_from_slice(&self.interface_number.to_be_bytes());
        out.push(self.oid.len() as u8);
        out.extend_from_slice(&self.oid);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::{Buf, BufMut};
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn set_up() -> (ManagementAddressTLV, ManagementAddressTLV) {
        let ipv4: Ipv4Addr = "192.0.2.100".parse().unwrap();
        let ipv6: Ipv6Addr = "2001:db::4".parse().unwrap();
        let ifnum = 5;
        let oid = b"\x2b\x06\x01\x04\x01\x82\x37\x15\x14".to_vec();
        let tlv4 = ManagementAddressTLV::new(
            IpAddr::V4(ipv4),
            ifnum,
            IFNumberingSubtype::Unknown,
            oid.clone(),
        );
        let tlv6 =
            ManagementAddressTLV::new(IpAddr::V6(ipv6), ifnum, IFNumberingSubtype::Unknown, oid);
        (tlv4, tlv6)
    }

    #[test]
    fn test_chassisid_type() {
        let (tlv4, tlv6) = set_up();
        assert_eq!(tlv4.tlv_type as u8, TlvType::ManagementAddress as u8);
        assert_eq!(tlv6.tlv_type as u8, TlvType::ManagementAddress as u8);
    }

    #[test]
    fn test_length_v4() {
        let (tlv4, _) = set_up();
        assert_eq!(
            tlv4.len(),
            12 + b"\x2b\x06\x01\x04\x01\x82\x37\x15\x14".to_vec().len()
        );
    }

    #[test]
    fn test_length_v6() {
        let (_, tlv6) = set_up();
        assert_eq!(
            tlv6.len(),
            24 + b"\x2b\x06\x01\x04\x01\x82\x37\x15\x14".to_vec().len()
        );
    }

    #[test]
    fn test_value() {
        let (tlv4, tlv6) = set_up();
        match tlv4.value {
            IpAddr::V4(ip) => assert_eq!(ip.octets(), [192, 0, 2, 100]),
            IpAddr::V6(_) => panic!("Expected IPv4, got IPv6 address"),
        }
        match tlv6.value {
            IpAddr::V4(_) => panic!("Expected IPv6, got IPv4 address"),
            IpAddr::V6(ip) => {
                let parsed: Ipv6Addr = "2001:db::4".parse().unwrap();
                assert_eq!(ip.octets(), parsed.octets());
            }
        }
    }

    #[test]
    fn test_oid() {
        let (tlv4, tlv6) = set_up();
        assert_eq!(tlv4.oid, b"\x2b\x06\x01\x04\x01\x82\x37\x15\x14".to_vec());
        assert_eq!(tlv6.oid, b"\x2b\x06\x01\x04\x01\x82\x37\x15\x14".to_vec());
    }

    #[test]
    fn test_none_oid() {
        let (tlv4, tlv6) = set_up();
        let t1 = ManagementAddressTLV::new(tlv4.value, 5, IFNumberingSubtype::Unknown, vec![]);
        let t2 = ManagementAddressTLV::new(tlv6.value, 5, IFNumberingSubtype::Unknown, vec![]);
        assert_eq!(t1.oid, vec![]);
        assert_eq!(t2.oid, vec![]);
    }

    #[test]
    fn test_dump_v4() {
        let (tlv4, _) = set_up();
        let oid = b"\x2b\x06\x01\x04\x01\x82\x37\x15\x14";
        let ipv4: Ipv4Addr = "192.0.2.100".parse().unwrap();

        let mut bytes = b"\x10".to_vec();
        bytes.put_u8(12 + oid.len() as u8);
        bytes.put(&b"\x05\x01"[..]);
        bytes.put(&ipv4.octets()[..]);
        bytes.put(&b"\x01"[..]);
        bytes.put_u32(5);
        bytes.put_u8(oid.len() as u8);
        bytes.put(&oid[..]);
        assert_eq!(tlv4.bytes(), bytes);

        assert_eq!(
            tlv4.bytes(),
            [16, 21, 5, 1, 192, 0, 2, 100, 1, 0, 0, 0, 5, 9, 43, 6, 1, 4, 1, 130, 55, 21, 20]
                .to_vec()
        );
    }

    #[test]
    fn test_dump_v6() {
        let (_, tlv6) = set_up();
        let oid = b"\x2b\x06\x01\x04\x01\x82\x37\x15\x14";
        let ipv6: Ipv6Addr = "2001:db::4".parse().unwrap();

        let mut bytes = b"\x10".to_vec();
        bytes.put_u8(24 + oid.len() as u8);
        bytes.put(&b"\x11\x02"[..]);
        bytes.put(&ipv6.octets()[..]);
        bytes.put(&b"\x01"[..]);
        bytes.put_u32(5);
        bytes.put_u8(oid.len() as u8);
        bytes.put(&oid[..]);
        assert_eq!(tlv6.bytes(), bytes);

        assert_eq!(
            tlv6.bytes(),
            [
                16, 33, 17, 2, 32, 1, 0, 219, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 1, 0, 0, 0, 5, 9,
                43, 6, 1, 4, 1, 130, 55, 21, 20
            ]
            .to_vec()
        );
    }

    #[test]
    fn test_dump_zero_oid() {
        let ipv4: Ipv4Addr = "192.0.2.42".parse().unwrap();
        let tlv =
            ManagementAddressTLV::new(IpAddr::V4(ipv4), 1, IFNumberingSubtype::SystemPort, vec![]);
        assert_eq!(
            tlv.bytes(),
            b"\x10\x0C\x05\x01\xC0\x00\x02*\x03\x00\x00\x00\x01\x00".to_vec()
        );
    }

    #[test]
    fn test_load_v4() {
        let ipv4: Ipv4Addr = "192.0.2.42".parse().unwrap();

        let tlv = ManagementAddressTLV::new_from_bytes(
            b"\x10\x0D\x05\x01\xC0\x00\x02*\x02\x00\x00\x00\x01\x01\x0A",
        );
        assert_eq!(tlv.tlv_type as u8, TlvType::ManagementAddress as u8);
        assert_eq!(tlv.subtype as u8, IFNumberingSubtype::IfIndex as u8);
        match tlv.value {
            IpAddr::V4(ip) => assert_eq!(ip.octets(), ipv4.octets()),
            IpAddr::V6(_) => panic!("Expected IPv4, got IPv6 address"),
        };
        assert_eq!(tlv.oid, b"\x0A".to_vec());
    }

    #[test]
    fn test_load_v6() {
        let ipv6: Ipv6Addr = "2001:db::42".parse().unwrap();

        let tlv = ManagementAddressTLV::new_from_bytes(
            b"\x10\x19\x11\x02 \x01\x00\xdb\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00B\x02\x00\x00\x00\x01\x01\x0A"
        );
        assert_eq!(tlv.tlv_type as u8, TlvType::ManagementAddress as u8);
        assert_eq!(tlv.subtype as u8, IFNumberingSubtype::IfIndex as u8);
        match tlv.value {
            IpAddr::V4(_) => panic!("Expected IPv6, got IPv4 address"),
            IpAddr::V6(ip) => assert_eq!(ip.octets(), ipv6.octets()),
        };
        assert_eq!(tlv.oid, b"\x0A".to_vec());
    }

    #[test]
    fn test_load_zero_oid() {
        let tlv = ManagementAddressTLV::new_from_bytes(
            b"\x10\x0C\x05\x01\xC0\x00\x02*\x03\x00\x00\x00\x01\x00",
        );
        assert_eq!(tlv.oid, vec![]);
    }

    #[test]
    fn test_load_bad_family() {
        let err = ManagementAddressTLV::decode(b"\x05\x09\xC0\x00\x02*\x02\x00\x00\x00\x01\x01\x0A")
            .unwrap_err();
        assert_eq!(err, TlvError::BadAddressFamily);
    }

    #[test]
    fn test_display_v4() {
        let (tlv, _) = set_up();
        assert_eq!(
            format!("{}", tlv),
            "ManagementAddressTLV(\"192.0.2.100\", 5, \"2B0601040182371514\")"
        )
    }

    #[test]
    fn test_display_v6() {
        let (_, tlv) = set_up();
        assert_eq!(
            format!("{}", tlv),
            "ManagementAddressTLV(\"2001:db::4\", 5, \"2B0601040182371514\")"
        )
    }
}
