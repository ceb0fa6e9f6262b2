use crate::error::TlvError;
use crate::tlv::header;
use crate::tlv::identifier::{self, IdSubtype, IdValue};
use crate::tlv::TlvType;

use std::fmt::Display;

/// Chassis ID TLV
///
/// The chassis ID TLV identifies the chassis (i.e. device) running the LLDP agent.
///
/// The chassis ID TLV is mandatory and MUST be the first TLV in the LLDPDU.
/// Each LLDPDU MUST contain one, and only one, Chassis ID TLV.
///
/// # TLV Format:
///
///      0                   1                   2
///      0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6
///     +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+...+-+-+-+
///     |             |                 |               |               |
///     |      1      |      Length     |    Subtype    |   Chassis ID  |
///     |             |                 |               |               |
///     +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+...+-+-+-+
///
///                                                        1 - 255 byte
///
/// Subtype and value share the identifier table documented in
/// [`crate::tlv::identifier`].
pub use identifier::IdSubtype as ChassisIdSubType;
pub use identifier::IdValue as ChassisIdValue;

#[derive(Debug, Clone, PartialEq)]
pub struct ChassisIdTLV {
    pub tlv_type: TlvType,
    pub subtype: ChassisIdSubType,
    pub value: ChassisIdValue,
}

impl Display for ChassisIdTLV {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ChassisIdTLV({}, \"{}\")",
            self.subtype as u8,
            identifier::display_value(&self.value)
        )
    }
}

impl ChassisIdTLV {
    /// Constructor. Panics if `id`'s shape does not match `subtype`.
    pub fn new(subtype: ChassisIdSubType, id: ChassisIdValue) -> ChassisIdTLV {
        identifier::validate(subtype, &id);
        ChassisIdTLV {
            tlv_type: TlvType::ChassisId,
            subtype,
            value: id,
        }
    }

    pub fn decode(payload: &[u8]) -> Result<ChassisIdTLV, TlvError> {
        let (subtype, value) = identifier::decode(payload)?;
        Ok(ChassisIdTLV {
            tlv_type: TlvType::ChassisId,
            subtype,
            value,
        })
    }

    /// Create a TLV instance from raw bytes (header + payload).
    ///
    /// Panics if the provided TLV contains errors.
    pub fn new_from_bytes(bytes: &[u8]) -> ChassisIdTLV {
        let (tlv_type, len) = header::decode(bytes).expect("malformed chassis id header");
        assert_eq!(tlv_type, TlvType::ChassisId, "not a chassis id TLV");
        Self::decode(&bytes[2..2 + len]).expect("malformed chassis id payload")
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    fn set_up() -> (ChassisIdTLV, ChassisIdSubType, ChassisIdValue) {
        let value: ChassisIdValue = ChassisIdValue::Text(String::from("Terok Nor"));
        let subtype: ChassisIdSubType = ChassisIdSubType::Local;
        (ChassisIdTLV::new(subtype, value.clone()), subtype, value)
    }

    #[test]
    fn test_type() {
        let (cidtlv, _, _) = set_up();
        assert_eq!(cidtlv.tlv_type as u8, TlvType::ChassisId as u8);
        assert_eq!(cidtlv.tlv_type as u8, 1);
    }

    #[test]
    fn test_length() {
        let (cidtlv, _, value) = set_up();
        match value {
            ChassisIdValue::Text(s) => assert_eq!(cidtlv.len(), s.len() + 1),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_value() {
        let (cidtlv, _, value) = set_up();
        let value_str = match value {
            ChassisIdValue::Text(s) => s,
            _ => unreachable!(),
        };
        match cidtlv.value {
            ChassisIdValue::Text(s) => assert_eq!(s, value_str),
            v => panic!("expected Text, got {:?}", v),
        }
    }

    #[test]
    fn test_subtype() {
        let (cidtlv, subtype, _) = set_up();
        assert_eq!(cidtlv.subtype as u8, subtype as u8);
    }

    #[test]
    fn test_generic_subtypes() {
        let value_string = "Terok Nor";
        let value = ChassisIdValue::Text(String::from(value_string));
        for subtype in [
            ChassisIdSubType::ChassisComponent,
            ChassisIdSubType::InterfaceAlias,
            ChassisIdSubType::PortComponent,
            ChassisIdSubType::InterfaceName,
            ChassisIdSubType::Local,
        ] {
            let tlv = ChassisIdTLV::new(subtype, value.clone());
            assert_eq!(tlv.subtype as u8, subtype as u8);
            match tlv.value {
                ChassisIdValue::Text(s) => assert_eq!(s, value_string),
                v => panic!("expected Text, got {:?}", v),
            }
        }
    }

    #[test]
    fn test_mac_subtype_dump() {
        let tlv = ChassisIdTLV::new(
            ChassisIdSubType::MacAddress,
            ChassisIdValue::Mac(b"\x00\x22\x12\xAA\xBB\xCC".to_vec()),
        );
        assert_eq!(
            tlv.bytes(),
            b"\x02\x07\x04\x00\x22\x12\xAA\xBB\xCC".to_vec()
        );
    }

    #[test]
    fn test_mac_subtype_load() {
        let tlv = ChassisIdTLV::new_from_bytes(b"\x02\x07\x04\x00\x22\x12\xAA\xBB\xCC".as_ref());
        assert_eq!(tlv.subtype as u8, ChassisIdSubType::MacAddress as u8);
        match tlv.value {
            ChassisIdValue::Mac(mac) => assert_eq!(mac, b"\x00\x22\x12\xAA\xBB\xCC".to_vec()),
            v => panic!("expected MAC, got {:?}", v),
        }
    }

    #[test]
    fn test_address_subtype_ipv4_dump() {
        let value: Ipv4Addr = "192.0.2.100".parse().unwrap();
        let tlv = ChassisIdTLV::new(
            ChassisIdSubType::NetworkAddress,
            ChassisIdValue::Network(IpAddr::V4(value)),
        );
        assert_eq!(tlv.bytes(), b"\x02\x06\x05\x01\xc0\x00\x02\x64".to_vec());
    }

    #[test]
    fn test_address_subtype_ipv6_dump() {
        let value: Ipv6Addr = "20db::1".parse().unwrap();
        let tlv = ChassisIdTLV::new(
            ChassisIdSubType::NetworkAddress,
            ChassisIdValue::Network(IpAddr::V6(value)),
        );
        assert_eq!(
            tlv.bytes(),
            b"\x02\x12\x05\x02\x20\xdb\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x01"
                .to_vec()
        );
    }

    #[test]
    fn test_load_generic() {
        let tlv = ChassisIdTLV::new_from_bytes(b"\x02\x09\x07Unittest".as_ref());
        assert_eq!(tlv.subtype as u8, ChassisIdSubType::Local as u8);
        match tlv.value {
            ChassisIdValue::Text(s) => assert_eq!(s, String::from("Unittest")),
            v => panic!("expected Text, got {:?}", v),
        }
    }

    #[test]
    fn test_load_generic_unicode() {
        let tlv = ChassisIdTLV::new_from_bytes(
            b"\x02\x0d\x07\xe5\x8d\x95\xe5\x85\x83\xe6\xb5\x8b\xe8\xaf\x95".as_ref(),
        );
        assert_eq!(tlv.subtype as u8, ChassisIdSubType::Local as u8);
        match tlv.value {
            ChassisIdValue::Text(s) => assert_eq!(s, String::from("单元测试")),
            v => panic!("expected Text, got {:?}", v),
        }
    }

    #[test]
    fn test_load_mac() {
        let tlv = ChassisIdTLV::new_from_bytes(b"\x02\x07\x04\xc8\xbc\xc8\x94\x92\xca".as_ref());
        assert_eq!(tlv.subtype as u8, ChassisIdSubType::MacAddress as u8);
        match tlv.value {
            ChassisIdValue::Mac(mac) => assert_eq!(mac, b"\xc8\xbc\xc8\x94\x92\xca".to_vec()),
            v => panic!("expected MAC, got {:?}", v),
        }
    }

    #[test]
    fn test_load_ipv4() {
        let tlv = ChassisIdTLV::new_from_bytes(b"\x02\x06\x05\x01\xc0\x00\x02\x0e".as_ref());
        assert_eq!(tlv.subtype as u8, ChassisIdSubType::NetworkAddress as u8);
        match tlv.value {
            ChassisIdValue::Network(ip) => match ip {
                IpAddr::V4(ip) => assert_eq!(ip.octets(), [192, 0, 2, 14]),
                addr => panic!("expected Ipv4 address, got {:?}", addr),
            },
            v => panic!("expected Network, got {:?}", v),
        };
    }

    #[test]
    fn test_load_ipv6() {
        let tlv = ChassisIdTLV::new_from_bytes(
            b"\x02\x12\x05\x02\x20\x01\x00\xdb\x00\x00\x00\x00\x00\x00\x00\x00\x00\xff\x00\x12"
                .as_ref(),
        );
        assert_eq!(tlv.subtype as u8, ChassisIdSubType::NetworkAddress as u8);
        match tlv.value {
            ChassisIdValue::Network(ip) => match ip {
                IpAddr::V6(ip) => {
                    let parsed: Ipv6Addr = "2001:db::ff:12".parse().unwrap();
                    assert_eq!(ip.octets(), parsed.octets());
                }
                addr => panic!("expected Ipv6 address, got {:?}", addr),
            },
            v => panic!("expected Network, got {:?}", v),
        };
    }

    #[test]
    #[should_panic]
    fn test_load_invalid_generic() {
        ChassisIdTLV::new_from_bytes(b"\x02\x0a\x07\x55\x6e\x69\x74\x74\x65\x73\x74".as_ref());
    }

    #[test]
    #[should_panic]
    fn test_load_invalid_mac() {
        ChassisIdTLV::new_from_bytes(b"\x02\x08\x04\xc8\xbc\xc8\x94\x92\xca\x11".as_ref());
    }

    #[test]
    #[should_panic]
    fn test_load_invalid_ipv4() {
        ChassisIdTLV::new_from_bytes(b"\x02\x04\x05\xc0\x00\x02".as_ref());
    }

    #[test]
    #[should_panic]
    fn test_load_invalid_ipv6() {
        ChassisIdTLV::new_from_bytes(
            b"\x02\x10\x05\x20\x01\x00\xdb\x00\x00\x00\x00\x00\x00\x00\x00\x00\xff\x00".as_ref(),
        );
    }

    #[test]
    fn test_display1() {
        let tlv = ChassisIdTLV::new(
            ChassisIdSubType::Local,
            ChassisIdValue::Text("Pablo's Computer".into()),
        );
        assert_eq!(format!("{}", tlv), "ChassisIdTLV(7, \"Pablo's Computer\")")
    }

    #[test]
    fn test_display2() {
        let tlv = ChassisIdTLV::new(
            ChassisIdSubType::MacAddress,
            ChassisIdValue::Mac(vec![0x66, 0x6F, 0x6F, 0x62, 0x61, 0x72]),
        );
        let s = format!("{}", tlv);
        let addr = s.get(17..34).unwrap();
        assert_eq!(addr.to_lowercase(), "66:6f:6f:62:61:72");
    }

    #[test]
    fn test_display3() {
        let tlv = ChassisIdTLV::new(
            ChassisIdSubType::NetworkAddress,
            ChassisIdValue::Network(Ipv4Addr::new(127, 0, 0, 1).into()),
        );
        assert_eq!(format!("{}", tlv), "ChassisIdTLV(5, \"127.0.0.1\")")
    }
}
