//! Ethernet II framing for LLDPDUs.
//!
//! An LLDPDU never travels alone: it is always the payload of an Ethernet
//! frame addressed to one of the three LLDP multicast groups, carrying
//! ethertype `0x88CC`. This module owns that envelope so the agent loop
//! doesn't have to reach into `pnet`'s packet types directly.

use crate::error::FrameError;
use pnet::datalink::MacAddr;
use pnet::packet::ethernet::{EtherTypes, EthernetPacket, MutableEthernetPacket};
use pnet::packet::Packet;

pub const ETHERNET_HEADER_LEN: usize = 14;

/// Nearest bridge. Accepted on receive, never used as a transmit destination.
pub const MULTICAST_NEAREST_BRIDGE: MacAddr = MacAddr(0x01, 0x80, 0xc2, 0x00, 0x00, 0x00);
/// Nearest non-TPMR bridge.
pub const MULTICAST_NEAREST_NON_TPMR_BRIDGE: MacAddr = MacAddr(0x01, 0x80, 0xc2, 0x00, 0x00, 0x03);
/// Nearest customer bridge. The only destination this crate transmits to.
pub const MULTICAST_NEAREST_CUSTOMER_BRIDGE: MacAddr = MacAddr(0x01, 0x80, 0xc2, 0x00, 0x00, 0x0e);

fn accepted_destinations() -> [MacAddr; 3] {
    [
        MULTICAST_NEAREST_BRIDGE,
        MULTICAST_NEAREST_NON_TPMR_BRIDGE,
        MULTICAST_NEAREST_CUSTOMER_BRIDGE,
    ]
}

/// An Ethernet frame that has passed destination/source/ethertype validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFrame {
    pub source: MacAddr,
    pub destination: MacAddr,
    pub payload: Vec<u8>,
}

/// Wrap `payload` (an encoded LLDPDU) in an Ethernet II header addressed to
/// the nearest customer bridge multicast group.
pub fn encode(source: MacAddr, payload: &[u8]) -> Vec<u8> {
    let mut header = [0u8; ETHERNET_HEADER_LEN];
    {
        let mut eth = MutableEthernetPacket::new(&mut header[..])
            .expect("header buffer is exactly ETHERNET_HEADER_LEN octets");
        eth.set_destination(MULTICAST_NEAREST_CUSTOMER_BRIDGE);
        eth.set_source(source);
        eth.set_ethertype(EtherTypes::Lldp);
    }
    let mut frame = header.to_vec();
    frame.extend_from_slice(payload);
    frame
}

/// Validate and unwrap an Ethernet frame received on the link.
///
/// Rejects frames that are too short, not addressed to an LLDP multicast
/// group, that originated from `local_mac` (self-loop suppression), or that
/// do not carry ethertype `0x88CC`.
pub fn decode(bytes: &[u8], local_mac: MacAddr) -> Result<ParsedFrame, FrameError> {
    let packet = EthernetPacket::new(bytes).ok_or(FrameError::ShortFrame)?;

    let destination = packet.get_destination();
    if !accepted_destinations().contains(&destination) {
        return Err(FrameError::WrongDestination);
    }

    let source = packet.get_source();
    if source == local_mac {
        return Err(FrameError::SelfOrigin);
    }

    if packet.get_ethertype() != EtherTypes::Lldp {
        return Err(FrameError::WrongEthertype);
    }

    Ok(ParsedFrame {
        source,
        destination,
        payload: packet.payload().to_vec(),
    })
}
