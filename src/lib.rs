//! Core library for the `lldp-agent` binary: the LLDP TLV codec, the LLDPDU
//! assembler, Ethernet framing, the Link I/O abstraction and the agent loop
//! that ties them together.

pub mod agent;
pub mod config;
pub mod error;
pub mod frame;
pub mod link;
pub mod lldpdu;
pub mod tlv;
