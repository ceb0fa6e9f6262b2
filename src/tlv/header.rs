//! Shared two-octet TLV header: a 7-bit type tag and a 9-bit length, packed
//! big-endian as `TTTTTTTL LLLLLLLL`. Every variant in [`crate::tlv::Tlv`]
//! encodes/decodes its header through these two functions instead of
//! repeating the bit-twiddling per file.

use crate::error::TlvError;
use crate::tlv::TlvType;
use std::convert::TryFrom;

pub fn encode(tlv_type: TlvType, payload_len: usize) -> [u8; 2] {
    let word = ((tlv_type as u16) << 9) | (payload_len as u16 & 0x01FF);
    word.to_be_bytes()
}

/// Returns the TLV type and declared payload length, having checked that
/// `bytes` actually contains that many payload octets after the header.
pub fn decode(bytes: &[u8]) -> Result<(TlvType, usize), TlvError> {
    if bytes.len() < 2 {
        return Err(TlvError::ShortHeader);
    }
    let word = u16::from_be_bytes([bytes[0], bytes[1]]);
    let type_tag = (word >> 9) as u8;
    let length = (word & 0x01FF) as usize;
    let tlv_type = TlvType::try_from(type_tag).map_err(|_| TlvError::UnknownType(type_tag))?;
    if bytes.len() < 2 + length {
        return Err(TlvError::ShortPayload);
    }
    Ok((tlv_type, length))
}
