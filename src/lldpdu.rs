use crate::error::{AssemblyError, LldpduError};
use crate::tlv::{Tlv, TlvType};
use std::fmt::Display;

/// Maximum size, in octets, of an LLDPDU. An LLDPDU has to fit inside one
/// Ethernet frame and cannot be split.
const MAX_LLDPDU_SIZE: usize = 1500;

/// LLDP Data Unit
///
/// The LLDP Data Unit contains an ordered sequence of TLVs, three mandatory TLVs followed by zero or more optional TLVs
/// plus an End Of LLDPDU TLV.
///
/// Optional TLVs may be inserted in any order.
///
/// An LLDPDU has to fit inside one Ethernet frame and cannot be split.
///
/// LLDPDU Format:
///
///     +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-...-+-+-+-+-+-+-+-+
///     |                 |                 |                 |                                 |
///     | Chassis ID TLV  |   Port ID TLV   |     TTL TLV     |         (Optional TLVs)         |
///     |                 |                 |                 |                                 |
///     +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-...-+-+-+-+-+-+-+-+
#[derive(Debug, Clone, Default)]
pub struct Lldpdu {
    tlvs: Vec<Tlv>,
    ended: bool,
}

impl Display for Lldpdu {
    /// Write a printable representation of the LLDPDU
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.tlvs.iter().map(|tlv| tlv.to_string()).collect();
        write!(f, "LLDPDU({})", rendered.join(", "))
    }
}

impl Lldpdu {
    fn has(&self, tlv_type: TlvType) -> bool {
        self.tlvs.iter().any(|tlv| tlv.get_type() == tlv_type)
    }

    fn size(&self) -> usize {
        self.tlvs.iter().map(|tlv| tlv.bytes().len()).sum()
    }

    /// Create an LLDPDU instance from raw bytes.
    ///
    /// Stops at the first EndOfLLDPDU TLV, if any; otherwise consumes the
    /// whole buffer. Every consumed TLV is folded into the LLDPDU through
    /// [`Lldpdu::append`], so the usual structural invariants apply.
    pub fn decode(data: &[u8]) -> Result<Lldpdu, LldpduError> {
        let mut lldpdu = Lldpdu::default();
        let mut idx = 0;
        while idx < data.len() {
            let (tlv, consumed) = Tlv::decode(&data[idx..])?;
            let is_end = matches!(tlv, Tlv::EndOfLldpdu(_));
            lldpdu.append(tlv)?;
            idx += consumed;
            if is_end {
                break;
            }
        }
        Ok(lldpdu)
    }

    /// Create an LLDPDU instance from raw bytes.
    ///
    /// Panics if a parsed TLV is of unknown type, or if the resulting sequence
    /// violates the structural invariants checked by [`Lldpdu::append`].
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::decode(data).expect("malformed LLDPDU bytes")
    }

    /// Constructor
    ///
    /// Creates a `Lldpdu`, initialized with [Tlv]s from `init_tlvs`.
    ///
    /// Panics if appending any of `init_tlvs` would violate the LLDPDU's
    /// structural invariants.
    pub fn new(init_tlvs: Vec<Tlv>) -> Lldpdu {
        let mut lldpdu = Lldpdu::default();
        for tlv in init_tlvs {
            lldpdu
                .append(tlv)
                .expect("invalid LLDPDU TLV sequence");
        }
        lldpdu
    }

    /// Append `tlv` to the LLDPDU.
    ///
    /// Chassis ID, Port ID and TTL must appear exactly once each, in that
    /// order, before anything else. No TLV may follow an EndOfLLDPDU TLV, and
    /// the LLDPDU as a whole must not exceed 1500 octets.
    pub fn append(&mut self, tlv: Tlv) -> Result<(), AssemblyError> {
        if self.ended {
            return Err(AssemblyError::RecordAfterEnd);
        }
        if self.size() + tlv.bytes().len() > MAX_LLDPDU_SIZE {
            return Err(AssemblyError::SizeExceeded);
        }

        match tlv.get_type() {
            TlvType::ChassisId => {
                if self.has(TlvType::ChassisId) {
                    return Err(AssemblyError::DuplicateSingleton);
                }
                if !self.tlvs.is_empty() {
                    return Err(AssemblyError::MissingPrerequisite);
                }
            }
            TlvType::PortId => {
                if self.has(TlvType::PortId) {
                    return Err(AssemblyError::DuplicateSingleton);
                }
                if self.tlvs.len() != 1 {
                    return Err(AssemblyError::MissingPrerequisite);
                }
            }
            TlvType::Ttl => {
                if self.has(TlvType::Ttl) {
                    return Err(AssemblyError::DuplicateSingleton);
                }
                if self.tlvs.len() != 2 {
                    return Err(AssemblyError::MissingPrerequisite);
                }
            }
            TlvType::EndOfLLDPDU => {
                if !self.complete() {
                    return Err(AssemblyError::MissingPrerequisite);
                }
            }
            _ => {
                if !self.complete() {
                    return Err(AssemblyError::MissingPrerequisite);
                }
            }
        }

        let is_end = matches!(tlv, Tlv::EndOfLldpdu(_));
        self.tlvs.push(tlv);
        if is_end {
            self.ended = true;
        }
        Ok(())
    }

    /// Determine if the LLDPDU is complete
    ///
    /// An LLDPDU is complete when it includes at least the mandatory TLVs (Chassis ID, Port ID, TTL).
    pub fn complete(&self) -> bool {
        self.tlvs.len() >= 3
    }

    /// Determine if the LLDPDU is valid
    ///
    /// Since [`Lldpdu::append`] enforces the structural invariants on every insertion, any
    /// `Lldpdu` that was built successfully is valid exactly when it is complete.
    pub fn is_valid(&self) -> bool {
        self.complete()
    }

    /// Get the number of TLVs in the LLDPDU
    pub fn len(&self) -> usize {
        self.tlvs.len()
    }

    /// Check if LLDPDU is empty
    pub fn is_empty(&self) -> bool {
        self.tlvs.is_empty()
    }

    /// Get the byte representation of the LLDPDU
    pub fn bytes(&self) -> Vec<u8> {
        self.tlvs.iter().flat_map(|tlv| tlv.bytes()).collect()
    }

    /// Get the TLV at position "item"
    pub fn getitem(&self, item: usize) -> &Tlv {
        &self.tlvs[item]
    }
}
