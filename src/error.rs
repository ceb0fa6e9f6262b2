use thiserror::Error;

/// Failures encountered while decoding a single TLV from wire bytes.
///
/// Construction-time misuse (e.g. a MAC identifier with the wrong number of
/// octets) is a programmer error and panics instead; these variants are only
/// produced by the `decode` paths that run over untrusted bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TlvError {
    #[error("TLV header is shorter than 2 octets")]
    ShortHeader,
    #[error("TLV payload is shorter than its declared length")]
    ShortPayload,
    #[error("unrecognized TLV type {0}")]
    UnknownType(u8),
    #[error("unrecognized identifier subtype {0}")]
    BadSubtype(u8),
    #[error("payload length is inconsistent with its subtype")]
    BadLength,
    #[error("payload is not valid UTF-8")]
    BadUtf8,
    #[error("unrecognized network address family")]
    BadAddressFamily,
    #[error("enabled capabilities are not a subset of supported capabilities")]
    CapabilityMismatch,
}

/// Failures raised while folding a TLV into an in-progress LLDPDU.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("LLDPDU already contains this singleton TLV")]
    DuplicateSingleton,
    #[error("mandatory Chassis-ID/Port-ID/TTL prefix is not yet complete")]
    MissingPrerequisite,
    #[error("cannot append a TLV after EndOfLLDPDU")]
    RecordAfterEnd,
    #[error("LLDPDU would exceed the 1500 octet size limit")]
    SizeExceeded,
}

/// Failures from decoding a complete LLDPDU, wrapping either layer below it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LldpduError {
    #[error(transparent)]
    Tlv(#[from] TlvError),
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// Failures from interpreting a raw Ethernet frame as an LLDP carrier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame is shorter than an Ethernet header")]
    ShortFrame,
    #[error("destination is not an LLDP multicast address")]
    WrongDestination,
    #[error("frame originated from this agent")]
    SelfOrigin,
    #[error("ethertype is not 0x88CC")]
    WrongEthertype,
}

/// Failures surfaced by the injected [`crate::link::Link`] implementation.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("I/O error on link: {0}")]
    Io(#[from] std::io::Error),
    #[error("no usable datalink channel for this interface")]
    UnsupportedChannel,
    #[error("interface {0} was not found")]
    NoSuchInterface(String),
}
