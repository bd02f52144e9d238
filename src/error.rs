use thiserror::Error;

#[derive(Error, Debug)]
pub enum Mp3StegoError {
    /// Represents a carrier that contains no usable MPEG audio frames
    #[error("No MPEG audio frames found in carrier")]
    NoAudioFrames,

    /// Represents a bits-per-slot value outside the supported range
    #[error("Unsupported bits per slot: {0}, supported range is 1..=4")]
    UnsupportedBitsPerSlot(u8),

    /// Represents a payload that exceeds the usable capacity of the carrier
    #[error("Payload of {needed} bytes exceeds the usable capacity of {available} bytes")]
    PayloadTooLarge { needed: usize, available: usize },

    /// Represents a carrier whose slot supply cannot hold the planned header and payload
    #[error("Embedding plan needs {needed} slots but the carrier provides only {available}")]
    CarrierTooSmall { needed: usize, available: usize },

    /// Represents a carrier with more slots than the plan's 32-bit index space
    #[error("Carrier provides {0} slots, exceeding the supported maximum of 4294967295")]
    CarrierTooLarge(usize),

    /// Represents a missing header magic. Either the carrier was never embedded
    /// into, or the key does not match the embed-time key
    #[error("No embedded header found; the carrier may hold no payload or the key is wrong")]
    HeaderNotFound,

    /// Represents a header checksum mismatch, most often caused by a wrong key
    /// or wrong settings at extraction time
    #[error("Header checksum mismatch; the key or settings likely differ from embed time")]
    HeaderChecksum,

    /// Represents an unsupported header format version, for example data written
    /// by a future revision of the engine
    #[error("Unsupported header format version: {0}")]
    UnsupportedHeaderVersion(u8),

    /// Represents a carrier embedded with a different bits-per-slot setting
    #[error("Header was embedded with {embedded} bits per slot, extraction requested {requested}")]
    BitsPerSlotMismatch { embedded: u8, requested: u8 },

    /// Represents a carrier embedded with a different cipher setting
    #[error("Header cipher flag is {embedded}, extraction requested {requested}")]
    CipherFlagMismatch { embedded: bool, requested: bool },

    /// Represents a decoded payload length that cannot fit the carrier,
    /// a strong signal of wrong key or settings rather than a real payload
    #[error("Declared payload length of {declared} bytes exceeds the usable capacity of {usable} bytes")]
    ImplausibleLength { declared: usize, usable: usize },

    /// Represents an internal invariant violation between planned and read slots
    #[error("Slot plan length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Represents two component streams of different lengths handed to the fidelity metric
    #[error("Component streams differ in length: {left} vs {right}")]
    SampleLengthMismatch { left: usize, right: usize },

    /// Represents an empty component stream handed to the fidelity metric
    #[error("Component stream is empty")]
    EmptySampleStream,

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No payload set")]
    MissingPayload,
}
