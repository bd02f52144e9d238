use crate::error::Mp3StegoError;
use crate::result::Result;

/// Lowest supported bits-per-slot depth.
pub const MIN_BITS_PER_SLOT: u8 = 1;
/// Highest supported bits-per-slot depth. Anything deeper becomes audible.
pub const MAX_BITS_PER_SLOT: u8 = 4;

/// Settings for embedding and extraction.
///
/// All settings are supplied by the caller on every call; the engine keeps no
/// configuration state between calls. Extraction must use the settings of the
/// embed pass, otherwise header validation fails or garbage comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How many low-order bits of each slot are overwritten, within 1..=4.
    /// Influences the capacity directly.
    pub bits_per_slot: u8,

    /// Key for the slot visiting order and the optional cipher.
    /// An empty key means sequential slot order and an identity cipher.
    pub key: Vec<u8>,

    /// If true the payload bytes are cipher-transformed with `key` before
    /// embedding and after extraction. The header always stays in clear.
    pub cipher_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bits_per_slot: 4,
            key: Vec::new(),
            cipher_enabled: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        validate_bits_per_slot(self.bits_per_slot)
    }
}

pub fn validate_bits_per_slot(bits_per_slot: u8) -> Result<()> {
    if !(MIN_BITS_PER_SLOT..=MAX_BITS_PER_SLOT).contains(&bits_per_slot) {
        return Err(Mp3StegoError::UnsupportedBitsPerSlot(bits_per_slot));
    }

    Ok(())
}
