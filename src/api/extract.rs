use crate::error::Mp3StegoError;
use crate::extract::ExtractResult;
use crate::options::Settings;
use crate::result::Result;

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

#[derive(Default, Debug)]
pub struct ExtractApi {
    carrier: Option<Vec<u8>>,
    settings: Settings,
}

impl ExtractApi {
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_carrier(mut self, carrier: &[u8]) -> Self {
        self.carrier = Some(carrier.to_vec());
        self
    }

    pub fn with_bits_per_slot(mut self, bits_per_slot: u8) -> Self {
        self.settings.bits_per_slot = bits_per_slot;
        self
    }

    /// Set the key used at embed time
    pub fn with_key(mut self, key: &[u8]) -> Self {
        self.settings.key = key.to_vec();
        self
    }

    /// Set the key, or assume the sequential order and identity cipher
    /// if `None` is passed
    pub fn use_key(mut self, key: Option<&[u8]>) -> Self {
        self.settings.key = key.map(<[u8]>::to_vec).unwrap_or_default();
        self
    }

    /// Decipher the payload with the key after extraction
    pub fn with_cipher(mut self) -> Self {
        self.settings.cipher_enabled = true;
        self
    }

    pub fn execute(self) -> Result<ExtractResult> {
        let Some(carrier) = self.carrier else {
            return Err(Mp3StegoError::CarrierNotSet);
        };

        crate::extract::extract(&carrier, &self.settings)
    }
}
