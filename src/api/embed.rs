use crate::embed::EmbedResult;
use crate::error::Mp3StegoError;
use crate::options::Settings;
use crate::result::Result;

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

#[derive(Default, Debug)]
pub struct EmbedApi {
    carrier: Option<Vec<u8>>,
    payload: Option<Vec<u8>>,
    settings: Settings,
}

impl EmbedApi {
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_carrier(mut self, carrier: &[u8]) -> Self {
        self.carrier = Some(carrier.to_vec());
        self
    }

    pub fn with_payload(mut self, payload: &[u8]) -> Self {
        self.payload = Some(payload.to_vec());
        self
    }

    pub fn with_bits_per_slot(mut self, bits_per_slot: u8) -> Self {
        self.settings.bits_per_slot = bits_per_slot;
        self
    }

    /// Set the key for the slot order and the optional cipher
    pub fn with_key(mut self, key: &[u8]) -> Self {
        self.settings.key = key.to_vec();
        self
    }

    /// Set the key, or keep the sequential order and identity cipher
    /// if `None` is passed
    pub fn use_key(mut self, key: Option<&[u8]>) -> Self {
        self.settings.key = key.map(<[u8]>::to_vec).unwrap_or_default();
        self
    }

    /// Cipher the payload with the key before embedding
    pub fn with_cipher(mut self) -> Self {
        self.settings.cipher_enabled = true;
        self
    }

    pub fn execute(self) -> Result<EmbedResult> {
        let Some(carrier) = self.carrier else {
            return Err(Mp3StegoError::CarrierNotSet);
        };
        let Some(payload) = self.payload else {
            return Err(Mp3StegoError::MissingPayload);
        };

        crate::embed::embed(&carrier, &payload, &self.settings)
    }
}
