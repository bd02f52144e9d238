use crate::capacity::CapacityResult;
use crate::error::Mp3StegoError;
use crate::options::Settings;
use crate::result::Result;

pub fn prepare() -> CapacityApi {
    CapacityApi::default()
}

#[derive(Default, Debug)]
pub struct CapacityApi {
    carrier: Option<Vec<u8>>,
    candidate: Option<usize>,
    settings: Settings,
}

impl CapacityApi {
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

    /// Also answer whether a payload of this size would fit
    pub fn with_candidate_size(mut self, bytes: usize) -> Self {
        self.candidate = Some(bytes);
        self
    }

    pub fn execute(self) -> Result<CapacityResult> {
        let Some(carrier) = self.carrier else {
            return Err(Mp3StegoError::CarrierNotSet);
        };

        crate::capacity::capacity(&carrier, self.settings.bits_per_slot, self.candidate)
    }
}
