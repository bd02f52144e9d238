//! The extract pass: recover an embedded payload from a stego carrier.
//!
//! Extraction mirrors the embed pass exactly: same slot map, same visiting
//! order for the same key, header bits first, payload bits after. The
//! header gates everything; its magic, checksum and settings echo turn a
//! wrong key or wrong settings into a typed error instead of garbage bytes.

use log::debug;

use crate::bits::FieldCollector;
use crate::capacity;
use crate::cipher;
use crate::error::Mp3StegoError;
use crate::options::Settings;
use crate::payload::{decode_header, HEADER_SIZE};
use crate::plan::EmbeddingPlan;
use crate::result::Result;
use crate::slots::SlotMap;

/// Result of a successful extract pass.
#[derive(Debug)]
pub struct ExtractResult {
    /// The recovered payload, deciphered when the cipher was enabled.
    pub payload: Vec<u8>,
}

/// Extract the payload embedded in `carrier` under `settings`.
pub fn extract(carrier: &[u8], settings: &Settings) -> Result<ExtractResult> {
    settings.validate()?;
    let bits = settings.bits_per_slot;

    let slots = SlotMap::build(carrier)?;
    let plan = EmbeddingPlan::new(slots.len(), &settings.key)?;

    let header_fields = (HEADER_SIZE * 8).div_ceil(usize::from(bits));
    if header_fields > slots.len() {
        return Err(Mp3StegoError::CarrierTooSmall {
            needed: header_fields,
            available: slots.len(),
        });
    }

    // First pass: enough fields to cover the header bits. The trailing bits
    // of the last field already belong to the payload; truncation drops them.
    let mut collector = FieldCollector::new(bits);
    for i in 0..header_fields {
        collector.push(slots.read(carrier, plan.slot(i), bits));
    }
    let header = collector.into_bytes(HEADER_SIZE);

    let cap = capacity::evaluate(slots.len(), bits, None);
    let payload_len = decode_header(&header, settings, cap.usable_payload_bytes)? as usize;
    debug!("header declares {payload_len} payload bytes");

    // Second pass: the payload can start mid-field when the depth does not
    // divide the header bit count, so re-collect the whole contiguous block
    // and split it at the header boundary. The plausibility check above
    // bounds the total demand by the slot supply.
    let total_fields = ((HEADER_SIZE + payload_len) * 8).div_ceil(usize::from(bits));
    let mut collector = FieldCollector::new(bits);
    for i in 0..total_fields {
        collector.push(slots.read(carrier, plan.slot(i), bits));
    }
    let mut block = collector.into_bytes(HEADER_SIZE + payload_len);
    let body = block.split_off(HEADER_SIZE);

    let payload = if settings.cipher_enabled {
        cipher::decrypt(&body, &settings.key)
    } else {
        body
    };

    Ok(ExtractResult { payload })
}
