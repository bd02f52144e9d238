//! The embed pass: header plus payload into a copy of the carrier.
//!
//! Embedding never mutates its input. The stego bytes come back together with
//! the PSNR over the slot components, so callers get the fidelity cost of the
//! chosen depth without a second pass.

use log::{debug, info};

use crate::bits::FieldIter;
use crate::capacity;
use crate::cipher;
use crate::error::Mp3StegoError;
use crate::options::Settings;
use crate::payload::encode_header;
use crate::plan::EmbeddingPlan;
use crate::psnr::psnr;
use crate::result::Result;
use crate::slots::SlotMap;

/// Result of a successful embed pass.
#[derive(Debug)]
pub struct EmbedResult {
    /// The carrier with header and payload written into its slots.
    pub stego: Vec<u8>,
    /// PSNR between the original and modified slot components, in dB.
    /// Positive infinity when no slot byte actually changed.
    pub psnr_db: f64,
}

/// Embed `payload` into a copy of `carrier` under `settings`.
pub fn embed(carrier: &[u8], payload: &[u8], settings: &Settings) -> Result<EmbedResult> {
    settings.validate()?;
    let bits = settings.bits_per_slot;

    let slots = SlotMap::build(carrier)?;
    let cap = capacity::evaluate(slots.len(), bits, Some(payload.len()));
    if cap.fits != Some(true) {
        return Err(Mp3StegoError::PayloadTooLarge {
            needed: payload.len(),
            available: cap.usable_payload_bytes,
        });
    }

    let header = encode_header(payload.len() as u32, settings);
    let body = if settings.cipher_enabled {
        cipher::encrypt(payload, &settings.key)
    } else {
        payload.to_vec()
    };

    // Header and payload form one contiguous bit stream, zero-padded only in
    // its final partial field. A payload that passed the capacity gate
    // therefore always has enough slots; the remaining failure mode is a
    // carrier too small for even the bare header.
    let mut block = header.to_vec();
    block.extend_from_slice(&body);
    let fields = FieldIter::new(&block, bits);
    let needed = fields.field_count();
    if needed > slots.len() {
        return Err(Mp3StegoError::CarrierTooSmall {
            needed,
            available: slots.len(),
        });
    }
    debug!(
        "embedding {} payload bytes into {} of {} slots at {} bits per slot",
        payload.len(),
        needed,
        slots.len(),
        bits
    );

    let plan = EmbeddingPlan::new(slots.len(), &settings.key)?;
    let mut stego = carrier.to_vec();
    for (i, field) in fields.enumerate() {
        slots.write(&mut stego, plan.slot(i), bits, field);
    }

    let psnr_db = psnr(&slots.components(carrier), &slots.components(&stego))?;
    info!("embedded {} bytes, psnr {psnr_db:.2} dB", payload.len());

    Ok(EmbedResult { stego, psnr_db })
}
