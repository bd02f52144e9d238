//! Capacity accounting for a carrier at a given bit depth.
//!
//! Capacity is a pure function of the slot count and the bits-per-slot
//! setting. The cipher flag is deliberately not consulted: the cipher is a
//! length-preserving transform, so it changes payload content but never how
//! much of it fits.

use crate::options::validate_bits_per_slot;
use crate::payload::HEADER_SIZE;
use crate::result::Result;
use crate::slots::SlotMap;

/// Capacity metrics for one carrier and one bits-per-slot setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityResult {
    /// Raw embeddable bits: slot count times bits per slot.
    pub capacity_bits: usize,
    /// Raw embeddable bytes, floor of `capacity_bits / 8`.
    pub capacity_bytes: usize,
    /// Fixed header reservation in bytes.
    pub header_size_bytes: usize,
    /// Bytes left for payload after the header reservation.
    pub usable_payload_bytes: usize,
    /// Whether the candidate payload fits, when one was given.
    pub fits: Option<bool>,
}

/// Evaluate capacity for a known slot count.
pub fn evaluate(slot_count: usize, bits_per_slot: u8, candidate: Option<usize>) -> CapacityResult {
    let capacity_bits = slot_count * usize::from(bits_per_slot);
    let capacity_bytes = capacity_bits / 8;
    let usable_payload_bytes = capacity_bytes.saturating_sub(HEADER_SIZE);

    CapacityResult {
        capacity_bits,
        capacity_bytes,
        header_size_bytes: HEADER_SIZE,
        usable_payload_bytes,
        fits: candidate.map(|p| p <= usable_payload_bytes),
    }
}

/// Report how many payload bytes the carrier can hold at the given depth,
/// and optionally whether a candidate payload size fits.
///
/// A carrier that fails to parse is a structural error, not a capacity of
/// zero.
pub fn capacity(
    carrier: &[u8],
    bits_per_slot: u8,
    candidate: Option<usize>,
) -> Result<CapacityResult> {
    validate_bits_per_slot(bits_per_slot)?;
    let slots = SlotMap::build(carrier)?;

    Ok(evaluate(slots.len(), bits_per_slot, candidate))
}
