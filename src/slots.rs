//! The slot model over a parsed carrier.
//!
//! A slot is one modifiable byte inside a frame's main data region; its low
//! `bits_per_slot` bits may be overwritten without touching frame headers,
//! side info, or frame boundaries. Slots are collected in stream order, so an
//! embed pass and a later extract pass over the same bytes agree on slot
//! indices. CRC-protected frames contribute no slots, a small margin at both
//! ends of every main data region stays untouched, and the first frame also
//! keeps the scanner's VBR sniff windows pristine so embedding can never
//! fabricate a Xing/Info/VBRI tag and shift the frame walk.

use crate::error::Mp3StegoError;
use crate::mpeg::scan_frames;
use crate::mpeg::stream::vbr_sniff_windows;
use crate::result::Result;

/// Untouched bytes at the start of each main data region.
const START_MARGIN: usize = 2;
/// Untouched bytes at the end of each main data region.
const END_MARGIN: usize = 2;

/// Ordered list of modifiable byte positions in a carrier.
#[derive(Debug)]
pub struct SlotMap {
    positions: Vec<usize>,
}

impl SlotMap {
    /// Parse the carrier and collect its slots.
    ///
    /// Fails with [`Mp3StegoError::NoAudioFrames`] when the byte stream holds
    /// no MPEG audio frames at all; a carrier that parses but yields zero
    /// slots (for example all frames CRC-protected) is not an error here,
    /// the embedder rejects it through its capacity check instead.
    pub fn build(carrier: &[u8]) -> Result<Self> {
        let frames = scan_frames(carrier);
        if frames.is_empty() {
            return Err(Mp3StegoError::NoAudioFrames);
        }

        let mut positions = Vec::new();
        for (idx, frame) in frames.iter().enumerate() {
            if frame.has_crc {
                continue;
            }
            let start = frame.main_start + START_MARGIN;
            let end = frame.main_end.saturating_sub(END_MARGIN);
            if end <= start {
                continue;
            }
            if idx == 0 {
                // the scanner sniffs only the first frame for a VBR tag
                let windows = vbr_sniff_windows(frame);
                positions
                    .extend((start..end).filter(|p| windows.iter().all(|w| !w.contains(p))));
            } else {
                positions.extend(start..end);
            }
        }

        Ok(Self { positions })
    }

    /// Total slot count S.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Read the low `bits` bits of the given slot.
    pub fn read(&self, carrier: &[u8], slot: usize, bits: u8) -> u8 {
        let mask = (1u8 << bits) - 1;
        carrier[self.positions[slot]] & mask
    }

    /// Overwrite the low `bits` bits of the given slot with `field`,
    /// leaving all other bits of the byte untouched.
    pub fn write(&self, carrier: &mut [u8], slot: usize, bits: u8, field: u8) {
        let mask = (1u8 << bits) - 1;
        let byte = &mut carrier[self.positions[slot]];
        *byte = (*byte & !mask) | (field & mask);
    }

    /// The component stream: every slot byte in natural slot order.
    /// This is the sequence the fidelity metric compares.
    pub fn components(&self, carrier: &[u8]) -> Vec<u8> {
        self.positions.iter().map(|&p| carrier[p]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::carrier_with_frames;

    // 417-byte mono frames: 417 - 21 (header + side info) - 4 (margins) = 392;
    // the first frame loses 6 more bytes to the VBR sniff windows
    const FIRST_FRAME_SLOTS: usize = 386;
    const LATER_FRAME_SLOTS: usize = 392;

    #[test]
    fn slot_count_scales_with_frames() {
        let one = SlotMap::build(&carrier_with_frames(1)).unwrap();
        let three = SlotMap::build(&carrier_with_frames(3)).unwrap();
        assert_eq!(one.len(), FIRST_FRAME_SLOTS);
        assert_eq!(three.len(), FIRST_FRAME_SLOTS + 2 * LATER_FRAME_SLOTS);
    }

    #[test]
    fn margins_are_never_writable() {
        let carrier = carrier_with_frames(1);
        let map = SlotMap::build(&carrier).unwrap();
        let mut mutated = carrier.clone();
        for slot in 0..map.len() {
            map.write(&mut mutated, slot, 4, 0x0F);
        }
        // header, side info and the Xing/Info window stay untouched
        assert_eq!(&mutated[..25], &carrier[..25]);
        // VBRI window stays untouched
        assert_eq!(&mutated[36..40], &carrier[36..40]);
        // end margin stays untouched
        assert_eq!(&mutated[415..417], &carrier[415..417]);
    }

    #[test]
    fn saturating_every_slot_cannot_perturb_the_frame_walk() {
        let carrier = carrier_with_frames(2);
        let map = SlotMap::build(&carrier).unwrap();
        let mut mutated = carrier.clone();
        for slot in 0..map.len() {
            map.write(&mut mutated, slot, 4, 0x0F);
        }
        assert_eq!(scan_frames(&mutated), scan_frames(&carrier));
    }

    #[test]
    fn write_touches_only_the_low_bits() {
        let carrier = carrier_with_frames(1);
        let map = SlotMap::build(&carrier).unwrap();
        let mut mutated = carrier.clone();
        for slot in 0..map.len() {
            map.write(&mut mutated, slot, 2, 0b11);
        }
        for (orig, modified) in carrier.iter().zip(mutated.iter()) {
            assert_eq!(orig & !0b11, modified & !0b11);
        }
    }

    #[test]
    fn read_returns_what_write_stored() {
        let carrier = carrier_with_frames(1);
        let map = SlotMap::build(&carrier).unwrap();
        let mut mutated = carrier.clone();
        for bits in 1..=4u8 {
            for slot in [0usize, 7, 100, map.len() - 1] {
                let field = 0b1010 & ((1 << bits) - 1);
                map.write(&mut mutated, slot, bits, field);
                assert_eq!(map.read(&mutated, slot, bits), field);
            }
        }
    }

    #[test]
    fn crc_frames_contribute_no_slots() {
        // same frame with the protection bit cleared: CRC-16 present
        let mut carrier = carrier_with_frames(2);
        carrier[1] = 0xFA;
        let map = SlotMap::build(&carrier).unwrap();
        assert_eq!(map.len(), LATER_FRAME_SLOTS);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        match SlotMap::build(&[0u8; 64]) {
            Err(Mp3StegoError::NoAudioFrames) => {}
            other => panic!("expected NoAudioFrames, got {other:?}"),
        }
    }

    #[test]
    fn component_stream_matches_slot_order() {
        let carrier = carrier_with_frames(1);
        let map = SlotMap::build(&carrier).unwrap();
        let components = map.components(&carrier);
        assert_eq!(components.len(), map.len());
        // first slot sits past the margin and the Xing/Info window
        assert_eq!(components[0], carrier[25]);
    }
}
