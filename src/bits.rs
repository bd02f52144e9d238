//! Bit packing between byte buffers and N-bit slot fields.
//!
//! Both directions run MSB-first: the first bit of the stream lands in the
//! most significant writable bit of the first slot. A trailing partial field
//! is zero-padded on its low end, and the collector discards those pad bits
//! again when the byte length is known.

/// Iterates a byte slice as a sequence of `width`-bit fields, MSB-first.
pub struct FieldIter<'a> {
    data: &'a [u8],
    width: u8,
    bit: usize,
}

impl<'a> FieldIter<'a> {
    pub fn new(data: &'a [u8], width: u8) -> Self {
        debug_assert!((1..=8).contains(&width));
        Self {
            data,
            width,
            bit: 0,
        }
    }

    /// Total number of fields this iterator yields.
    pub fn field_count(&self) -> usize {
        (self.data.len() * 8).div_ceil(usize::from(self.width))
    }
}

impl Iterator for FieldIter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.data.len() * 8;
        if self.bit >= total {
            return None;
        }
        let mut field = 0u8;
        for k in 0..usize::from(self.width) {
            field <<= 1;
            let idx = self.bit + k;
            if idx < total {
                field |= (self.data[idx / 8] >> (7 - (idx % 8))) & 1;
            }
        }
        self.bit += usize::from(self.width);
        Some(field)
    }
}

/// Reassembles `width`-bit fields into bytes, MSB-first.
pub struct FieldCollector {
    width: u8,
    out: Vec<u8>,
    acc: u16,
    pending: u8,
}

impl FieldCollector {
    pub fn new(width: u8) -> Self {
        debug_assert!((1..=8).contains(&width));
        Self {
            width,
            out: Vec::new(),
            acc: 0,
            pending: 0,
        }
    }

    pub fn push(&mut self, field: u8) {
        for k in (0..self.width).rev() {
            self.acc = (self.acc << 1) | u16::from((field >> k) & 1);
            self.pending += 1;
            if self.pending == 8 {
                self.out.push(self.acc as u8);
                self.acc = 0;
                self.pending = 0;
            }
        }
    }

    /// Finish collecting, truncated to `byte_len` bytes.
    /// Trailing pad bits beyond that length are discarded.
    pub fn into_bytes(mut self, byte_len: usize) -> Vec<u8> {
        if self.pending > 0 && self.out.len() < byte_len {
            self.out.push((self.acc << (8 - self.pending)) as u8);
        }
        self.out.truncate(byte_len);
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_bit_fields_are_the_plain_bit_stream() {
        let fields: Vec<u8> = FieldIter::new(&[0b1011_0001], 1).collect();
        assert_eq!(fields, vec![1, 0, 1, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn four_bit_fields_split_nibbles() {
        let fields: Vec<u8> = FieldIter::new(&[0xAB, 0xCD], 4).collect();
        assert_eq!(fields, vec![0xA, 0xB, 0xC, 0xD]);
    }

    #[test]
    fn partial_final_field_pads_low_bits_with_zeros() {
        // 8 bits into 3-bit fields: 101 100 01(0)
        let fields: Vec<u8> = FieldIter::new(&[0b1011_0001], 3).collect();
        assert_eq!(fields, vec![0b101, 0b100, 0b010]);
    }

    #[test]
    fn field_count_rounds_up() {
        assert_eq!(FieldIter::new(&[0u8; 16], 1).field_count(), 128);
        assert_eq!(FieldIter::new(&[0u8; 16], 3).field_count(), 43);
        assert_eq!(FieldIter::new(&[0u8; 16], 4).field_count(), 32);
    }

    #[test]
    fn collector_inverts_the_iterator_for_every_width() {
        let data: Vec<u8> = (0u16..64).map(|i| (i * 37 % 256) as u8).collect();
        for width in 1..=8u8 {
            let mut collector = FieldCollector::new(width);
            for field in FieldIter::new(&data, width) {
                collector.push(field);
            }
            assert_eq!(collector.into_bytes(data.len()), data, "width {width}");
        }
    }

    #[test]
    fn collector_truncates_to_requested_length() {
        let mut collector = FieldCollector::new(3);
        for field in FieldIter::new(&[0xDE, 0xAD], 3) {
            collector.push(field);
        }
        assert_eq!(collector.into_bytes(1), vec![0xDE]);
    }
}
