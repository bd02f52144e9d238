//! Key-seeded slot visiting order.
//!
//! The order is a Fisher-Yates permutation of the slot index space driven by
//! a ChaCha20 PRNG seeded from SHA-256 over a fixed domain tag and the key.
//! Every step of the scheme is pinned down so an independent implementation
//! reproduces the exact same order for the same key; nothing here depends on
//! an unspecified standard library generator.
//!
//! # Cross-platform portability
//!
//! The shuffle draws `u32` ranges, not `usize` ranges. `usize` is 32-bit on
//! WASM and 64-bit on native, which makes `gen_range` consume different
//! amounts of PRNG output per step and would produce different permutations.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

use crate::error::Mp3StegoError;
use crate::result::Result;

/// Domain tag mixed into the seed, versioned with the order scheme.
const ORDER_DOMAIN_TAG: &[u8] = b"mp3stego/slot-order/v1";

/// The ordered list of slots assigned to header bits then payload bits.
///
/// Computed fresh per operation from the slot count and the key, never
/// persisted. An empty key yields the identity order.
#[derive(Debug)]
pub struct EmbeddingPlan {
    order: Vec<u32>,
}

impl EmbeddingPlan {
    pub fn new(slot_count: usize, key: &[u8]) -> Result<Self> {
        let count =
            u32::try_from(slot_count).map_err(|_| Mp3StegoError::CarrierTooLarge(slot_count))?;

        let mut order: Vec<u32> = (0..count).collect();
        if !key.is_empty() {
            let mut rng = ChaCha20Rng::from_seed(seed_for(key));
            for i in (1..order.len()).rev() {
                let j = rng.gen_range(0..=(i as u32)) as usize;
                order.swap(i, j);
            }
        }

        Ok(Self { order })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The slot index visited at plan position `i`.
    pub fn slot(&self, i: usize) -> usize {
        self.order[i] as usize
    }
}

fn seed_for(key: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(ORDER_DOMAIN_TAG);
    hasher.update(key);
    hasher.finalize().into()
}
