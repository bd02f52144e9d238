//! # MP3 Stego Core API
//!
//! A deterministic steganography engine over MPEG audio byte streams. The
//! engine parses the frame structure of an MP3, treats the main data bytes of
//! each audio frame as slots, and hides payload bits in the low bits of those
//! slots without re-encoding the audio. Three operations are exposed:
//! capacity reporting, embedding and extraction, plus the PSNR fidelity
//! metric the embedder reports.
//!
//! All operations are pure byte-in/byte-out functions; the caller owns all
//! I/O. The same carrier, payload and settings always produce the same stego
//! bytes, on every platform.
//!
//! # Usage Examples
//!
//! ## Embed a payload into an MP3
//!
//! ```no_run
//! let carrier = std::fs::read("song.mp3").unwrap();
//!
//! let outcome = mp3stego_core::api::embed::prepare()
//!     .with_carrier(&carrier)
//!     .with_payload(b"Hello, World!")  // will hide these bytes in the audio
//!     .with_key(b"SuperSecret42")      // will shuffle the slot order with this key
//!     .with_cipher()                   // will also cipher the payload with it
//!     .execute()
//!     .expect("Failed to embed payload in carrier");
//!
//! println!("fidelity: {:.2} dB", outcome.psnr_db);
//! std::fs::write("song-with-secret.mp3", &outcome.stego).unwrap();
//! ```
//!
//! ## Extract the payload again
//!
//! ```no_run
//! let stego = std::fs::read("song-with-secret.mp3").unwrap();
//!
//! let result = mp3stego_core::api::extract::prepare()
//!     .with_carrier(&stego)
//!     .with_key(b"SuperSecret42")
//!     .with_cipher()
//!     .execute()
//!     .expect("Failed to extract payload from carrier");
//! assert!(!result.payload.is_empty());
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
pub mod capacity;
pub mod cipher;
pub mod embed;
pub mod error;
pub mod extract;
pub mod mpeg;
pub mod options;
pub mod payload;
pub mod plan;
pub mod psnr;
pub mod result;
pub mod slots;

pub use crate::capacity::{capacity, CapacityResult};
pub use crate::embed::{embed, EmbedResult};
pub use crate::error::Mp3StegoError;
pub use crate::extract::{extract, ExtractResult};
pub use crate::options::Settings;
pub use crate::psnr::psnr;
pub use crate::result::Result;
