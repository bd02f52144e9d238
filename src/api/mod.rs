//! Builder-style entry points layered over the core operations.
//!
//! ```no_run
//! let carrier = std::fs::read("song.mp3").unwrap();
//! let outcome = mp3stego_core::api::embed::prepare()
//!     .with_carrier(&carrier)
//!     .with_payload(b"meet at dawn")
//!     .with_key(b"SuperSecret42")
//!     .with_cipher()
//!     .execute()
//!     .unwrap();
//! std::fs::write("song-with-secret.mp3", &outcome.stego).unwrap();
//! ```

pub mod capacity;
pub mod embed;
pub mod extract;
