//! Peak signal-to-noise ratio over two component streams.
//!
//! The streams are the slot bytes of the carrier before and after embedding,
//! compared position by position. The peak value is 255 for the 8-bit
//! components; identical streams have zero error and report as positive
//! infinity.

use crate::error::Mp3StegoError;
use crate::result::Result;

const PEAK: f64 = 255.0;

/// Compute the PSNR between two equally long component streams, in dB.
pub fn psnr(original: &[u8], modified: &[u8]) -> Result<f64> {
    if original.len() != modified.len() {
        return Err(Mp3StegoError::SampleLengthMismatch {
            left: original.len(),
            right: modified.len(),
        });
    }
    if original.is_empty() {
        return Err(Mp3StegoError::EmptySampleStream);
    }

    let sum_sq: f64 = original
        .iter()
        .zip(modified.iter())
        .map(|(&a, &b)| {
            let d = f64::from(a) - f64::from(b);
            d * d
        })
        .sum();
    let mse = sum_sq / original.len() as f64;

    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(10.0 * (PEAK * PEAK / mse).log10())
}
