//! PCM payload decoding.

use crate::error::VoiceError;

/// Full-scale value of a signed 16-bit sample.
const PCM16_SCALE: f32 = 32768.0;

/// Decode 16-bit little-endian PCM into `f32` samples in `[-1.0, 1.0)`.
///
/// Empty payloads and payloads with a dangling byte are rejected.
pub fn decode_pcm16_le(bytes: &[u8]) -> Result<Vec<f32>, VoiceError> {
    if bytes.is_empty() {
        return Err(VoiceError::MalformedAudio("empty payload".into()));
    }
    if bytes.len() % 2 != 0 {
        return Err(VoiceError::MalformedAudio(format!(
            "odd byte length {}",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / PCM16_SCALE)
        .collect())
}
