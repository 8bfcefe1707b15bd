//! Extraction of text and audio from `generateContent` responses.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{GenAiError, GenAiResult};
use crate::models::{Candidate, GenerateContentResponse};

fn first_candidate(response: &GenerateContentResponse) -> GenAiResult<&Candidate> {
    if let Some(candidate) = response.candidates.first() {
        return Ok(candidate);
    }
    match response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.clone())
    {
        Some(reason) => Err(GenAiError::Blocked { reason }),
        None => Err(GenAiError::NoCandidates),
    }
}

/// Concatenate the text parts of the first candidate.
///
/// A candidate without text yields an empty string; the caller decides what
/// an empty reply means. The candidate's finish reason is logged in that case.
pub fn extract_text(response: &GenerateContentResponse) -> GenAiResult<String> {
    let candidate = first_candidate(response)?;
    let text: String = candidate
        .content
        .iter()
        .flat_map(|c| &c.parts)
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.is_empty() {
        tracing::warn!(
            finish_reason = candidate.finish_reason.as_deref().unwrap_or("unspecified"),
            "Model returned no text"
        );
    }
    Ok(text)
}

/// Decode the first inline audio part of the first candidate.
pub fn extract_audio(response: &GenerateContentResponse) -> GenAiResult<Vec<u8>> {
    let candidate = first_candidate(response)?;
    let inline = candidate
        .content
        .iter()
        .flat_map(|c| &c.parts)
        .find_map(|p| p.inline_data.as_ref())
        .ok_or(GenAiError::MissingAudio)?;

    tracing::trace!(mime = ?inline.mime_type, "Decoding inline audio");
    Ok(STANDARD.decode(inline.data.as_bytes())?)
}
