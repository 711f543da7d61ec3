// src/filtering/text_detection.rs

use content_inspector::ContentType;

/// Checks if a byte buffer is likely text-based.
///
/// Uses `content_inspector` for the heuristic. Unlike a strict UTF-8 check,
/// buffers with a few invalid sequences still count as text; they are decoded
/// lossily later. Only content that looks binary (e.g. contains NUL bytes) is
/// rejected.
///
/// # Examples
/// ```
/// use foldermap::filtering::is_likely_text_from_buffer;
///
/// assert!(is_likely_text_from_buffer(b"This is valid UTF-8 text."));
/// assert!(!is_likely_text_from_buffer(b"This contains a null byte \0."));
/// assert!(is_likely_text_from_buffer(b""));
/// ```
pub fn is_likely_text_from_buffer(buffer: &[u8]) -> bool {
    !matches!(content_inspector::inspect(buffer), ContentType::BINARY)
}
