use base64::{engine::general_purpose::STANDARD, Engine};

/// Decodes a base64 camera frame, dropping a `data:image/...;base64,` header if present.
///
/// # Returns
/// - `Ok(bytes)` - Decoded image bytes
/// - `Err(DecodeError)` - Payload is not valid base64
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let encoded = match payload.split_once(',') {
        Some((_, data)) => data,
        None => payload,
    };

    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

    STANDARD.decode(compact)
}
