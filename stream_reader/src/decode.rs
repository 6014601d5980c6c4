use std::borrow::Cow;

use base64::{engine::general_purpose::STANDARD, DecodeError, Engine as _};

/// Kinesis delivers record data as standard, padded base64.
pub fn decode_payload(data: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(data)
}

/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn payload_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
