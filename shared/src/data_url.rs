//! Data-URL encoding
//!
//! Images travel to the remote resource as `data:<mime>;base64,<payload>`
//! strings rather than binary uploads.

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Encode raw bytes as a data URL with the given MIME type
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Whether a string carries the data-URL prefix
pub fn is_data_url(s: &str) -> bool {
    s.starts_with("data:")
}

/// MIME type declared by a data URL, if well-formed
pub fn mime_type(data_url: &str) -> Option<&str> {
    let rest = data_url.strip_prefix("data:")?;
    let (mime, _) = rest.split_once(";base64,")?;
    if mime.is_empty() { None } else { Some(mime) }
}

/// Decode the base64 payload of a data URL
pub fn decode(data_url: &str) -> Option<Vec<u8>> {
    let (_, payload) = data_url.split_once(";base64,")?;
    STANDARD.decode(payload).ok()
}
