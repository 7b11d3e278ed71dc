//! Byte-exact embedding of scanned images as `data:` URIs.
//!
//! The scans are already JPEG; they are embedded exactly as stored, with
//! no decoding, recompression, or resizing. Base64 is the only transform,
//! so the bytes a browser receives are the bytes on disk.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fs;
use std::io;
use std::path::Path;

/// Encode raw JPEG bytes as a `data:image/jpeg` URI.
pub fn encode(bytes: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes))
}

/// Read a file and embed its exact bytes as a data URI.
pub fn encode_file(path: &Path) -> io::Result<String> {
    Ok(encode(&fs::read(path)?))
}
