//! Transcription file reading with legacy-encoding tolerance.
//!
//! Transcriptions come from a mix of OCR tools and hand editing across
//! decades of software, so their encoding cannot be trusted. Files are
//! decoded as strict UTF-8 first; anything else is read as ISO-8859-1.
//! Decoding itself can never fail — only the file read can.

use std::fs;
use std::io;
use std::path::Path;

/// Read a transcription file, tolerating legacy encodings.
pub fn read(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode(&bytes))
}

/// Decode transcription bytes, preferring UTF-8.
///
/// ISO-8859-1 assigns a code point to every byte value, so once UTF-8 is
/// ruled out the fallback is total: no byte sequence is rejected and no
/// replacement characters are introduced. Content is returned as-is, with
/// no normalization.
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => encoding_rs::mem::decode_latin1(bytes).into_owned(),
    }
}
