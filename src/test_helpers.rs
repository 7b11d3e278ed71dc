//! Shared test utilities for the scanfolio test suite.
//!
//! Pairing only looks at file names, so image fixtures are a few
//! placeholder bytes — no real JPEG data is needed anywhere in the suite.

use std::fs;
use tempfile::TempDir;

/// Create an image directory and a text directory populated with the
/// given file names. Contents are placeholders.
pub fn fixture_dirs(images: &[&str], texts: &[&str]) -> (TempDir, TempDir) {
    let image_dir = TempDir::new().unwrap();
    let text_dir = TempDir::new().unwrap();
    for name in images {
        fs::write(image_dir.path().join(name), b"\xFF\xD8\xFF").unwrap();
    }
    for name in texts {
        fs::write(text_dir.path().join(name), "placeholder").unwrap();
    }
    (image_dir, text_dir)
}

/// Write one matched page: `<stem>.jpg` with the given bytes and
/// `<stem>.txt` with the given transcription.
pub fn write_page(
    image_dir: &TempDir,
    text_dir: &TempDir,
    stem: &str,
    image_bytes: &[u8],
    transcription: &str,
) {
    fs::write(image_dir.path().join(format!("{stem}.jpg")), image_bytes).unwrap();
    fs::write(text_dir.path().join(format!("{stem}.txt")), transcription).unwrap();
}
