//! Image/transcription pairing.
//!
//! Scans one directory of scanned JPG pages and one directory of TXT
//! transcriptions, joins them by case-folded file stem, and produces the
//! ordered page list the viewer is assembled from.
//!
//! ## Matching Policy
//!
//! - Discovery is non-recursive and extension-based: `jpg`/`jpeg` on the
//!   image side, `txt` on the text side, both case-insensitive.
//! - The join key is the lower-cased file stem. `PAGINA_002.JPG` pairs
//!   with `pagina_002.txt`.
//! - Files whose stem appears on only one side are silently dropped; the
//!   CLI reports summary counts, not per-file warnings.
//! - Two files collapsing to the same key (e.g. `a.jpg` and `A.JPG`):
//!   the later one in sorted path order wins, silently. The listing is
//!   sorted before insertion, so the winner is the same on every platform.
//! - The result is ordered by join key, ascending. Page order is stable
//!   across runs and operating systems.
//!
//! An empty result is a valid outcome here; whether it aborts the run is
//! the caller's decision.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PairError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One matched page: a scanned image and its transcription.
///
/// `name` is the image file's stem with its original casing, used for
/// display; matching itself is case-insensitive.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub name: String,
    pub image_path: PathBuf,
    pub text_path: PathBuf,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];
const TEXT_EXTENSIONS: &[&str] = &["txt"];

/// Pair images with transcriptions by case-folded stem.
///
/// Returns records sorted by join key, one per stem present in both
/// directories.
pub fn pair(image_dir: &Path, text_dir: &Path) -> Result<Vec<PageRecord>, PairError> {
    let images = index_by_key(image_dir, IMAGE_EXTENSIONS)?;
    let texts = index_by_key(text_dir, TEXT_EXTENSIONS)?;

    // BTreeMap iteration is ordered by key, so the intersection comes out
    // already sorted.
    let records = images
        .into_iter()
        .filter_map(|(key, image_path)| {
            let text_path = texts.get(&key)?.clone();
            let name = display_name(&image_path);
            Some(PageRecord {
                name,
                image_path,
                text_path,
            })
        })
        .collect();

    Ok(records)
}

/// Index a directory's files by case-folded stem.
///
/// The listing is sorted by path first, so when two files share a stem
/// under case folding the lexicographically later path overwrites the
/// earlier.
fn index_by_key(dir: &Path, extensions: &[&str]) -> Result<BTreeMap<String, PathBuf>, PairError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_extension(p, extensions))
        .collect();
    files.sort();

    let mut index = BTreeMap::new();
    for path in files {
        if let Some(key) = join_key(&path) {
            index.insert(key, path);
        }
    }
    Ok(index)
}

/// Case-folded file stem used to join an image to its transcription.
fn join_key(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().to_lowercase())
}

/// Original-case file stem, shown to the user.
fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.contains(&ext.as_str()))
}
