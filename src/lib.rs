//! # scanfolio
//!
//! Bundle a directory of scanned pages and a directory of transcriptions
//! into a single self-contained HTML viewer. One shot: pair the files,
//! embed everything, write one document that opens offline in any browser
//! — no server, no external assets, no install on the reader's side.
//!
//! # Pipeline
//!
//! ```text
//! images/ + texts/  →  pair     →  ordered page list
//! per page          →  datauri  →  base64 data: URI of the scan
//!                      text     →  decoded transcription
//!                      escape   →  HTML pass + template-literal pass
//! all pages         →  viewer   →  viewer.html
//! ```
//!
//! Processing is sequential and streaming: each page's files are read,
//! encoded, escaped, and appended to the output buffer before the next
//! page is touched.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pair`] | Scans both directories and joins files by case-folded stem |
//! | [`text`] | Reads transcriptions, tolerating legacy encodings |
//! | [`datauri`] | Embeds scan bytes, unmodified, as `data:image/jpeg` URIs |
//! | [`escape`] | Two-layer escaping for text inside the embedded script |
//! | [`viewer`] | Assembles and writes the final document (Maud + static assets) |
//! | [`output`] | CLI output formatting — pure `format_*` functions |
//! | [`prompt`] | Interactive directory prompting with paste normalization |
//!
//! # Design Decisions
//!
//! ## Everything Embedded
//!
//! Scans are base64 data URIs, text is inline, CSS and the navigation
//! script are compiled into the binary and injected into the document.
//! The output can be mailed, archived, or dropped on a USB stick and will
//! render identically for decades. Size is the user's tradeoff: a
//! 300-page book of scans makes a large file, and that is accepted.
//!
//! ## Maud Over Template Engines
//!
//! The document shell is generated with [Maud](https://maud.lambda.xyz/):
//! malformed HTML is a compile error, interpolation is escaped by default,
//! and there is no template directory to ship. The transcription text is
//! the one deliberate `PreEscaped` injection point, which is why its own
//! escaping lives in a dedicated, heavily tested module.
//!
//! ## Case-Folded Pairing
//!
//! Scanner software loves to upcase extensions and batch-rename halves of
//! a collection. Matching by lower-cased stem (`PAGINA_002.JPG` ↔
//! `pagina_002.txt`) absorbs that, while display names keep the casing of
//! the image file the user actually has on disk.

pub mod datauri;
pub mod escape;
pub mod output;
pub mod pair;
pub mod prompt;
pub mod text;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_helpers;
