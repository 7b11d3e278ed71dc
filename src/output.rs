//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the primary display
//! for every page is its positional index and display name, with the
//! source files shown as indented context lines. Each surface has a
//! `format_*` function returning `Vec<String>` for testability and a
//! `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.
//!
//! ## Scan
//!
//! ```text
//! Pairs
//! 001 pagina_001
//!     Image: /scans/pagina_001.jpg
//!     Text:  /trans/pagina_001.txt
//! ```
//!
//! ## Build
//!
//! ```text
//! Found 12 image/text pairs:
//!   pagina_001
//!   ...
//!   ... and 7 more
//!
//!   Processing 12/12: pagina_012
//!   Wrote: viewer.html
//!   Size: 3.4 MB
//!   Pages: 12
//! ```

use crate::pair::PageRecord;
use std::path::Path;

/// How many pair names the preview shows before truncating.
const PREVIEW_LIMIT: usize = 5;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Human-readable size, matching what the viewer's users care about:
/// megabytes once the document is big, kilobytes before that.
fn human_size(bytes: u64) -> String {
    if bytes > 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

// ============================================================================
// Pair preview (build / check)
// ============================================================================

/// Format the pair count and a short preview of display names.
pub fn format_pair_preview(records: &[PageRecord]) -> Vec<String> {
    let mut lines = vec![format!("Found {} image/text pairs:", records.len())];
    for record in records.iter().take(PREVIEW_LIMIT) {
        lines.push(format!("  {}", record.name));
    }
    if records.len() > PREVIEW_LIMIT {
        lines.push(format!("  ... and {} more", records.len() - PREVIEW_LIMIT));
    }
    lines
}

/// Print the pair preview to stdout.
pub fn print_pair_preview(records: &[PageRecord]) {
    for line in format_pair_preview(records) {
        println!("{}", line);
    }
}

// ============================================================================
// Scan listing
// ============================================================================

/// Format the full pair listing with source paths.
pub fn format_scan_output(records: &[PageRecord]) -> Vec<String> {
    let mut lines = vec!["Pairs".to_string()];
    for (i, record) in records.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), record.name));
        lines.push(format!("    Image: {}", record.image_path.display()));
        lines.push(format!("    Text:  {}", record.text_path.display()));
    }
    lines.push(String::new());
    lines.push(format!("{} pairs", records.len()));
    lines
}

/// Print the scan listing to stdout.
pub fn print_scan_output(records: &[PageRecord]) {
    for line in format_scan_output(records) {
        println!("{}", line);
    }
}

// ============================================================================
// Build progress and summary
// ============================================================================

/// One progress line per processed page. `index` is 1-based.
pub fn page_progress_line(index: usize, total: usize, name: &str) -> String {
    format!("  Processing {}/{}: {}", index, total, name)
}

/// Format the final build summary.
pub fn format_build_summary(output: &Path, bytes: u64, page_count: usize) -> Vec<String> {
    vec![
        format!("  Wrote: {}", output.display()),
        format!("  Size: {}", human_size(bytes)),
        format!("  Pages: {}", page_count),
    ]
}

/// Print the build summary to stdout.
pub fn print_build_summary(output: &Path, bytes: u64, page_count: usize) {
    for line in format_build_summary(output, bytes, page_count) {
        println!("{}", line);
    }
}
