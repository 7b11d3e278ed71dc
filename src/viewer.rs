//! Viewer document assembly.
//!
//! Takes the ordered page list and produces one self-contained HTML file:
//! for every page, its display name, a base64 `data:` URI of the scan, and
//! the doubly-escaped transcription, embedded as a script-readable array
//! inside a fixed presentation shell (split view, navigation, zoom,
//! keyboard shortcuts, draggable divider).
//!
//! ## Output
//!
//! A single document with no external references — it opens offline in any
//! browser. The embedded array has exactly three fields per page:
//!
//! ```text
//! {
//!   name: `pagina_001`,
//!   image: "data:image/jpeg;base64,…",
//!   text: `…doubly-escaped transcription…`
//! }
//! ```
//!
//! ## Assembly
//!
//! Pages are processed one at a time: read the scan, encode it, read and
//! decode the transcription, escape it, append one array entry to the
//! output buffer, drop the per-page data. Only the current page plus the
//! growing buffer are in memory.
//!
//! Any unreadable source file aborts the whole run and nothing is written;
//! a viewer missing pages would be worse than no viewer.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for the document shell. The CSS
//! and the navigation script are compile-time static assets:
//! - `static/viewer.css`: layout and theme
//! - `static/viewer.js`: navigation, zoom, fullscreen, divider drag

use crate::datauri;
use crate::escape;
use crate::pair::PageRecord;
use crate::text;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("could not read image '{path}': {source}")]
    ReadImage { path: PathBuf, source: io::Error },
    #[error("could not read transcription '{path}': {source}")]
    ReadText { path: PathBuf, source: io::Error },
    #[error("could not write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
}

const CSS: &str = include_str!("../static/viewer.css");
const JS: &str = include_str!("../static/viewer.js");

/// Embed-ready data for one page: encoded scan, doubly-escaped text.
pub struct PageContent {
    pub name: String,
    pub image_data: String,
    pub text_data: String,
}

/// Read and prepare one page for embedding.
pub fn page_content(record: &PageRecord) -> Result<PageContent, ViewerError> {
    let image_data =
        datauri::encode_file(&record.image_path).map_err(|source| ViewerError::ReadImage {
            path: record.image_path.clone(),
            source,
        })?;
    let raw = text::read(&record.text_path).map_err(|source| ViewerError::ReadText {
        path: record.text_path.clone(),
        source,
    })?;
    let text_data = escape::escape_template_literal(&escape::escape_html(&raw));
    Ok(PageContent {
        name: record.name.clone(),
        image_data,
        text_data,
    })
}

/// Format one entry of the embedded `pages` array.
///
/// The name is embedded as a template-literal value and gets only the
/// HTML pass; the text is already doubly-escaped in [`PageContent`].
fn page_literal(content: &PageContent) -> String {
    format!(
        "  {{\n    name: `{}`,\n    image: \"{}\",\n    text: `{}`\n  }}",
        escape::escape_html(&content.name),
        content.image_data,
        content.text_data,
    )
}

/// Assemble the viewer and write it to `output`.
///
/// `progress` is called with the zero-based index of each page as it is
/// processed. Returns the size of the written document in bytes.
pub fn generate(
    records: &[PageRecord],
    output: &Path,
    mut progress: impl FnMut(usize, &PageRecord),
) -> Result<u64, ViewerError> {
    let mut entries = String::new();
    for (i, record) in records.iter().enumerate() {
        progress(i, record);
        let content = page_content(record)?;
        if i > 0 {
            entries.push_str(",\n");
        }
        entries.push_str(&page_literal(&content));
    }

    let document = render_document(&entries).into_string();
    fs::write(output, &document).map_err(|source| ViewerError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    Ok(document.len() as u64)
}

// ============================================================================
// Document shell
// ============================================================================

fn render_document(entries: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Transcription Viewer" }
                style { (PreEscaped(CSS)) }
            }
            body {
                (toolbar())
                (split_view())
                (status_bar())
                script {
                    (PreEscaped(format!("const pages = [\n{entries}\n];\n\n")))
                    (PreEscaped(JS))
                }
            }
        }
    }
}

fn toolbar() -> Markup {
    html! {
        div.toolbar {
            h1 { "Transcription Viewer" }
            div.nav-controls {
                button.nav-btn id="btnPrev" onclick="goToPage(currentPage - 1)" { "← Previous" }
                select.page-select id="pageSelect" onchange="goToPage(parseInt(this.value))" {}
                span.page-info id="pageInfo" {}
                button.nav-btn id="btnNext" onclick="goToPage(currentPage + 1)" { "Next →" }
            }
            span.page-name id="pageName" {}
        }
    }
}

fn split_view() -> Markup {
    html! {
        div.viewer {
            div.image-panel id="imagePanel" {
                img id="pageImage" src="" alt="Scanned page";
            }
            div.divider id="divider" {}
            div.text-panel id="textPanel" {}
        }
    }
}

fn status_bar() -> Markup {
    html! {
        div.statusbar {
            span.shortcuts {
                kbd { "←" } " " kbd { "→" } " navigate   "
                kbd { "+" } " " kbd { "-" } " zoom   "
                kbd { "F" } " fullscreen"
            }
            div.zoom-controls {
                button.zoom-btn onclick="changeZoom(-10)" { "−" }
                span.zoom-level id="zoomLevel" { "100%" }
                button.zoom-btn onclick="changeZoom(10)" { "+" }
            }
            span id="totalInfo" {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair;
    use crate::test_helpers::{fixture_dirs, write_page};

    #[test]
    fn page_content_encodes_image_and_escapes_text() {
        let (images, texts) = fixture_dirs(&[], &[]);
        write_page(&images, &texts, "folio_1", b"\xFF\xD8jpeg", "a <b> & `${x}`");

        let records = pair::pair(images.path(), texts.path()).unwrap();
        let content = page_content(&records[0]).unwrap();

        assert_eq!(content.name, "folio_1");
        assert!(content.image_data.starts_with("data:image/jpeg;base64,"));
        assert_eq!(content.text_data, "a &lt;b&gt; &amp; \\`\\${x}\\`");
    }

    #[test]
    fn name_gets_html_pass_but_no_backslash_layer() {
        let content = PageContent {
            name: "A&B `raw`".to_string(),
            image_data: "data:image/jpeg;base64,".to_string(),
            text_data: String::new(),
        };
        let literal = page_literal(&content);
        // HTML-escaped, backticks left alone.
        assert!(literal.contains("name: `A&amp;B `raw``"));
    }

    #[test]
    fn generate_writes_a_self_contained_document() {
        let (images, texts) = fixture_dirs(&[], &[]);
        write_page(&images, &texts, "pagina_001", b"\xFF\xD8\xFF\xE0", "primera");
        write_page(&images, &texts, "pagina_002", b"\xFF\xD8\xFF\xE1", "segunda");

        let records = pair::pair(images.path(), texts.path()).unwrap();
        let out = images.path().join("viewer.html");
        let mut seen = Vec::new();
        let bytes = generate(&records, &out, |i, r| seen.push((i, r.name.clone()))).unwrap();

        let document = fs::read_to_string(&out).unwrap();
        assert_eq!(bytes, document.len() as u64);
        assert_eq!(
            seen,
            vec![(0, "pagina_001".to_string()), (1, "pagina_002".to_string())]
        );
        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("const pages = ["));
        assert!(document.contains("data:image/jpeg;base64,"));
        assert!(document.contains("primera"));
        assert!(document.contains("segunda"));
        assert!(document.contains("function goToPage"));
        // No external references: the only src attribute is the empty img slot.
        assert!(!document.contains("http://"));
        assert!(!document.contains("https://"));
    }

    #[test]
    fn missing_image_aborts_and_names_the_file() {
        let (images, texts) = fixture_dirs(&[], &[]);
        write_page(&images, &texts, "pagina_001", b"\xFF\xD8", "uno");

        let mut records = pair::pair(images.path(), texts.path()).unwrap();
        fs::remove_file(&records[0].image_path).unwrap();
        let image_path = records[0].image_path.clone();

        let out = images.path().join("viewer.html");
        let err = generate(&records, &out, |_, _| {}).unwrap_err();
        match err {
            ViewerError::ReadImage { path, .. } => assert_eq!(path, image_path),
            other => panic!("expected ReadImage, got {other:?}"),
        }
        assert!(!out.exists());

        // Same contract for a vanished transcription.
        write_page(&images, &texts, "pagina_001", b"\xFF\xD8", "uno");
        records = pair::pair(images.path(), texts.path()).unwrap();
        fs::remove_file(&records[0].text_path).unwrap();
        let err = generate(&records, &out, |_, _| {}).unwrap_err();
        assert!(matches!(err, ViewerError::ReadText { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn interpolation_in_transcription_is_inert_in_the_document() {
        let (images, texts) = fixture_dirs(&[], &[]);
        write_page(&images, &texts, "p1", b"\xFF\xD8", "`${evil}`");

        let records = pair::pair(images.path(), texts.path()).unwrap();
        let out = images.path().join("viewer.html");
        generate(&records, &out, |_, _| {}).unwrap();

        let document = fs::read_to_string(&out).unwrap();
        assert!(document.contains("\\`\\${evil}\\`"));
        assert!(!document.contains("text: ``${evil}``"));
    }
}
