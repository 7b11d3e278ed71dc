//! Two-layer escaping for text embedded in the viewer document.
//!
//! Transcription text ends up inside a backtick-delimited template literal
//! in the viewer's script, and the browser later assigns it to a panel via
//! `innerHTML`. That means two separate grammars can misread it, so two
//! passes are applied in a fixed order:
//!
//! 1. [`escape_html`] — the text renders as literal content, not markup.
//! 2. [`escape_template_literal`] — the HTML-escaped text survives inside
//!    the template literal without terminating it or triggering `${}`
//!    interpolation.
//!
//! Both passes are single character-level scans. For the template-literal
//! pass this matters: an escaping backslash emitted for one character can
//! never be picked up again by a later rule, so backslashes in the input
//! are handled exactly once.

/// Escape markup-significant characters so text displays literally.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape the characters that are structurally significant inside a
/// backtick-delimited template literal: backslash, backtick, and the
/// `${}` interpolation trigger.
pub fn escape_template_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reverse of escape_template_literal: drop one escaping backslash.
    fn unescape_template_literal(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    // Reverse of escape_html. `&amp;` must come last so entities produced
    // from a literal ampersand are not double-unescaped.
    fn unescape_html(s: &str) -> String {
        s.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn html_escapes_markup_characters() {
        assert_eq!(
            escape_html("<b>\"fish\" & 'chips'</b>"),
            "&lt;b&gt;&quot;fish&quot; &amp; &#x27;chips&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn html_leaves_plain_text_alone() {
        assert_eq!(escape_html("página 001, sin más"), "página 001, sin más");
    }

    #[test]
    fn template_literal_escapes_backtick_dollar_backslash() {
        assert_eq!(escape_template_literal("`${x}`"), "\\`\\${x}\\`");
        assert_eq!(escape_template_literal("a\\b"), "a\\\\b");
    }

    #[test]
    fn backslash_handled_exactly_once() {
        // A backslash followed by a backtick must become \\ then \` —
        // not a re-escaped \\\\` mess.
        assert_eq!(escape_template_literal("\\`"), "\\\\\\`");
    }

    #[test]
    fn round_trip_reproduces_original() {
        let original = "line <1> & `code` with \\ and ${var}, plus \"q\" and 'q'";
        let embedded = escape_template_literal(&escape_html(original));
        let back = unescape_html(&unescape_template_literal(&embedded));
        assert_eq!(back, original);
    }

    #[test]
    fn round_trip_on_pathological_backslash_runs() {
        let original = "\\\\\\`$$`\\${deep}";
        let embedded = escape_template_literal(&escape_html(original));
        let back = unescape_html(&unescape_template_literal(&embedded));
        assert_eq!(back, original);
    }

    #[test]
    fn interpolation_attempt_is_neutralized() {
        // Every backtick and dollar sign gains an escaping backslash, so
        // the sequence is inert inside a template literal.
        let escaped = escape_template_literal(&escape_html("`${evil}`"));
        assert_eq!(escaped, "\\`\\${evil}\\`");
    }

    #[test]
    fn empty_input() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_template_literal(""), "");
    }
}
