//! Inline markdown conversion for profile text.
//!
//! # Responsibility
//! - Convert the small markdown subset profile sources use (bold, emphasis,
//!   code spans, links, `- ` bullet lines) into HTML.
//!
//! # Invariants
//! - Text is HTML-escaped before any markup is emitted, so source content can
//!   never inject raw tags.
//! - Unrecognized markdown passes through as literal (escaped) text.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold regex"));
static EMPHASIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("valid emphasis regex"));
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid code regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));

/// Escapes the five HTML-significant characters.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Renders one line of text with inline markup resolved.
///
/// Code spans are resolved first and their contents stay literal; the other
/// markers are only interpreted in the text between them.
pub(crate) fn inline_html(text: &str) -> String {
    let escaped = escape_html(text);
    let mut out = String::with_capacity(escaped.len());
    let mut rest = 0;
    for span in CODE_RE.find_iter(&escaped) {
        out.push_str(&styled_html(&escaped[rest..span.start()]));
        out.push_str("<code>");
        out.push_str(span.as_str().trim_matches('`'));
        out.push_str("</code>");
        rest = span.end();
    }
    out.push_str(&styled_html(&escaped[rest..]));
    out
}

/// Bold runs before emphasis so `**strong**` is never read as two nested
/// emphasis spans.
fn styled_html(text: &str) -> String {
    let bold = BOLD_RE.replace_all(text, "<strong>$1</strong>");
    let emphasized = EMPHASIS_RE.replace_all(&bold, "<em>$1</em>");
    LINK_RE
        .replace_all(&emphasized, "<a href=\"$2\">$1</a>")
        .into_owned()
}

/// Renders a multi-line body: `- ` lines group into lists, everything else
/// into paragraphs, with blank lines as separators.
pub(crate) fn block_html(text: &str) -> String {
    let mut out = String::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut bullets: Vec<&str> = Vec::new();

    fn flush_paragraph(out: &mut String, paragraph: &mut Vec<&str>) {
        if !paragraph.is_empty() {
            out.push_str("<p>");
            out.push_str(&inline_html(&paragraph.join(" ")));
            out.push_str("</p>\n");
            paragraph.clear();
        }
    }

    fn flush_bullets(out: &mut String, bullets: &mut Vec<&str>) {
        if !bullets.is_empty() {
            out.push_str("<ul>\n");
            for item in bullets.iter() {
                out.push_str("<li>");
                out.push_str(&inline_html(item));
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
            bullets.clear();
        }
    }

    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(item) = trimmed.strip_prefix("- ") {
            flush_paragraph(&mut out, &mut paragraph);
            bullets.push(item);
        } else if trimmed.is_empty() {
            flush_paragraph(&mut out, &mut paragraph);
            flush_bullets(&mut out, &mut bullets);
        } else {
            flush_bullets(&mut out, &mut bullets);
            paragraph.push(trimmed);
        }
    }
    flush_paragraph(&mut out, &mut paragraph);
    flush_bullets(&mut out, &mut bullets);
    out
}
