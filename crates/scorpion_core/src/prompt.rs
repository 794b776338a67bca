//! Prompt document parsing.
//!
//! A prompts document is plain text holding one segment per slide:
//!
//! ```text
//! IMAGE 1 (0:00-0:15):
//! A stylist disinfecting shears at a clean station.
//!
//! IMAGE 2 (0:15-0:30):
//! Close-up of an EPA-registered disinfectant label.
//! ```
//!
//! Grammar:
//!
//! - A *marker* is a line reading `IMAGE <n>`, optionally followed by a
//!   parenthesised timestamp, then a colon and nothing but whitespace. The
//!   `IMAGE` label is matched case-insensitively and may be preceded by
//!   Markdown decoration such as `## ` or `- `.
//! - The *body* of a marker runs from the line after it up to the next line
//!   starting with `IMAGE <digits>` (well-formed or not, same decoration
//!   allowed) or the end of the document, trimmed.
//! - Markers with an empty body produce no entry; when an index repeats, the
//!   first occurrence wins.
//!
//! Anything that does not match is ignored. A missing entry is not an error:
//! the assembler substitutes a placeholder.

use derive_getters::Getters;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[^\w\n]*IMAGE[ \t]+(\d+)[ \t]*(?:\(([^)\n]*)\))?[ \t]*:[ \t]*\r?$")
        .expect("Valid prompt marker regex")
});

// Any line that starts like a marker ends the preceding body.
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^[^\w\n]*IMAGE[ \t]+\d+").expect("Valid prompt boundary regex")
});

/// One parsed `IMAGE n` segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PromptEntry {
    /// 1-based slide index from the marker
    index: u32,
    /// Parenthesised free-text label, if the marker carried one
    timestamp: Option<String>,
    /// Trimmed body text
    body: String,
}

impl PromptEntry {
    /// Create an entry directly.
    pub fn new(index: u32, timestamp: Option<String>, body: impl Into<String>) -> Self {
        Self {
            index,
            timestamp,
            body: body.into(),
        }
    }
}

/// Extract every prompt entry from `text`, in document order.
///
/// # Examples
///
/// ```
/// use scorpion_core::parse_prompts;
///
/// let doc = "IMAGE 1 (0:00):\nFirst shot\n\nIMAGE 2 (0:10):\n  Second shot  \n";
/// let entries = parse_prompts(doc);
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].body(), "First shot");
/// assert_eq!(entries[1].timestamp().as_deref(), Some("0:10"));
/// assert_eq!(entries[1].body(), "Second shot");
/// ```
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn parse_prompts(text: &str) -> Vec<PromptEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for caps in MARKER.captures_iter(text) {
        let Ok(index) = caps[1].parse::<u32>() else {
            tracing::debug!(marker = &caps[0], "Slide index out of range, skipping");
            continue;
        };
        let Some(marker) = caps.get(0) else {
            continue;
        };

        let body = body_after(text, marker.end());
        if body.is_empty() {
            tracing::debug!(index, "Prompt marker has no body, skipping");
            continue;
        }
        if !seen.insert(index) {
            tracing::debug!(index, "Duplicate prompt index, keeping first occurrence");
            continue;
        }

        let timestamp = caps.get(2).map(|m| m.as_str().trim().to_string());
        entries.push(PromptEntry::new(index, timestamp, body));
    }

    tracing::debug!(count = entries.len(), "Parsed prompt entries");
    entries
}

/// Find the body for slide `index`, or `None` when the document has no such marker.
///
/// # Examples
///
/// ```
/// use scorpion_core::find_prompt;
///
/// let doc = "IMAGE 1:\nOne\nIMAGE 10:\nTen\n";
/// assert_eq!(find_prompt(doc, 10).as_deref(), Some("Ten"));
/// assert_eq!(find_prompt(doc, 1).as_deref(), Some("One"));
/// assert_eq!(find_prompt(doc, 3), None);
/// ```
pub fn find_prompt(text: &str, index: u32) -> Option<String> {
    parse_prompts(text)
        .into_iter()
        .find(|entry| entry.index == index)
        .map(|entry| entry.body)
}

/// Replace the body of slide `index` in `text`, returning the new document.
///
/// The first `IMAGE <index>` marker keeps its line (and timestamp); only the
/// body below it changes. Other entries and any preamble are left byte for
/// byte. When no marker for `index` exists, a new `IMAGE <index>:` entry is
/// appended.
///
/// # Examples
///
/// ```
/// use scorpion_core::{find_prompt, replace_prompt};
///
/// let doc = "IMAGE 1 (0:00):\nOld\n\nIMAGE 2 (0:10):\nKeep\n";
/// let updated = replace_prompt(doc, 1, "New");
/// assert_eq!(updated, "IMAGE 1 (0:00):\nNew\n\nIMAGE 2 (0:10):\nKeep\n");
///
/// let appended = replace_prompt(doc, 3, "Third");
/// assert_eq!(find_prompt(&appended, 3).as_deref(), Some("Third"));
/// ```
pub fn replace_prompt(text: &str, index: u32, body: &str) -> String {
    let body = body.trim();
    let marker = MARKER
        .captures_iter(text)
        .find(|caps| caps[1].parse::<u32>().ok() == Some(index))
        .and_then(|caps| caps.get(0));

    let Some(marker) = marker else {
        let mut updated = text.trim_end().to_string();
        if !updated.is_empty() {
            updated.push_str("\n\n");
        }
        updated.push_str(&format!("IMAGE {}:\n{}\n", index, body));
        return updated;
    };

    let start = marker.end();
    let skip = usize::from(text[start..].starts_with('\n'));
    let next = BOUNDARY
        .find(&text[start + skip..])
        .map(|m| start + skip + m.start());

    let mut updated = String::with_capacity(text.len() + body.len());
    updated.push_str(&text[..start]);
    updated.push('\n');
    updated.push_str(body);
    match next {
        Some(next) => {
            updated.push_str("\n\n");
            updated.push_str(&text[next..]);
        }
        None => updated.push('\n'),
    }
    updated
}

/// Body text from `start` up to the next boundary line, trimmed.
fn body_after(text: &str, start: usize) -> &str {
    let rest = &text[start..];
    // Skip the marker's own line break so the boundary search starts on the next line.
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    let end = BOUNDARY.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    rest[..end].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_documents_parse() {
        let doc = "IMAGE 1 (0:00):\r\nWindows line endings\r\nIMAGE 2 (0:05):\r\nSecond\r\n";
        let entries = parse_prompts(doc);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].body(), "Windows line endings");
        assert_eq!(entries[1].body(), "Second");
    }

    #[test]
    fn marker_at_end_of_document_has_no_body() {
        assert!(parse_prompts("IMAGE 1 (0:00):").is_empty());
    }

    #[test]
    fn text_after_colon_is_not_a_marker() {
        let doc = "IMAGE 1 (0:00): inline body\nstill not a body\n";
        assert!(parse_prompts(doc).is_empty());
    }

    #[test]
    fn malformed_marker_still_ends_previous_body() {
        let doc = "IMAGE 1 (a):\nfirst\nIMAGE 2 missing colon\nstray\n";
        let entries = parse_prompts(doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].body(), "first");
    }

    #[test]
    fn replace_keeps_preamble_and_later_entries() {
        let doc = "Notes for the illustrator\n\nIMAGE 1:\nold one\nIMAGE 2 (0:05):\ntwo\n";
        let updated = replace_prompt(doc, 1, "  new one  ");
        assert!(updated.starts_with("Notes for the illustrator\n\nIMAGE 1:\nnew one\n\n"));
        assert_eq!(find_prompt(&updated, 2).as_deref(), Some("two"));
    }

    #[test]
    fn replace_last_entry() {
        let updated = replace_prompt("IMAGE 1:\none\nIMAGE 2:\ntwo", 2, "deux");
        assert_eq!(updated, "IMAGE 1:\none\nIMAGE 2:\ndeux\n");
    }

    #[test]
    fn replace_fills_empty_marker() {
        let updated = replace_prompt("IMAGE 1 (0:00):\nIMAGE 2:\ntwo\n", 1, "one");
        let entries = parse_prompts(&updated);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].body(), "one");
        assert_eq!(entries[0].timestamp().as_deref(), Some("0:00"));
    }

    #[test]
    fn replace_keeps_markdown_heading() {
        let doc = "## IMAGE 1 (0:00):\nold\n\n## IMAGE 2:\ntwo\n";
        let updated = replace_prompt(doc, 1, "new");
        assert_eq!(updated, "## IMAGE 1 (0:00):\nnew\n\n## IMAGE 2:\ntwo\n");
    }

    #[test]
    fn replace_into_empty_document() {
        assert_eq!(replace_prompt("", 4, "four"), "IMAGE 4:\nfour\n");
    }
}
