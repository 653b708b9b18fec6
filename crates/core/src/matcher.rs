//! Case-insensitive keyword containment matching.
//!
//! Matching is plain substring search with no word-boundary checks: a
//! keyword that happens to be a substring of an unrelated word will match.

/// Returns true when `text` contains any of `keywords`, ignoring case.
///
/// Empty text never matches; empty keywords are skipped.
pub fn text_mentions(text: &str, keywords: &[String]) -> bool {
    if text.is_empty() {
        return false;
    }

    let text = text.to_lowercase();
    keywords
        .iter()
        .filter(|keyword| !keyword.is_empty())
        .any(|keyword| text.contains(&keyword.to_lowercase()))
}
