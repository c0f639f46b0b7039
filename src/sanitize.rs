//! Free-form text → filesystem-safe name stem.
//!
//! Providers return prose ("A red apple on the table."); filenames want
//! `red_apple_table`. The conversion is deliberately total: whatever the
//! provider sends back, [`sanitize`] produces a usable stem. A naming
//! failure must never abort a batch, so the empty case collapses to
//! [`FALLBACK_STEM`] instead of an error.

/// Stem used when sanitization produces nothing usable.
pub const FALLBACK_STEM: &str = "unknown";

/// Words dropped from stems: articles, conjunctions, short prepositions.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Maximum length of a single token in the output stem.
const MAX_TOKEN_LEN: usize = 15;

/// Reduces free-form text to a lowercase `[a-z0-9_]` stem.
///
/// Steps, in order: lowercase; keep only ASCII alphanumerics, underscores,
/// whitespace, and hyphens; collapse runs of whitespace/hyphens into a single
/// underscore; drop stop-words; cap each token at 15 characters; rejoin with
/// underscores. An empty result yields [`FALLBACK_STEM`].
///
/// Underscores survive the character filter so that an already-sanitized stem
/// passes through unchanged (sanitize is idempotent on its own output).
pub fn sanitize(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.chars().flat_map(|c| c.to_lowercase()) {
        if c.is_whitespace() || c == '-' {
            pending_separator = true;
        } else if c.is_ascii_alphanumeric() || c == '_' {
            if pending_separator {
                cleaned.push('_');
                pending_separator = false;
            }
            cleaned.push(c);
        }
        // Everything else is stripped without acting as a separator.
    }

    let stem = cleaned
        .split('_')
        .filter(|token| !token.is_empty() && !STOP_WORDS.contains(token))
        .map(|token| {
            let end = token
                .char_indices()
                .nth(MAX_TOKEN_LEN)
                .map_or(token.len(), |(i, _)| i);
            &token[..end]
        })
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}
