//! Proposed-stem composition from a provider description.
//!
//! A stem is built from at most two parts: the sanitized caption, optionally
//! followed by the sanitized first tag. The tag is consulted only when a
//! caption exists and the raw tag is not already a substring of the raw
//! caption; tags mostly restate the caption, and a name like
//! `red_apple_apple` helps nobody. When nothing survives sanitization the
//! stem is the fallback, so every file gets a name.

use crate::provider::Description;
use crate::sanitize::{FALLBACK_STEM, sanitize};

/// Default stem prefix, following the Android `ic_` icon naming convention.
pub const DEFAULT_PREFIX: &str = "ic_";

/// Composes the proposed stem for one image, prefix included.
///
/// The fallback case also gets the prefix (`ic_unknown`), so fallback files
/// sort alongside their siblings.
pub fn propose_stem(description: &Description, prefix: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(caption) = &description.caption {
        let cleaned = sanitize(caption);
        if cleaned != FALLBACK_STEM {
            parts.push(cleaned);
        }

        // Tags are only considered alongside a caption.
        if let Some(tag) = description.tags.first()
            && !caption.contains(tag.as_str())
        {
            let cleaned = sanitize(tag);
            if cleaned != FALLBACK_STEM && !parts.contains(&cleaned) {
                parts.push(cleaned);
            }
        }
    }

    parts.truncate(2);
    let stem = if parts.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        parts.join("_")
    };
    format!("{prefix}{stem}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(caption: Option<&str>, tags: &[&str]) -> Description {
        Description {
            caption: caption.map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn caption_only() {
        let d = desc(Some("a red apple on the table"), &[]);
        assert_eq!(propose_stem(&d, "ic_"), "ic_red_apple_table");
    }

    #[test]
    fn tag_appended_when_not_in_caption() {
        let d = desc(Some("a red apple"), &["fruit", "red"]);
        assert_eq!(propose_stem(&d, "ic_"), "ic_red_apple_fruit");
    }

    #[test]
    fn tag_skipped_when_substring_of_caption() {
        // Raw substring check against the raw caption, not the sanitized stem.
        let d = desc(Some("a red apple"), &["apple", "fruit"]);
        assert_eq!(propose_stem(&d, "ic_"), "ic_red_apple");
    }

    #[test]
    fn only_first_tag_is_considered() {
        let d = desc(Some("a red apple"), &["apple", "banana"]);
        assert_eq!(propose_stem(&d, "ic_"), "ic_red_apple");
    }

    #[test]
    fn tag_skipped_when_duplicate_after_sanitizing() {
        // "Apple!" is not a substring of the caption, but sanitizes to a part
        // that is already present.
        let d = desc(Some("apple"), &["Apple!"]);
        assert_eq!(propose_stem(&d, "ic_"), "ic_apple");
    }

    #[test]
    fn tags_ignored_without_caption() {
        let d = desc(None, &["apple", "fruit"]);
        assert_eq!(propose_stem(&d, "ic_"), "ic_unknown");
    }

    #[test]
    fn empty_description_falls_back() {
        assert_eq!(propose_stem(&Description::default(), "ic_"), "ic_unknown");
    }

    #[test]
    fn stop_word_caption_uses_tag_alone() {
        let d = desc(Some("the"), &["apple"]);
        assert_eq!(propose_stem(&d, "ic_"), "ic_apple");
    }

    #[test]
    fn unknown_tag_does_not_rescue_unknown_caption() {
        let d = desc(Some("the"), &["of"]);
        assert_eq!(propose_stem(&d, "ic_"), "ic_unknown");
    }

    #[test]
    fn custom_and_empty_prefix() {
        let d = desc(Some("gear"), &[]);
        assert_eq!(propose_stem(&d, ""), "gear");
        assert_eq!(propose_stem(&d, "icon_"), "icon_gear");
    }
}
