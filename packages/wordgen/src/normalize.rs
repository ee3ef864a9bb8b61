//! Cleanup and validation of the provider's free-text reply.
//!
//! The model is asked for bare JSON but regularly wraps it in a markdown code
//! block anyway. Fences are stripped, the text is trimmed, parsed as JSON and
//! checked for the required fields.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::ValidationError;
use crate::record::WordRecord;

const FENCE: &str = "```";

/// Opening fence with a `json` tag, e.g. "```json\n". Other tags only lose
/// their backticks, so words after a fence inside string values survive.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static JSON_OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```json\s*").expect("valid regex"));

/// Fence at the very end of the text, with any trailing whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\s*$").expect("valid regex"));

/// Remove markdown code-fence markers from `text`.
///
/// Text without a fence marker is returned untouched. Otherwise `json`
/// opening fences go first, then a trailing fence, then any leftover marker.
/// The result never contains "```", so applying this twice is the same as
/// applying it once.
pub fn strip_fences(text: &str) -> String {
    if !text.contains(FENCE) {
        return text.to_string();
    }

    let text = JSON_OPENING_FENCE.replace_all(text, "");
    let text = TRAILING_FENCE.replace(&text, "");
    text.replace(FENCE, "")
}

/// Strip fences and surrounding whitespace.
pub fn clean_response(raw: &str) -> String {
    strip_fences(raw).trim().to_string()
}

/// Parse already-cleaned text into a validated record.
pub fn parse_record(cleaned: &str) -> Result<WordRecord, ValidationError> {
    let value: serde_json::Value =
        serde_json::from_str(cleaned).map_err(|source| ValidationError::ParseFailure {
            text: cleaned.to_string(),
            source,
        })?;

    WordRecord::from_value(value)
}

/// Turn a raw provider reply into a validated record.
pub fn normalize(raw: &str) -> Result<WordRecord, ValidationError> {
    parse_record(&clean_response(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EPHEMERAL: &str = r#"{"word":"ephemeral","meaning":"lasting a short time","rephrasedMeaning":"doesn't last long","synonyms":["transient","fleeting","momentary"],"antonyms":["permanent","enduring"],"exampleSentence":"Fame can be ephemeral."}"#;

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(strip_fences("  {\"a\": 1}\n"), "  {\"a\": 1}\n");
    }

    #[test]
    fn strips_tagged_block() {
        let raw = format!("```json\n{EPHEMERAL}\n```");
        assert_eq!(clean_response(&raw), EPHEMERAL);
    }

    #[test]
    fn strips_untagged_block_and_stray_markers() {
        assert_eq!(clean_response("```\n{\"a\":1}\n```\n"), "{\"a\":1}");
        assert_eq!(clean_response("{\"a\":1}``` trailing ```"), "{\"a\":1} trailing");
    }

    #[test]
    fn fence_inside_string_value_keeps_following_word() {
        let raw = EPHEMERAL.replace(
            "Fame can be ephemeral.",
            "Wrap code in ```python blocks",
        );
        let record = normalize(&raw).expect("valid record");
        assert_eq!(record.example_sentence(), Some("Wrap code in python blocks"));
    }

    #[test]
    fn json_tag_is_case_insensitive() {
        assert_eq!(clean_response("```JSON\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn strip_fences_is_idempotent() {
        let inputs = [
            "",
            "```",
            "``````",
            "````",
            "`````json `",
            "``\n```json\n`x",
            "```json\n{}\n```",
            "```JSON{}```   ",
            "text ```python\nprint()``` more ```",
            "no fences at all",
            "`single` and ``double``",
            "```\n```\n```",
        ];
        for input in inputs {
            let once = strip_fences(input);
            let twice = strip_fences(&once);
            assert_eq!(twice, once, "not idempotent for {input:?}");
            assert!(!once.contains(FENCE), "fence left in {once:?}");
        }
    }

    #[test]
    fn fenced_and_bare_json_normalize_the_same() {
        let fenced = format!("```json\n{EPHEMERAL}\n```");
        let from_fenced = normalize(&fenced).expect("fenced");
        let from_bare = normalize(EPHEMERAL).expect("bare");
        assert_eq!(from_fenced, from_bare);
    }

    #[test]
    fn reports_first_missing_field_in_order() {
        let raw = r#"{"word":"x","meaning":"m","synonyms":["a"],"exampleSentence":"x."}"#;
        let err = normalize(raw).expect_err("two fields missing");
        assert!(matches!(err, ValidationError::MissingField("rephrasedMeaning")));
    }

    #[test]
    fn fenced_partial_object_reports_meaning() {
        let err = normalize("```json\n{\"word\":\"x\"}\n```").expect_err("partial");
        assert!(matches!(err, ValidationError::MissingField("meaning")));
    }

    #[test]
    fn truncated_json_is_a_parse_failure() {
        let truncated = &EPHEMERAL[..EPHEMERAL.len() / 2];
        match normalize(truncated) {
            Err(ValidationError::ParseFailure { text, .. }) => assert_eq!(text, truncated),
            other => panic!("expected parse failure, got {other:?}"),
        }
    }

    #[test]
    fn prose_around_json_is_a_parse_failure() {
        let raw = format!("Here is your word:\n```json\n{EPHEMERAL}\n```");
        assert!(matches!(
            normalize(&raw),
            Err(ValidationError::ParseFailure { .. })
        ));
    }
}
