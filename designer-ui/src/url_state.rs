//! Query string codec for the selection
//!
//! Keys are written in sorted order and values are form-urlencoded, so the
//! same selection always produces the same query string.

use crate::selection::Selection;
use tracing::warn;

/// Decode a query string (with or without the leading `?`) into a selection.
///
/// A repeated key keeps its last value. Undecodable input yields an empty
/// selection rather than an error.
pub fn decode(query: &str) -> Selection {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        return Selection::new();
    }

    match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
        Ok(pairs) => pairs.into_iter().collect(),
        Err(e) => {
            warn!("Ignoring undecodable query string {query:?}: {e}");
            Selection::new()
        }
    }
}

/// Encode a selection as a query string without the leading `?`.
pub fn encode(selection: &Selection) -> String {
    let pairs: Vec<(&str, &str)> = selection.iter().collect();
    // A list of string pairs always serializes
    serde_urlencoded::to_string(pairs).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(pairs: &[(&str, &str)]) -> Selection {
        pairs.iter().copied().collect()
    }

    #[test]
    fn decode_accepts_leading_question_mark() {
        let decoded = decode("?conferenceSeriesId=s1&templateId=banner");
        assert_eq!(
            decoded,
            selection(&[("conferenceSeriesId", "s1"), ("templateId", "banner")])
        );
        assert_eq!(decoded, decode("conferenceSeriesId=s1&templateId=banner"));
    }

    #[test]
    fn decode_empty() {
        assert!(decode("").is_empty());
        assert!(decode("?").is_empty());
    }

    #[test]
    fn decode_repeated_key_keeps_last() {
        let decoded = decode("track=a&track=b");
        assert_eq!(decoded.get("track"), Some("b"));
    }

    #[test]
    fn decode_keeps_unknown_keys() {
        let decoded = decode("templateId=banner&utm_source=mail");
        assert_eq!(decoded.get("utm_source"), Some("mail"));
    }

    #[test]
    fn encode_sorts_keys() {
        let encoded = encode(&selection(&[
            ("templateId", "banner"),
            ("conferenceSeriesId", "s1"),
        ]));
        assert_eq!(encoded, "conferenceSeriesId=s1&templateId=banner");
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        let original = selection(&[
            ("contact", "Ada Lovelace & co"),
            ("query", "a=b?c#d"),
            ("empty", ""),
            ("unicode", "Jyväskylä"),
        ]);
        let encoded = encode(&original);
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('#'));
        assert_eq!(decode(&encoded), original);
    }

    #[test]
    fn encode_empty_selection() {
        assert_eq!(encode(&Selection::new()), "");
    }
}
