//! Relevance highlighter: splits text into plain and matched segments so a
//! renderer can emphasize the search term.

use regex::RegexBuilder;

/// Queries shorter than this are not highlighted; one- and zero-character
/// terms match too much of the text to be useful emphasis.
pub const MIN_HIGHLIGHT_QUERY_CHARS: usize = 2;

/// One segment of a decomposed string. Concatenating the `text` of every
/// segment in order reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub text: String,
    pub highlighted: bool,
}

impl HighlightSpan {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Split `text` on every case-insensitive occurrence of `query`.
///
/// Matched segments carry the original casing from `text`, not the query's.
/// Queries under [`MIN_HIGHLIGHT_QUERY_CHARS`] return the whole text as a
/// single unhighlighted segment.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSpan> {
    if query.chars().count() < MIN_HIGHLIGHT_QUERY_CHARS {
        return vec![HighlightSpan::plain(text)];
    }

    // The query is matched literally; escape regex metacharacters.
    let Ok(re) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        // Pathological queries (e.g. over the compiled size limit) degrade
        // to no highlighting rather than an error.
        return vec![HighlightSpan::plain(text)];
    };

    let mut spans = Vec::new();
    let mut last = 0;

    for m in re.find_iter(text) {
        if m.start() > last {
            spans.push(HighlightSpan::plain(&text[last..m.start()]));
        }
        spans.push(HighlightSpan::matched(&text[m.start()..m.end()]));
        last = m.end();
    }

    if last < text.len() || spans.is_empty() {
        spans.push(HighlightSpan::plain(&text[last..]));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(spans: &[HighlightSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_round_trip() {
        let text = "We warranty all Warranty work, warRANTY included.";
        let spans = highlight(text, "warranty");
        assert_eq!(rejoin(&spans), text);
    }

    #[test]
    fn test_matched_segments_keep_original_casing() {
        let spans = highlight("Kitchen and KITCHEN", "kitchen");
        let matched: Vec<&str> = spans
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(matched, vec!["Kitchen", "KITCHEN"]);
    }

    #[test]
    fn test_short_query_suppressed() {
        let spans = highlight("some text", "s");
        assert_eq!(spans, vec![HighlightSpan::plain("some text")]);

        let spans = highlight("some text", "");
        assert_eq!(spans, vec![HighlightSpan::plain("some text")]);
    }

    #[test]
    fn test_no_match_is_single_plain_segment() {
        let spans = highlight("nothing here", "granite");
        assert_eq!(spans, vec![HighlightSpan::plain("nothing here")]);
    }

    #[test]
    fn test_adjacent_matches() {
        let spans = highlight("ababab", "ab");
        assert_eq!(spans.len(), 3);
        assert!(spans.iter().all(|s| s.highlighted));
        assert_eq!(rejoin(&spans), "ababab");
    }

    #[test]
    fn test_match_at_boundaries() {
        let spans = highlight("tile and tile", "tile");
        assert_eq!(spans.len(), 3);
        assert!(spans[0].highlighted);
        assert!(!spans[1].highlighted);
        assert!(spans[2].highlighted);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let spans = highlight("cost is $1.50 total", "$1.50");
        assert_eq!(spans.iter().filter(|s| s.highlighted).count(), 1);
        assert_eq!(rejoin(&spans), "cost is $1.50 total");

        // "." must not act as a wildcard
        let spans = highlight("axb a.b", "a.b");
        let matched: Vec<&str> = spans
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(matched, vec!["a.b"]);
    }

    #[test]
    fn test_empty_text() {
        let spans = highlight("", "query");
        assert_eq!(spans, vec![HighlightSpan::plain("")]);
    }

    #[test]
    fn test_unicode_round_trip() {
        let text = "Façade renovation and FAÇADE repair";
        let spans = highlight(text, "façade");
        assert_eq!(rejoin(&spans), text);
        assert_eq!(spans.iter().filter(|s| s.highlighted).count(), 2);
    }
}
