//! Answer markup: splits `[label](url)` spans out of answer text.
//!
//! Anything that is not a well-formed link span is passed through as literal
//! text, so malformed markup renders as written instead of erroring.

use regex::Regex;
use std::sync::OnceLock;

/// One rendered piece of an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSegment {
    /// Literal text, rendered as-is.
    Text(String),
    /// A hyperlink; `label` is the visible text.
    Link { label: String, url: String },
}

impl AnswerSegment {
    /// The text a reader sees for this segment.
    pub fn visible_text(&self) -> &str {
        match self {
            AnswerSegment::Text(text) => text,
            AnswerSegment::Link { label, .. } => label,
        }
    }
}

fn link_pattern() -> &'static Regex {
    static LINK_RE: OnceLock<Regex> = OnceLock::new();
    LINK_RE.get_or_init(|| Regex::new(r"\[([^\[\]]+)\]\(([^()]+)\)").expect("link pattern is valid"))
}

/// Scan an answer for `[label](url)` spans.
///
/// Returns text and link segments in order. An unmatched `[`, an empty
/// label, or a span with no `(...)` part is not a link and stays literal.
pub fn parse_answer_markup(answer: &str) -> Vec<AnswerSegment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in link_pattern().captures_iter(answer) {
        let m = caps.get(0).expect("capture group 0 always present");
        if m.start() > last {
            segments.push(AnswerSegment::Text(answer[last..m.start()].to_string()));
        }
        segments.push(AnswerSegment::Link {
            label: caps[1].to_string(),
            url: caps[2].to_string(),
        });
        last = m.end();
    }

    if last < answer.len() || segments.is_empty() {
        segments.push(AnswerSegment::Text(answer[last..].to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> AnswerSegment {
        AnswerSegment::Text(s.to_string())
    }

    fn link(label: &str, url: &str) -> AnswerSegment {
        AnswerSegment::Link {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_single_link_with_surrounding_text() {
        let segments = parse_answer_markup("See our [Financing Page](/financing) for details.");
        assert_eq!(
            segments,
            vec![
                text("See our "),
                link("Financing Page", "/financing"),
                text(" for details."),
            ]
        );
    }

    #[test]
    fn test_plain_text_is_one_segment() {
        let segments = parse_answer_markup("No markup here.");
        assert_eq!(segments, vec![text("No markup here.")]);
    }

    #[test]
    fn test_multiple_links() {
        let segments =
            parse_answer_markup("[Contact](/contact) or read the [FAQ](/faq) first.");
        assert_eq!(
            segments,
            vec![
                link("Contact", "/contact"),
                text(" or read the "),
                link("FAQ", "/faq"),
                text(" first."),
            ]
        );
    }

    #[test]
    fn test_unterminated_bracket_stays_literal() {
        let segments = parse_answer_markup("An unmatched [ bracket stays put.");
        assert_eq!(segments, vec![text("An unmatched [ bracket stays put.")]);
    }

    #[test]
    fn test_label_without_url_part_stays_literal() {
        let segments = parse_answer_markup("Just [a label] and no url.");
        assert_eq!(segments, vec![text("Just [a label] and no url.")]);
    }

    #[test]
    fn test_empty_url_stays_literal() {
        let segments = parse_answer_markup("Broken [label]() span.");
        assert_eq!(segments, vec![text("Broken [label]() span.")]);
    }

    #[test]
    fn test_visible_text_reconstruction() {
        let answer = "See our [Financing Page](/financing) for details.";
        let visible: String = parse_answer_markup(answer)
            .iter()
            .map(|s| s.visible_text())
            .collect();
        assert_eq!(visible, "See our Financing Page for details.");
    }

    #[test]
    fn test_answer_that_is_only_a_link() {
        let segments = parse_answer_markup("[Gallery](/gallery)");
        assert_eq!(segments, vec![link("Gallery", "/gallery")]);
    }

    #[test]
    fn test_empty_answer() {
        assert_eq!(parse_answer_markup(""), vec![text("")]);
    }
}
