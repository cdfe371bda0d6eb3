//! Best-effort extraction of cue cards and follow-up questions from model text.
//!
//! The model is asked to follow a `**Cue Card N: <title>**` / numbered
//! follow-ups format but nothing enforces it, so everything here degrades to
//! empty output instead of failing the request.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::CueCard;

static CARD_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*Cue Card \d+: (.*?)\*\*").unwrap_or_else(|_| {
        // In practice this cannot fail.
        Regex::new(r"$^").expect("fallback regex compiles")
    })
});

// Tolerates bold markers around the heading, "Follow up" / "Follow-up", any
// casing, and an optional trailing colon. Must occupy a whole line so that a
// passing mention of "follow-up questions" inside card prose is not taken as
// the section marker.
static FOLLOWUP_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*\*{0,2}Follow[- ]?up Questions:?\*{0,2}[ \t]*$")
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

static NUMBERED_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+(.*)$")
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

/// Extract every cue card in order of marker appearance.
///
/// Each card's content runs from the end of its marker line to the nearest
/// following boundary: the next card marker, the follow-up heading, or the end
/// of the text. The `regex` crate has no lookahead, so the non-greedy
/// "span to nearest boundary" contract is implemented as an explicit scan over
/// marker positions. Stated card numbers are not validated; a text with no
/// markers yields an empty list.
#[must_use]
pub fn parse_cue_cards(text: &str) -> Vec<CueCard> {
    let markers: Vec<(usize, usize, &str)> = CARD_MARKER_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let title = caps.get(1)?;
            Some((whole.start(), whole.end(), title.as_str()))
        })
        .collect();

    let heading_starts: Vec<usize> = FOLLOWUP_HEADING_RE
        .find_iter(text)
        .map(|m| m.start())
        .collect();

    let mut cards = Vec::with_capacity(markers.len());
    for (i, (_, marker_end, title)) in markers.iter().enumerate() {
        let next_marker = markers.get(i + 1).map(|m| m.0);
        let next_heading = heading_starts
            .iter()
            .copied()
            .find(|&start| start >= *marker_end);

        let boundary = [next_marker, next_heading, Some(text.len())]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(text.len());

        let content = &text[*marker_end..boundary];
        cards.push(CueCard {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        });
    }

    cards
}

/// Extract the numbered follow-up questions after the follow-up heading.
///
/// The heading is located case-insensitively anywhere in the text; everything
/// after it is scanned for lines of the form `<number>. <question>`. Emission
/// order follows line order, numbers are not required to be sequential or
/// unique, and questions that are empty after trimming are dropped. No heading
/// means no follow-ups, even if numbered lines exist elsewhere.
#[must_use]
pub fn parse_followups(text: &str) -> Vec<String> {
    let Some(heading) = FOLLOWUP_HEADING_RE.find(text) else {
        return Vec::new();
    };

    let block = &text[heading.end()..];
    NUMBERED_LINE_RE
        .captures_iter(block)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|question| !question.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_content_stops_at_next_marker() {
        let text = "**Cue Card 1: First**\nalpha\n\n**Cue Card 2: Second**\nbeta\n";
        let cards = parse_cue_cards(text);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "First");
        assert_eq!(cards[0].content, "alpha");
        assert_eq!(cards[1].title, "Second");
        assert_eq!(cards[1].content, "beta");
    }

    #[test]
    fn card_content_stops_at_followup_heading() {
        let text = "**Cue Card 1: Only**\ncontent here\n\nFollow-up Questions:\n1. Q\n";
        let cards = parse_cue_cards(text);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].content, "content here");
    }

    #[test]
    fn stated_card_numbers_are_not_validated() {
        let text = "**Cue Card 7: Out**\none\n\n**Cue Card 2: Of Order**\ntwo\n";
        let cards = parse_cue_cards(text);
        assert_eq!(cards[0].title, "Out");
        assert_eq!(cards[1].title, "Of Order");
    }

    #[test]
    fn heading_mention_inside_card_prose_is_not_a_boundary() {
        let text = "\
**Cue Card 1: Curious Minds**
Scientists love follow-up questions about gravity.

**Cue Card 2: Next**
More content.

Follow-up Questions:
1. Real one?
";
        let cards = parse_cue_cards(text);
        assert_eq!(cards.len(), 2);
        assert_eq!(
            cards[0].content,
            "Scientists love follow-up questions about gravity."
        );
        assert_eq!(parse_followups(text), vec!["Real one?".to_string()]);
    }

    #[test]
    fn heading_sharing_a_line_with_other_text_does_not_match() {
        let text = "Follow-up Questions: 1. Same-line question?\n";
        assert!(parse_followups(text).is_empty());
    }

    #[test]
    fn followup_heading_is_case_insensitive() {
        let text = "follow up questions:\n1. lower\n";
        assert_eq!(parse_followups(text), vec!["lower".to_string()]);
    }

    #[test]
    fn numbered_lines_without_heading_are_ignored() {
        let text = "1. stray\n2. lines\n";
        assert!(parse_followups(text).is_empty());
    }
}
