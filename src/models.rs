use serde::Serialize;

/// One titled card from the model's explanation. Display order follows the
/// order the card markers appear in the raw text; titles are not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CueCard {
    pub title: String,
    pub content: String,
}

/// Everything the rendering layer needs for one request: the parsed cards,
/// the follow-up questions, and the trimmed question echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExplainPage {
    pub cue_cards: Vec<CueCard>,
    pub followups: Vec<String>,
    pub user_question: String,
}
