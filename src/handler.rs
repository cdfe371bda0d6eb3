//! Request boundary: turns a raw form/CLI input into a renderable page.
//!
//! This is the only place pipeline errors are caught. They never propagate
//! further; the user sees a single "Oops!" card instead.

use tracing::{error, info};

use crate::ai::ModelClient;
use crate::models::{CueCard, ExplainPage};
use crate::parser::{parse_cue_cards, parse_followups};
use crate::pipeline;

/// Handles one question end to end.
///
/// Whitespace-only input short-circuits: the pipeline is never invoked and
/// both output lists stay empty. Any failure from either model call becomes
/// one synthetic error card with the failure detail as its content.
pub async fn handle_question(client: &dyn ModelClient, raw_input: &str) -> ExplainPage {
    let user_question = raw_input.trim().to_string();
    if user_question.is_empty() {
        return ExplainPage {
            user_question,
            ..ExplainPage::default()
        };
    }

    match pipeline::explain(client, &user_question).await {
        Ok(explanation) => {
            let cue_cards = parse_cue_cards(&explanation.raw);
            let followups = parse_followups(&explanation.raw);
            info!(
                "Parsed {} cue cards and {} follow-ups for topic '{}'",
                cue_cards.len(),
                followups.len(),
                explanation.topic
            );
            ExplainPage {
                cue_cards,
                followups,
                user_question,
            }
        }
        Err(e) => {
            error!("Explanation pipeline failed: {}", e);
            ExplainPage {
                cue_cards: vec![CueCard {
                    title: "Oops!".to_string(),
                    content: format!("Something went wrong: {e}"),
                }],
                followups: Vec::new(),
                user_question,
            }
        }
    }
}
