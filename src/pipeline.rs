//! The two-stage prompt pipeline.
//!
//! Stage one extracts a short topic label from the question; stage two asks
//! for the cue-card explanation, seeded with that topic. The split keeps
//! follow-up questions anchored to the real topic even when the explanation
//! leans on an analogy, so the two calls are deliberately not collapsed into
//! one.

use tracing::info;

use crate::ai::ModelClient;
use crate::errors::ExplainError;
use crate::prompt::{render_explanation_prompt, render_topic_prompt};

/// Output of a full pipeline run.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short topic label from stage one, trimmed but otherwise unvalidated.
    pub topic: String,
    /// Raw text of the stage-two reply, ready for the parser.
    pub raw: String,
}

/// Asks the model for a short topic label describing the question.
///
/// The template requests 5–7 words but whatever the model returns is accepted
/// as-is after trimming. Callers must guard against empty questions.
///
/// # Errors
///
/// Propagates any failure from the model client.
pub async fn extract_topic(
    client: &dyn ModelClient,
    question: &str,
) -> Result<String, ExplainError> {
    let prompt = render_topic_prompt(question);
    let reply = client.invoke(&prompt).await?;
    Ok(reply.trim().to_string())
}

/// Asks the model for the cue-card explanation of `topic`.
///
/// # Errors
///
/// Propagates any failure from the model client.
pub async fn generate_explanation(
    client: &dyn ModelClient,
    topic: &str,
    question: &str,
) -> Result<String, ExplainError> {
    let prompt = render_explanation_prompt(topic, question);
    let reply = client.invoke(&prompt).await?;
    Ok(reply.trim().to_string())
}

/// Runs both stages in order; the second call is conditioned on the first's
/// topic. If the second call fails, the topic is discarded with it.
///
/// # Errors
///
/// Propagates the first failure from either stage.
pub async fn explain(client: &dyn ModelClient, question: &str) -> Result<Explanation, ExplainError> {
    let topic = extract_topic(client, question).await?;
    info!("Extracted topic: {}", topic);

    let raw = generate_explanation(client, &topic, question).await?;
    info!("Generated explanation with {} chars", raw.len());

    Ok(Explanation { topic, raw })
}
