use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use eli5_cards::ai::ModelClient;
use eli5_cards::errors::ExplainError;
use eli5_cards::pipeline::{explain, extract_topic, generate_explanation};

/// Test double that replays scripted replies and records every prompt it saw.
struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, ExplainError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new(replies: Vec<Result<String, ExplainError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn seen_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for ScriptedClient {
    async fn invoke(&self, prompt: &str) -> Result<String, ExplainError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("model invoked more times than scripted")
    }
}

#[tokio::test]
async fn test_explain_sequences_two_calls_and_threads_the_topic() {
    let client = ScriptedClient::new(vec![
        Ok("  Gravity and falling objects  ".to_string()),
        Ok("**Cue Card 1: Down!**\nThings fall.\n".to_string()),
    ]);

    let explanation = explain(&client, "Why do things fall?").await.unwrap();
    assert_eq!(explanation.topic, "Gravity and falling objects");
    assert_eq!(explanation.raw, "**Cue Card 1: Down!**\nThings fall.");

    let prompts = client.seen_prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("Why do things fall?"));
    assert!(prompts[1].contains("Gravity and falling objects"));
    assert!(prompts[1].contains("Why do things fall?"));
}

#[tokio::test]
async fn test_extract_topic_trims_model_reply() {
    let client = ScriptedClient::new(vec![Ok("\n  How compilers work  \n".to_string())]);
    let topic = extract_topic(&client, "what does rustc do?").await.unwrap();
    assert_eq!(topic, "How compilers work");
}

#[tokio::test]
async fn test_topic_outside_word_guidance_is_accepted_as_is() {
    // The template asks for 5-7 words but nothing enforces it.
    let long_topic = "a very long rambling topic label that ignores the word limit entirely";
    let client = ScriptedClient::new(vec![Ok(long_topic.to_string())]);
    let topic = extract_topic(&client, "anything").await.unwrap();
    assert_eq!(topic, long_topic);
}

#[tokio::test]
async fn test_generate_explanation_uses_both_topic_and_question() {
    let client = ScriptedClient::new(vec![Ok("raw reply".to_string())]);
    let raw = generate_explanation(&client, "photosynthesis", "how do plants eat?")
        .await
        .unwrap();
    assert_eq!(raw, "raw reply");

    let prompts = client.seen_prompts();
    assert!(prompts[0].contains("**photosynthesis**"));
    assert!(prompts[0].contains("how do plants eat?"));
}

#[tokio::test]
async fn test_first_stage_failure_stops_the_pipeline() {
    let client = ScriptedClient::new(vec![Err(ExplainError::Provider(
        "status 503".to_string(),
    ))]);

    let err = explain(&client, "why?").await.unwrap_err();
    assert!(err.to_string().contains("status 503"));
    // No second call happened.
    assert_eq!(client.seen_prompts().len(), 1);
}

#[tokio::test]
async fn test_second_stage_failure_discards_the_topic() {
    let client = ScriptedClient::new(vec![
        Ok("some topic".to_string()),
        Err(ExplainError::Http("connection reset".to_string())),
    ]);

    let err = explain(&client, "why?").await.unwrap_err();
    assert!(err.to_string().contains("connection reset"));
    assert_eq!(client.seen_prompts().len(), 2);
}
