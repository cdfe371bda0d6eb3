/// ELI5 Cards - explains any question in cue-card form using a hosted LLM.
///
/// The crate implements a two-stage prompt pipeline plus a best-effort parser:
/// 1. A topic-extraction call that condenses the user's question into a short label
/// 2. An explanation call, seeded with that topic, whose free-text reply is parsed
///    into titled cue cards and numbered follow-up questions
///
/// # Architecture
///
/// The system uses:
/// - reqwest for the outbound call to the Groq chat-completions API
/// - regex for extracting cue cards and follow-ups from model text
/// - Tokio for the async runtime
/// - tracing for structured logging
///
/// # Example
///
/// ```no_run
/// use eli5_cards::ai::GroqClient;
/// use eli5_cards::config::AppConfig;
/// use eli5_cards::handler::handle_question;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     eli5_cards::setup_logging();
///
///     let config = AppConfig {
///         groq_api_key: "dummy_key".to_string(),
///         model: "llama3-8b-8192".to_string(),
///         api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
///     };
///
///     let client = GroqClient::from_config(&config);
///     let page = handle_question(&client, "Why is the sky blue?").await;
///
///     for card in &page.cue_cards {
///         println!("{}: {}", card.title, card.content);
///     }
///     for followup in &page.followups {
///         println!("- {}", followup);
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod config;
pub mod errors;
pub mod handler;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod prompt;

/// Configure structured logging for the CLI and any embedding service.
///
/// Sets up tracing-subscriber with a plain formatter writing to stderr so that
/// rendered output on stdout stays clean. Call once at process start.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your main function
/// eli5_cards::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
