use anyhow::Result;
use std::env;
use tracing::info;

use eli5_cards::ai::GroqClient;
use eli5_cards::config::AppConfig;
use eli5_cards::handler::handle_question;

#[tokio::main]
async fn main() -> Result<()> {
    eli5_cards::setup_logging();

    let question = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if question.trim().is_empty() {
        eprintln!("Usage: eli5 <question>");
        return Ok(());
    }

    let config = AppConfig::from_env()?;
    info!("Using model {}", config.model);

    let client = GroqClient::from_config(&config);
    let page = handle_question(&client, &question).await;

    for card in &page.cue_cards {
        println!("** {} **", card.title);
        println!("{}\n", card.content);
    }

    if !page.followups.is_empty() {
        println!("Follow-up Questions:");
        for (i, followup) in page.followups.iter().enumerate() {
            println!("{}. {}", i + 1, followup);
        }
    }

    Ok(())
}
