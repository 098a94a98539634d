//! Daily fun-fact Telegram bot.
//!
//! Posts a short fun fact to the configured chats once a day, and answers
//! the /fact command and "fact" inline queries on demand. Facts come from
//! the OpenAI Chat Completions API, deduplicated against a bounded history
//! kept in a JSON file.
//!
//! Configuration is environment-sourced (a `.env` file is honored):
//! `TELEGRAM_BOT_TOKEN`, `OPENAI_API_KEY`, `TELEGRAM_CHANNEL_ID`, and
//! optionally `FACTS_FILE`.

mod bot;
mod config;
mod delivery;
mod schedule;

use config::Config;
use factbot_core::{FactGenerator, FactStore};
use openai::OpenAi;
use std::sync::Arc;
use teloxide::Bot;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "factbot=info,teloxide=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let client = OpenAi::new(&config.openai_api_key);
    let store = FactStore::new(&config.facts_path);
    let generator = Arc::new(Mutex::new(FactGenerator::new(client, store)));

    let bot = Bot::new(&config.bot_token);

    tokio::spawn(schedule::run_daily_broadcast(
        bot.clone(),
        generator.clone(),
        config.broadcast_chats.clone(),
    ));

    tracing::info!("bot is running");
    bot::run_dispatcher(bot, generator).await;

    Ok(())
}
