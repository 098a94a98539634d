//! Environment-sourced process configuration.

use std::path::PathBuf;
use teloxide::types::ChatId;
use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    #[error("TELEGRAM_CHANNEL_ID contains an invalid chat id: {0:?}")]
    InvalidChatId(String),
}

/// Process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token.
    pub bot_token: String,

    /// OpenAI API key.
    pub openai_api_key: String,

    /// Chats receiving the scheduled broadcast.
    pub broadcast_chats: Vec<ChatId>,

    /// Path of the fact history file.
    pub facts_path: PathBuf,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `TELEGRAM_CHANNEL_ID` may hold a comma-separated list of chat ids;
    /// every listed chat receives the daily broadcast.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bot_token = require("TELEGRAM_BOT_TOKEN")?;
        let openai_api_key = require("OPENAI_API_KEY")?;
        let broadcast_chats = parse_chat_ids(&require("TELEGRAM_CHANNEL_ID")?)?;

        let facts_path = std::env::var("FACTS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("facts.json"));

        Ok(Self {
            bot_token,
            openai_api_key,
            broadcast_chats,
            facts_path,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parse_chat_ids(raw: &str) -> Result<Vec<ChatId>, ConfigError> {
    let mut chats = Vec::new();

    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let id = part
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidChatId(part.to_string()))?;
        chats.push(ChatId(id));
    }

    if chats.is_empty() {
        return Err(ConfigError::Missing("TELEGRAM_CHANNEL_ID"));
    }

    Ok(chats)
}
