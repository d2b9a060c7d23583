use std::time::Duration;

use config::Config;
use log::info;
use serde::{Deserialize, Serialize};
use teloxide::types::ChatId;

use super::error::StatusBotError;

fn default_poll_interval_sec() -> u64 {
  600
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AppConfig {
  #[serde(default)]
  practicum_token: String,
  #[serde(default)]
  telegram_token: String,
  #[serde(default)]
  telegram_chat_id: String,
  #[serde(default = "default_poll_interval_sec")]
  poll_interval_sec: u64,
}

impl AppConfig {
  pub fn load_from_env() -> Result<AppConfig, StatusBotError> {
    info!("[Config] Application config is getting loaded from env");
    let serialized = Config::builder().add_source(config::Environment::default()).build()?;
    let deserialized = serialized.try_deserialize::<Self>()?;
    info!("[Config] Application config has been loaded");
    Ok(deserialized)
  }

  /// True iff all three required secrets are present and non-empty.
  pub fn check_tokens(&self) -> bool {
    !self.practicum_token.is_empty() && !self.telegram_token.is_empty() && !self.telegram_chat_id.is_empty()
  }

  pub fn missing_secrets(&self) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if self.practicum_token.is_empty() {
      missing.push("PRACTICUM_TOKEN");
    }
    if self.telegram_token.is_empty() {
      missing.push("TELEGRAM_TOKEN");
    }
    if self.telegram_chat_id.is_empty() {
      missing.push("TELEGRAM_CHAT_ID");
    }
    missing
  }

  pub fn practicum_token(&self) -> &str {
    &self.practicum_token
  }

  pub fn bot_token_str(&self) -> &str {
    &self.telegram_token
  }

  pub fn notify_chat_id(&self) -> Result<ChatId, StatusBotError> {
    self
      .telegram_chat_id
      .parse::<i64>()
      .map(ChatId)
      .map_err(|_| StatusBotError::BadChatId(self.telegram_chat_id.clone()))
  }

  pub fn poll_interval(&self) -> Duration {
    Duration::from_secs(self.poll_interval_sec)
  }
}
