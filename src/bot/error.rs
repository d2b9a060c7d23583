use thiserror::Error;

use crate::{api, homework};

#[derive(Error, Debug)]
pub enum StatusBotError {
  #[error(transparent)]
  Api(#[from] api::error::PracticumApiError),
  #[error(transparent)]
  Homework(#[from] homework::error::HomeworkError),
  #[error(transparent)]
  Telegram(#[from] teloxide::RequestError),
  #[error(transparent)]
  Config(#[from] config::ConfigError),
  #[error(transparent)]
  Logging(#[from] flexi_logger::FlexiLoggerError),
  #[error("required secrets are missing: {0}")]
  MissingSecrets(String),
  #[error("TELEGRAM_CHAT_ID is not a valid chat id: {0}")]
  BadChatId(String),
}
