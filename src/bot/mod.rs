pub mod config;
pub mod error;
pub mod state;

use std::time::Duration;

use itertools::free::join;
use log::{debug, error, info, warn};
use serde_json::Value;
use teloxide::{requests::Requester, types::ChatId, Bot};

use crate::{
  api::PracticumClient,
  bot::{config::AppConfig, error::StatusBotError as Error, state::PollState},
  homework::{error::HomeworkError, extract_homeworks, parse_status},
};

pub struct StatusBot {
  bot: Bot,
  chat_id: ChatId,
  client: PracticumClient,
  state: PollState,
  poll_interval: Duration,
}

impl StatusBot {
  pub fn new(cfg: AppConfig) -> Result<Self, Error> {
    info!("[StatusBot] Bot is getting created");

    if !cfg.check_tokens() {
      let missing = join(cfg.missing_secrets(), ", ");
      error!("[StatusBot] Required secrets are missing: {}", missing);
      return Err(Error::MissingSecrets(missing));
    }

    let chat_id = cfg.notify_chat_id()?;
    let client = PracticumClient::new(cfg.practicum_token());
    let bot = Bot::new(cfg.bot_token_str());

    // Only updates that happen after startup are reported
    let state = PollState::new(chrono::Utc::now().timestamp());

    let status_bot = StatusBot {
      bot,
      chat_id,
      client,
      state,
      poll_interval: cfg.poll_interval(),
    };

    info!("[StatusBot] Bot successfully created");
    Ok(status_bot)
  }

  /// Runs the poll cycle forever. Every error past startup is reported to
  /// the chat (deduplicated) and looped past; the sleep is unconditional.
  pub async fn run(&mut self) {
    info!(
      "[StatusBot] Bot started, polling every {}s (chat_id={})",
      self.poll_interval.as_secs(),
      self.chat_id
    );
    loop {
      match self.poll_once().await {
        Ok(()) => self.state.clear_error(),
        Err(err) => {
          error!("[StatusBot] Poll cycle failed: {}", err);
          let text = format!("Сбой в работе программы: {}", err);
          if self.state.record_error(&text) {
            self.notify(&text).await;
          }
        }
      }
      tokio::time::sleep(self.poll_interval).await;
    }
  }

  async fn poll_once(&mut self) -> Result<(), Error> {
    let response = self.client.fetch_updates(self.state.cursor()).await?;
    let messages = StatusBot::collect_updates(&response, &mut self.state)?;
    for text in &messages {
      self.notify(text).await;
    }
    Ok(())
  }

  /// Validates a fetched payload against the poll state: returns the texts
  /// that are due for delivery and advances the cursor once the whole
  /// response has been processed.
  fn collect_updates(response: &Value, state: &mut PollState) -> Result<Vec<String>, HomeworkError> {
    let homeworks = extract_homeworks(response)?;
    if homeworks.is_empty() {
      debug!("[StatusBot] The response carries no homeworks, nothing to report");
    }

    let mut messages = Vec::new();
    for homework in homeworks {
      let update = parse_status(homework)?;
      if state.record_status(&update.homework_name, &update.text) {
        messages.push(update.text);
      } else {
        debug!("[StatusBot] Status of \"{}\" is unchanged, skipping", update.homework_name);
      }
    }

    match response.get("current_date").and_then(Value::as_i64) {
      Some(current_date) => state.advance_cursor(current_date),
      None => warn!("[StatusBot] The response has no current_date, keeping cursor at {}", state.cursor()),
    }

    Ok(messages)
  }

  /// Best-effort delivery: a failed send is logged and swallowed so a
  /// Telegram outage never takes the poll loop down.
  async fn notify(&self, text: &str) {
    if let Err(err) = self.deliver(text).await {
      error!("[StatusBot] Unable to deliver message to chat_id={}: {}", self.chat_id, err);
    }
  }

  async fn deliver(&self, text: &str) -> Result<(), Error> {
    self.bot.send_message(self.chat_id, text).await?;
    info!("[StatusBot] Sent text='{}' to chat_id={}", text, self.chat_id);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn reviewing_response() -> Value {
    json!({
      "homeworks": [{"homework_name": "hw01", "status": "reviewing"}],
      "current_date": 1_700_000_100
    })
  }

  #[test]
  fn unchanged_status_notifies_exactly_once_across_cycles() {
    let mut state = PollState::new(1_700_000_000);

    let first = StatusBot::collect_updates(&reviewing_response(), &mut state).unwrap();
    assert_eq!(
      first,
      vec!["Изменился статус проверки работы \"hw01\". Работа взята на проверку ревьюером.".to_string()]
    );

    let second = StatusBot::collect_updates(&reviewing_response(), &mut state).unwrap();
    assert!(second.is_empty());
  }

  #[test]
  fn status_change_notifies_again_with_the_new_text() {
    let mut state = PollState::new(1_700_000_000);
    StatusBot::collect_updates(&reviewing_response(), &mut state).unwrap();

    let approved = json!({
      "homeworks": [{"homework_name": "hw01", "status": "approved"}],
      "current_date": 1_700_000_200
    });
    let messages = StatusBot::collect_updates(&approved, &mut state).unwrap();
    assert_eq!(
      messages,
      vec!["Изменился статус проверки работы \"hw01\". Работа проверена: ревьюеру всё понравилось. Ура!".to_string()]
    );
  }

  #[test]
  fn cursor_advances_even_when_nothing_is_due() {
    let mut state = PollState::new(1_700_000_000);
    StatusBot::collect_updates(&reviewing_response(), &mut state).unwrap();
    assert_eq!(state.cursor(), 1_700_000_100);

    // Same payload again: no messages, cursor still follows current_date
    let repeat = json!({
      "homeworks": [{"homework_name": "hw01", "status": "reviewing"}],
      "current_date": 1_700_000_300
    });
    let messages = StatusBot::collect_updates(&repeat, &mut state).unwrap();
    assert!(messages.is_empty());
    assert_eq!(state.cursor(), 1_700_000_300);
  }

  #[test]
  fn empty_homeworks_skip_notification_but_advance_cursor() {
    let mut state = PollState::new(1_700_000_000);
    let response = json!({"homeworks": [], "current_date": 1_700_000_400});
    let messages = StatusBot::collect_updates(&response, &mut state).unwrap();
    assert!(messages.is_empty());
    assert_eq!(state.cursor(), 1_700_000_400);
  }

  #[test]
  fn missing_current_date_keeps_the_cursor() {
    let mut state = PollState::new(1_700_000_000);
    let response = json!({"homeworks": [{"homework_name": "hw01", "status": "rejected"}]});
    let messages = StatusBot::collect_updates(&response, &mut state).unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(state.cursor(), 1_700_000_000);
  }

  #[test]
  fn shape_error_leaves_the_cursor_untouched() {
    let mut state = PollState::new(1_700_000_000);
    let response = json!({"homeworks": "not-a-list", "current_date": 1_700_000_500});
    assert!(StatusBot::collect_updates(&response, &mut state).is_err());
    assert_eq!(state.cursor(), 1_700_000_000);
  }

  #[test]
  fn bogus_status_surfaces_an_unknown_status_error() {
    let mut state = PollState::new(1_700_000_000);
    let response = json!({
      "homeworks": [{"homework_name": "hw01", "status": "bogus"}],
      "current_date": 1_700_000_600
    });
    let err = StatusBot::collect_updates(&response, &mut state).unwrap_err();
    assert_eq!(err, HomeworkError::UnknownStatus("bogus".to_string()));
  }
}
