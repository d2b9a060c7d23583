use std::collections::HashMap;

use log::{debug, trace};

/// In-memory poll-loop state: the `from_date` cursor plus the dedup records
/// for per-homework notifications and the error channel. Lost on restart.
#[derive(Debug)]
pub struct PollState {
  cursor: i64,
  last_sent: HashMap<String, String>,
  last_error: Option<String>,
}

impl PollState {
  pub fn new(cursor: i64) -> PollState {
    PollState {
      cursor,
      last_sent: HashMap::new(),
      last_error: None,
    }
  }

  pub fn cursor(&self) -> i64 {
    self.cursor
  }

  pub fn advance_cursor(&mut self, to: i64) {
    trace!("[PollState] Cursor advanced {} -> {}", self.cursor, to);
    self.cursor = to;
  }

  /// Records the latest message for a homework. Returns true when the text
  /// differs from the last recorded one, i.e. a notification is due.
  pub fn record_status(&mut self, homework_name: &str, text: &str) -> bool {
    match self.last_sent.get(homework_name) {
      Some(previous) if previous == text => false,
      _ => {
        self.last_sent.insert(homework_name.to_string(), text.to_string());
        true
      }
    }
  }

  /// Same dedup contract as [`record_status`], for the error channel.
  pub fn record_error(&mut self, text: &str) -> bool {
    match &self.last_error {
      Some(previous) if previous == text => false,
      _ => {
        self.last_error = Some(text.to_string());
        true
      }
    }
  }

  /// A clean cycle resets the error slot so a later recurrence of the same
  /// error notifies again.
  pub fn clear_error(&mut self) {
    if self.last_error.take().is_some() {
      debug!("[PollState] Error slot cleared after a successful cycle");
    }
  }
}
