pub mod error;

use serde_json::Value;

use crate::homework::error::HomeworkError as Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
  Approved,
  Reviewing,
  Rejected,
}

impl HomeworkStatus {
  pub fn parse(raw: &str) -> Option<HomeworkStatus> {
    match raw {
      "approved" => Some(HomeworkStatus::Approved),
      "reviewing" => Some(HomeworkStatus::Reviewing),
      "rejected" => Some(HomeworkStatus::Rejected),
      _ => None,
    }
  }

  pub fn verdict(&self) -> &'static str {
    match self {
      HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
      HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
      HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
    }
  }
}

/// One formatted notification for a single homework entry.
#[derive(Debug, PartialEq, Eq)]
pub struct StatusUpdate {
  pub homework_name: String,
  pub text: String,
}

/// Checks the API payload shape and returns the `homeworks` array verbatim.
/// Per-element validation is deferred to [`parse_status`].
pub fn extract_homeworks(response: &Value) -> Result<&Vec<Value>, Error> {
  let object = response.as_object().ok_or(Error::NotAnObject)?;
  if object.is_empty() {
    return Err(Error::EmptyResponse);
  }
  match object.get("homeworks") {
    Some(Value::Array(homeworks)) => Ok(homeworks),
    Some(_) => Err(Error::HomeworksNotAList),
    None => Err(Error::MissingHomeworksKey),
  }
}

/// Validates one homework entry and formats its notification text.
pub fn parse_status(homework: &Value) -> Result<StatusUpdate, Error> {
  let name = homework
    .get("homework_name")
    .and_then(Value::as_str)
    .ok_or(Error::MissingHomeworkName)?;
  let raw_status = homework.get("status").and_then(Value::as_str).ok_or(Error::MissingStatus)?;
  let status = HomeworkStatus::parse(raw_status).ok_or_else(|| Error::UnknownStatus(raw_status.to_string()))?;

  Ok(StatusUpdate {
    homework_name: name.to_string(),
    text: format!("Изменился статус проверки работы \"{}\". {}", name, status.verdict()),
  })
}
