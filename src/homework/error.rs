use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HomeworkError {
  #[error("the API response is not a JSON object")]
  NotAnObject,
  #[error("the API response is an empty object")]
  EmptyResponse,
  #[error("the API response has no 'homeworks' key")]
  MissingHomeworksKey,
  #[error("'homeworks' in the API response is not a list")]
  HomeworksNotAList,
  #[error("homework entry has no 'homework_name' key")]
  MissingHomeworkName,
  #[error("homework entry has no 'status' key")]
  MissingStatus,
  #[error("unknown homework status: {0}")]
  UnknownStatus(String),
}
