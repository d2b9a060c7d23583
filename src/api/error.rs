use thiserror::Error;

#[derive(Error, Debug)]
pub enum PracticumApiError {
  #[error("request to the review API failed: {0}")]
  Network(#[from] reqwest::Error),
  #[error("the review API returned HTTP {0}")]
  BadHttpStatus(reqwest::StatusCode),
  #[error("the review API response is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),
}
