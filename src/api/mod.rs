pub mod error;

use log::{debug, error};
use reqwest::{header::AUTHORIZATION, StatusCode};
use serde_json::Value;

use crate::api::error::PracticumApiError as Error;

static ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

// Client for the single homework-statuses endpoint of the review API
pub struct PracticumClient {
  http: reqwest::Client,
  token: String,
  endpoint: String,
}

impl PracticumClient {
  pub fn new(token: &str) -> PracticumClient {
    PracticumClient::with_endpoint(token, ENDPOINT)
  }

  pub fn with_endpoint(token: &str, endpoint: &str) -> PracticumClient {
    PracticumClient {
      http: reqwest::Client::new(),
      token: token.to_string(),
      endpoint: endpoint.to_string(),
    }
  }

  /// Fetches homework updates that happened after `since` (unix seconds).
  ///
  /// The payload is returned as raw JSON; shape validation is the caller's
  /// concern. Nothing is retried here, the polling loop owns recovery.
  pub async fn fetch_updates(&self, since: i64) -> Result<Value, Error> {
    debug!("[PracticumClient] Start fetching updates (from_date={})...", since);
    let response = self
      .http
      .get(&self.endpoint)
      .header(AUTHORIZATION, format!("OAuth {}", self.token))
      .query(&[("from_date", since)])
      .send()
      .await
      .map_err(|err| {
        error!("[PracticumClient] Request to the review API failed: {}", err);
        Error::Network(err)
      })?;

    let status = response.status();
    if status != StatusCode::OK {
      error!("[PracticumClient] The review API returned HTTP {}", status);
      return Err(Error::BadHttpStatus(status));
    }

    let body = response.text().await.map_err(|err| {
      error!("[PracticumClient] Unable to read the response body: {}", err);
      Error::Network(err)
    })?;

    let payload = serde_json::from_str(&body).map_err(|err| {
      error!("[PracticumClient] The response body is not valid JSON: {}", err);
      Error::Json(err)
    })?;

    debug!("[PracticumClient] Finish fetching updates");
    Ok(payload)
  }
}
