pub mod api;
pub mod bot;
pub mod homework;
pub mod logging;

use bot::StatusBot;
use bot::{config::AppConfig, error::StatusBotError};

#[tokio::main]
async fn main() -> Result<(), StatusBotError> {
  dotenvy::dotenv().ok();
  // The handle keeps the rotating file writer alive for the whole process
  let _logger = logging::init()?;
  // Load application config
  let app_config = AppConfig::load_from_env()?;
  // Start polling for status updates
  StatusBot::new(app_config)?.run().await;
  Ok(())
}
