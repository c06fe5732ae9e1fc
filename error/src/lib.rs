// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("Invalid input: {0}")]
  InvalidInput(String),
  #[error("Remote service error: {0}")]
  RemoteServiceError(String),
  #[error("Failed to parse response: {0}")]
  ParseError(String),
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("HTTP error: {0}")]
  HttpError(#[from] reqwest::Error),
}
