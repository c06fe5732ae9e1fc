// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::constants::ERROR_MARKER;
use error::Error;
use reqwest::StatusCode;
use std::fmt;
use std::str::FromStr;
use tracing::error;

/// Raw reply of the forecast servlet.
#[derive(Debug, Clone)]
pub struct Submission {
  pub status: StatusCode,
  pub body: String,
}

impl Submission {
  pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
    Self {
      status,
      body: body.into(),
    }
  }

  /// Rejects failed submissions and extracts the result id from the reply.
  ///
  /// The servlet answers with a short HTML fragment; the id is the fourth
  /// whitespace-separated token, up to the first tag.
  pub fn result_id(&self) -> Result<String, Error> {
    if !self.status.is_success() {
      error!("Forecast submission failed with status: {}", self.status);
      return Err(Error::RemoteServiceError(format!(
        "Forecast submission failed with status {}",
        self.status
      )));
    }

    if self.body.contains(ERROR_MARKER) {
      error!("Forecast service reported an error: {}", self.body.trim());
      return Err(Error::RemoteServiceError(format!(
        "Forecast service reported an error: {}",
        self.body.trim()
      )));
    }

    let token = self.body.split_whitespace().nth(3).ok_or_else(|| {
      Error::ParseError(format!(
        "Expected a result id in the fourth token of '{}'",
        self.body.trim()
      ))
    })?;

    let result_id = token.split('<').next().unwrap_or_default();
    if result_id.is_empty() {
      return Err(Error::ParseError(format!(
        "Empty result id in token '{}'",
        token
      )));
    }

    Ok(result_id.to_string())
  }
}

/// Address of a computed forecast: `<session-id>/<result-id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultIdentifier {
  pub session_id: String,
  pub result_id: String,
}

impl ResultIdentifier {
  pub fn new(session_id: impl Into<String>, result_id: impl Into<String>) -> Self {
    Self {
      session_id: session_id.into(),
      result_id: result_id.into(),
    }
  }
}

impl fmt::Display for ResultIdentifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.session_id, self.result_id)
  }
}

impl FromStr for ResultIdentifier {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.split_once('/') {
      Some((session_id, result_id)) if !session_id.is_empty() && !result_id.is_empty() => {
        Ok(Self::new(session_id, result_id))
      }
      _ => Err(Error::ParseError(format!(
        "Result identifier '{}' is not of the form <session>/<result>",
        s
      ))),
    }
  }
}
