// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::constants::*;
use error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::instrument;
use url::Url;

/// Connection settings for the Gaia Observation Forecast Tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GostConfig {
  pub host: String,
  pub session_cookie: String,
  pub timeout_secs: Option<u64>,
  pub user_agent: Option<String>,
  pub period: ObservingPeriod,
}

/// Observation window applied when a request omits its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ObservingPeriod {
  pub from: String,
  pub to: String,
}

impl Default for GostConfig {
  fn default() -> Self {
    Self {
      host: GOST_HOST.to_string(),
      session_cookie: SESSION_COOKIE.to_string(),
      timeout_secs: None,
      user_agent: None,
      period: ObservingPeriod::default(),
    }
  }
}

impl Default for ObservingPeriod {
  fn default() -> Self {
    Self {
      from: DEFAULT_PERIOD_FROM.to_string(),
      to: DEFAULT_PERIOD_TO.to_string(),
    }
  }
}

impl GostConfig {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let content = fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    config.validate()?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }

  pub fn host(mut self, host: impl Into<String>) -> Self {
    self.host = host.into();
    self
  }

  pub fn session_cookie(mut self, name: impl Into<String>) -> Self {
    self.session_cookie = name.into();
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout_secs = Some(timeout.as_secs());
    self
  }

  pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = Some(user_agent.into());
    self
  }

  pub fn period(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
    self.period = ObservingPeriod {
      from: from.into(),
      to: to.into(),
    };
    self
  }

  pub fn request_timeout(&self) -> Option<Duration> {
    self.timeout_secs.map(Duration::from_secs)
  }

  /// Resolves a service path such as `gost/export.jsp` against the configured host.
  pub fn endpoint(&self, path: &str) -> Result<Url, Error> {
    let base = Url::parse(&self.host)
      .map_err(|e| Error::ConfigError(format!("Invalid host '{}': {}", self.host, e)))?;
    base
      .join(path)
      .map_err(|e| Error::ConfigError(format!("Invalid endpoint '{}': {}", path, e)))
  }

  pub fn validate(&self) -> Result<(), Error> {
    self.endpoint("")?;
    if self.session_cookie.trim().is_empty() {
      return Err(Error::ConfigError("Session cookie name cannot be empty".into()));
    }
    Ok(())
  }
}
