// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  constants::*,
  request::ForecastRequest,
  response::{ResultIdentifier, Submission},
};
use async_trait::async_trait;
use config::GostConfig;
use error::Error;
use reqwest::{
  cookie::{CookieStore, Jar},
  Client,
};
use std::sync::Arc;
use tracing::{debug, error, instrument};
use url::Url;

/// The three exchanges a forecast needs, plus access to the session cookie.
#[async_trait]
pub trait GostApi: Send + Sync {
  async fn warm_up(&self) -> Result<(), Error>;
  async fn submit(&self, request: &ForecastRequest) -> Result<Submission, Error>;
  fn session_id(&self) -> Result<String, Error>;
  async fn export(&self, identifier: &ResultIdentifier) -> Result<Vec<u8>, Error>;
}

/// Cookie-carrying HTTP session against one GOST host.
#[derive(Debug, Clone)]
pub struct GostSession {
  config: GostConfig,
  client: Client,
  jar: Arc<Jar>,
  landing: Url,
}

impl GostSession {
  pub fn open(config: &GostConfig) -> Result<Self, Error> {
    config.validate()?;
    let landing = config.endpoint(LANDING_PATH)?;
    let jar = Arc::new(Jar::default());

    let mut builder = Client::builder().cookie_provider(Arc::clone(&jar));
    if let Some(timeout) = config.request_timeout() {
      builder = builder.timeout(timeout);
    }
    if let Some(user_agent) = &config.user_agent {
      builder = builder.user_agent(user_agent.clone());
    }
    let client = builder.build().map_err(Error::HttpError)?;

    Ok(Self {
      config: config.clone(),
      client,
      jar,
      landing,
    })
  }

  pub fn config(&self) -> &GostConfig {
    &self.config
  }

  pub fn client(&self) -> &Client {
    &self.client
  }
}

#[async_trait]
impl GostApi for GostSession {
  #[instrument(skip(self))]
  async fn warm_up(&self) -> Result<(), Error> {
    let response = self.client.get(self.landing.clone()).send().await?;
    debug!("Warm-up answered with status {}", response.status());
    Ok(())
  }

  #[instrument(skip(self, request), fields(ra = request.right_ascension, dec = request.declination))]
  async fn submit(&self, request: &ForecastRequest) -> Result<Submission, Error> {
    let url = self.config.endpoint(SUBMIT_PATH)?;
    let response = self
      .client
      .post(url)
      .header("cache", "false")
      .header("processData", "false")
      .multipart(request.multipart())
      .send()
      .await
      .map_err(Error::HttpError)?;

    let status = response.status();
    let body = response.text().await.map_err(Error::HttpError)?;
    debug!("Submission answered with status {}", status);

    Ok(Submission::new(status, body))
  }

  fn session_id(&self) -> Result<String, Error> {
    let name = self.config.session_cookie.as_str();
    let cookies = self.jar.cookies(&self.landing).ok_or_else(|| {
      Error::RemoteServiceError(format!("Service did not set the {} cookie", name))
    })?;

    let cookies = cookies
      .to_str()
      .map_err(|e| Error::ParseError(format!("Unreadable cookie header: {}", e)))?;

    cookies
      .split(';')
      .filter_map(|pair| pair.trim().split_once('='))
      .find(|(key, _)| *key == name)
      .map(|(_, value)| value.to_string())
      .ok_or_else(|| Error::RemoteServiceError(format!("Service did not set the {} cookie", name)))
  }

  #[instrument(skip(self, identifier), fields(id = %identifier))]
  async fn export(&self, identifier: &ResultIdentifier) -> Result<Vec<u8>, Error> {
    let mut url = self.config.endpoint(EXPORT_PATH)?;
    url
      .query_pairs_mut()
      .append_pair("id", &identifier.to_string())
      .append_pair("format", EXPORT_FORMAT);

    let response = self.client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
      error!("Export request failed with status: {}", status);
      return Err(Error::RemoteServiceError(format!(
        "Export of {} failed with status {}",
        identifier, status
      )));
    }

    let payload = response.bytes().await?;
    debug!("Fetched {} bytes of export", payload.len());
    Ok(payload.to_vec())
  }
}
