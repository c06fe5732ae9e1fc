// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  angle::SkyCoord,
  request::ForecastRequest,
  response::ResultIdentifier,
  session::{GostApi, GostSession},
  table::ForecastTable,
};
use config::GostConfig;
use error::Error;
use tracing::{debug, info, instrument};

/// What a forecast call hands back: the table alone, or the table together with
/// the identifier and the session that produced it.
#[derive(Debug)]
pub enum ForecastOutput<S = GostSession> {
  Table(ForecastTable),
  Full {
    table: ForecastTable,
    identifier: ResultIdentifier,
    session: S,
  },
}

impl<S> ForecastOutput<S> {
  pub fn table(&self) -> &ForecastTable {
    match self {
      ForecastOutput::Table(table) | ForecastOutput::Full { table, .. } => table,
    }
  }

  pub fn identifier(&self) -> Option<&ResultIdentifier> {
    match self {
      ForecastOutput::Table(_) => None,
      ForecastOutput::Full { identifier, .. } => Some(identifier),
    }
  }

  pub fn into_table(self) -> ForecastTable {
    match self {
      ForecastOutput::Table(table) | ForecastOutput::Full { table, .. } => table,
    }
  }
}

pub struct ForecastClient {
  config: GostConfig,
}

impl Default for ForecastClient {
  fn default() -> Self {
    Self::new(GostConfig::default())
  }
}

impl ForecastClient {
  pub fn new(config: GostConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &GostConfig {
    &self.config
  }

  /// Runs one forecast for `coord` on a fresh session.
  ///
  /// Omitted bounds fall back to the configured observing period. With
  /// `full_output` the identifier and session are returned for later reuse.
  #[instrument(skip(self, coord), fields(ra = coord.ra_degrees(), dec = coord.dec_degrees()))]
  pub async fn submit_forecast(
    &self,
    coord: &SkyCoord,
    period_start: Option<&str>,
    period_end: Option<&str>,
    full_output: bool,
  ) -> Result<ForecastOutput, Error> {
    let request = ForecastRequest::new(coord, period_start, period_end, &self.config.period);
    let session = GostSession::open(&self.config)?;
    Self::run_with(session, &request, full_output).await
  }

  /// Drives the warm-up, submit and export exchange over `api`.
  pub async fn run_with<A: GostApi>(
    api: A,
    request: &ForecastRequest,
    full_output: bool,
  ) -> Result<ForecastOutput<A>, Error> {
    // Without a warmed session the servlet answers "The following error occurred: null".
    api.warm_up().await?;
    debug!("Session warmed up");

    info!(
      "Submitting forecast for {} to {}",
      request.period_start, request.period_end
    );
    let submission = api.submit(request).await?;
    let result_id = submission.result_id()?;

    // TODO: poll export.jsp until the computation completes instead of assuming it is ready.
    let identifier = ResultIdentifier::new(api.session_id()?, result_id);
    info!("Forecast accepted as {}", identifier);

    let payload = api.export(&identifier).await?;
    let table = ForecastTable::from_csv(&payload)?;
    info!("Forecast holds {} observations", table.len());

    if full_output {
      Ok(ForecastOutput::Full {
        table,
        identifier,
        session: api,
      })
    } else {
      Ok(ForecastOutput::Table(table))
    }
  }
}

/// Forecast against the public service with default settings.
pub async fn forecast_position(
  coord: &SkyCoord,
  period_start: Option<&str>,
  period_end: Option<&str>,
  full_output: bool,
) -> Result<ForecastOutput, Error> {
  ForecastClient::default()
    .submit_forecast(coord, period_start, period_end, full_output)
    .await
}
