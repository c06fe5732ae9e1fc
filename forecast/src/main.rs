// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use gost::{ForecastClient, GostConfig, SkyCoord};
use tracing::{info, instrument};

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  setup_logging();
  run(ForecastClient::new(GostConfig::default())).await
}

#[instrument(skip(client))]
async fn run(client: ForecastClient) -> Result<()> {
  let coord = SkyCoord::from_degrees(34.0, -13.0)?;
  let output = client
    .submit_forecast(&coord, None, None, true)
    .await
    .context("Forecast request failed")?;

  if let Some(identifier) = output.identifier() {
    info!("Result available as {}", identifier);
  }

  print!("{}", output.table());
  Ok(())
}
