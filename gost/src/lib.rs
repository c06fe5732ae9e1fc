// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
//! Programmatic access to the Gaia Observation Forecast Tool (GOST).
pub mod angle;
pub mod forecast;
pub mod request;
pub mod response;
pub mod session;
pub mod table;

pub use angle::{Angle, AngleUnit, SkyCoord};
pub use config::GostConfig;
pub use error::Error;
pub use forecast::{forecast_position, ForecastClient, ForecastOutput};
pub use request::ForecastRequest;
pub use response::{ResultIdentifier, Submission};
pub use session::{GostApi, GostSession};
pub use table::ForecastTable;

pub(crate) mod constants {
  pub(crate) const LANDING_PATH: &str = "gost/";
  pub(crate) const SUBMIT_PATH: &str = "gost/GostServlet";
  pub(crate) const EXPORT_PATH: &str = "gost/export.jsp";
  pub(crate) const EXPORT_FORMAT: &str = "csv";
  pub(crate) const SERVICE_CODE: &str = "1";
  pub(crate) const INPUT_MODE: &str = "single";
  pub(crate) const EMPTY_FILE_FIELD: &str = "csvfilename";
  pub(crate) const ERROR_MARKER: &str = "error";
}
