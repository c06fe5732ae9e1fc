// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;

pub use config::{GostConfig, ObservingPeriod};

pub mod constants {
  pub const GOST_HOST: &str = "https://gaia.esac.esa.int";
  pub const SESSION_COOKIE: &str = "JSESSIONID";
  pub const DEFAULT_PERIOD_FROM: &str = "2014-09-26T00:00:00";
  pub const DEFAULT_PERIOD_TO: &str = "2019-06-07T00:00:00";
}
