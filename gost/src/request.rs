// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{angle::SkyCoord, constants::*};
use config::ObservingPeriod;
use reqwest::multipart::{Form, Part};

/// A single-target forecast query, already normalised to degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
  pub right_ascension: f64,
  pub declination: f64,
  pub period_start: String,
  pub period_end: String,
}

impl ForecastRequest {
  /// Period bounds are passed through untouched; the service is the judge of their format.
  pub fn new(
    coord: &SkyCoord,
    period_start: Option<&str>,
    period_end: Option<&str>,
    defaults: &ObservingPeriod,
  ) -> Self {
    Self {
      right_ascension: coord.ra_degrees(),
      declination: coord.dec_degrees(),
      period_start: period_start.unwrap_or(defaults.from.as_str()).to_string(),
      period_end: period_end.unwrap_or(defaults.to.as_str()).to_string(),
    }
  }

  /// Text fields of the submission form, in the order the servlet expects them.
  pub fn form_fields(&self) -> Vec<(&'static str, String)> {
    vec![
      ("serviceCode", SERVICE_CODE.to_string()),
      ("srcname", String::new()),
      ("inputmode", INPUT_MODE.to_string()),
      ("srcra", format!("{:?}", self.right_ascension)),
      ("srcdec", format!("{:?}", self.declination)),
      ("from", self.period_start.clone()),
      ("to", self.period_end.clone()),
    ]
  }

  pub(crate) fn multipart(&self) -> Form {
    let form = self
      .form_fields()
      .into_iter()
      .fold(Form::new(), |form, (name, value)| form.text(name, value));

    // The servlet only accepts multipart bodies, so an empty file part is always attached.
    form.part(
      EMPTY_FILE_FIELD,
      Part::bytes(Vec::<u8>::new()).file_name(EMPTY_FILE_FIELD),
    )
  }
}
