// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
  Degree,
  Radian,
  HourAngle,
  Arcminute,
  Arcsecond,
  Milliarcsecond,
}

impl AngleUnit {
  fn degrees_per_unit(self) -> f64 {
    match self {
      AngleUnit::Degree => 1.0,
      AngleUnit::Radian => 180.0 / std::f64::consts::PI,
      AngleUnit::HourAngle => 15.0,
      AngleUnit::Arcminute => 1.0 / 60.0,
      AngleUnit::Arcsecond => 1.0 / 3_600.0,
      AngleUnit::Milliarcsecond => 1.0 / 3_600_000.0,
    }
  }
}

impl FromStr for AngleUnit {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "deg" | "degree" | "degrees" => Ok(AngleUnit::Degree),
      "rad" | "radian" | "radians" => Ok(AngleUnit::Radian),
      "hourangle" | "hour_angle" => Ok(AngleUnit::HourAngle),
      "arcmin" | "arcminute" | "arcminutes" => Ok(AngleUnit::Arcminute),
      "arcsec" | "arcsecond" | "arcseconds" => Ok(AngleUnit::Arcsecond),
      "mas" | "milliarcsecond" | "milliarcseconds" => Ok(AngleUnit::Milliarcsecond),
      other => Err(Error::InvalidInput(format!(
        "'{}' is not an angular unit",
        other
      ))),
    }
  }
}

impl fmt::Display for AngleUnit {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let unit = match self {
      AngleUnit::Degree => "deg",
      AngleUnit::Radian => "rad",
      AngleUnit::HourAngle => "hourangle",
      AngleUnit::Arcminute => "arcmin",
      AngleUnit::Arcsecond => "arcsec",
      AngleUnit::Milliarcsecond => "mas",
    };
    write!(f, "{}", unit)
  }
}

/// An angular quantity that remembers the unit it was given in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
  value: f64,
  unit: AngleUnit,
}

impl Angle {
  pub fn new(value: f64, unit: AngleUnit) -> Self {
    Self { value, unit }
  }

  pub fn degrees(value: f64) -> Self {
    Self::new(value, AngleUnit::Degree)
  }

  pub fn radians(value: f64) -> Self {
    Self::new(value, AngleUnit::Radian)
  }

  /// Builds an angle from a free-form unit name such as `"deg"` or `"arcsec"`.
  pub fn with_unit(value: f64, unit: &str) -> Result<Self, Error> {
    Ok(Self::new(value, unit.parse()?))
  }

  pub fn value(&self) -> f64 {
    self.value
  }

  pub fn unit(&self) -> AngleUnit {
    self.unit
  }

  pub fn to_degrees(&self) -> f64 {
    self.value * self.unit.degrees_per_unit()
  }
}

impl fmt::Display for Angle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.value, self.unit)
  }
}

/// Right ascension and declination of a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyCoord {
  pub ra: Angle,
  pub dec: Angle,
}

impl SkyCoord {
  pub fn new(ra: Angle, dec: Angle) -> Result<Self, Error> {
    for (axis, angle) in [("right ascension", ra), ("declination", dec)] {
      if !angle.value().is_finite() {
        return Err(Error::InvalidInput(format!(
          "{} must be finite, got {}",
          axis, angle
        )));
      }
    }
    Ok(Self { ra, dec })
  }

  pub fn from_degrees(ra: f64, dec: f64) -> Result<Self, Error> {
    Self::new(Angle::degrees(ra), Angle::degrees(dec))
  }

  pub fn from_units(ra: f64, ra_unit: &str, dec: f64, dec_unit: &str) -> Result<Self, Error> {
    Self::new(Angle::with_unit(ra, ra_unit)?, Angle::with_unit(dec, dec_unit)?)
  }

  pub fn ra_degrees(&self) -> f64 {
    self.ra.to_degrees()
  }

  pub fn dec_degrees(&self) -> f64 {
    self.dec.to_degrees()
  }
}
