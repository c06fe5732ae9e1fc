// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use serde::Serialize;
use std::fmt;

/// Forecast rows exactly as exported by the service, keyed by the raw CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastTable {
  headers: Vec<String>,
  rows: Vec<Vec<String>>,
}

impl ForecastTable {
  pub fn from_csv(payload: &[u8]) -> Result<Self, Error> {
    let mut reader = csv::ReaderBuilder::new()
      .has_headers(true)
      .from_reader(payload);

    let headers: Vec<String> = reader
      .headers()
      .map_err(|e| Error::ParseError(format!("Invalid CSV header: {}", e)))?
      .iter()
      .map(str::to_string)
      .collect();

    if headers.iter().all(|h| h.is_empty()) {
      return Err(Error::ParseError("CSV export has no header row".into()));
    }

    let rows = reader
      .records()
      .map(|record| {
        record
          .map(|r| r.iter().map(str::to_string).collect())
          .map_err(|e| Error::ParseError(format!("Invalid CSV record: {}", e)))
      })
      .collect::<Result<Vec<Vec<String>>, Error>>()?;

    Ok(Self { headers, rows })
  }

  pub fn headers(&self) -> &[String] {
    &self.headers
  }

  pub fn rows(&self) -> &[Vec<String>] {
    &self.rows
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub fn column(&self, name: &str) -> Option<Vec<&str>> {
    let idx = self.headers.iter().position(|h| h == name)?;
    Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
  }
}

impl fmt::Display for ForecastTable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let widths: Vec<usize> = self
      .headers
      .iter()
      .enumerate()
      .map(|(idx, header)| {
        self
          .rows
          .iter()
          .map(|row| row[idx].chars().count())
          .chain(std::iter::once(header.chars().count()))
          .max()
          .unwrap_or(0)
      })
      .collect();

    write_row(f, &self.headers, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(f, &rule, &widths)?;
    for row in &self.rows {
      write_row(f, row, &widths)?;
    }
    Ok(())
  }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
  let line = cells
    .iter()
    .zip(widths)
    .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
    .collect::<Vec<_>>()
    .join("  ");
  writeln!(f, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_header_and_rows() {
    let table = ForecastTable::from_csv(b"a,b\n1,2\n").unwrap();
    assert_eq!(table.headers(), ["a", "b"]);
    assert_eq!(table.rows(), [vec!["1".to_string(), "2".to_string()]]);
    assert_eq!(table.len(), 1);
  }

  #[test]
  fn header_only_export_is_an_empty_table() {
    let table = ForecastTable::from_csv(b"Target,ObservationTimeAtGaia[UTC]\n").unwrap();
    assert!(table.is_empty());
    assert_eq!(table.headers().len(), 2);
  }

  #[test]
  fn ragged_rows_are_a_parse_error() {
    let result = ForecastTable::from_csv(b"a,b\n1,2,3\n");
    assert!(matches!(result, Err(Error::ParseError(_))));
  }

  #[test]
  fn empty_payload_is_a_parse_error() {
    assert!(matches!(
      ForecastTable::from_csv(b""),
      Err(Error::ParseError(_))
    ));
  }

  #[test]
  fn column_lookup_by_raw_header() {
    let table = ForecastTable::from_csv(b"Target,ccdRow\nx,3\ny,7\n").unwrap();
    assert_eq!(table.column("ccdRow"), Some(vec!["3", "7"]));
    assert_eq!(table.column("missing"), None);
  }

  #[test]
  fn display_aligns_columns() {
    let table = ForecastTable::from_csv(b"a,long\n100,2\n").unwrap();
    assert_eq!(table.to_string(), "a    long\n---  ----\n100  2\n");
  }
}
