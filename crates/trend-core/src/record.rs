// File: crates/trend-core/src/record.rs
// Summary: Record model and CSV loading for (year, temperature_anomaly, scenario) tables.
// Notes:
// - Header lookup is case-insensitive and order-free; extra columns are ignored.
// - Nothing is coerced or skipped: a bad row fails the whole load.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::DataFormatError;

pub const COL_YEAR: &str = "year";
pub const COL_ANOMALY: &str = "temperature_anomaly";
pub const COL_SCENARIO: &str = "scenario";

/// One row of the source table. Immutable once parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub year: i32,
    pub temperature_anomaly: f64,
    pub scenario: String,
}

impl Record {
    pub fn new(year: i32, temperature_anomaly: f64, scenario: impl Into<String>) -> Self {
        Self { year, temperature_anomaly, scenario: scenario.into() }
    }
}

/// All records of a source table, in file order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Load a CSV file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataFormatError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let ds = Self::from_reader(file)?;
        info!(path = %path.display(), records = ds.len(), "loaded dataset");
        Ok(ds)
    }

    /// Parse CSV from any reader. The first row must be a header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataFormatError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.to_lowercase())
            .collect::<Vec<_>>();
        debug!(?headers, "csv headers");

        let idx = |name: &'static str| -> Result<usize, DataFormatError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DataFormatError::MissingColumn { column: name })
        };
        let i_year = idx(COL_YEAR)?;
        let i_anomaly = idx(COL_ANOMALY)?;
        let i_scenario = idx(COL_SCENARIO)?;

        let mut records = Vec::new();
        for (n, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let row = rec.position().map(|p| p.line()).unwrap_or(n as u64 + 2);
            // Field count is enforced by the reader, so these indices exist.
            let field = |i: usize| rec.get(i).unwrap_or_default();

            let year = parse_year(field(i_year), row)?;
            let temperature_anomaly = parse_anomaly(field(i_anomaly), row)?;
            records.push(Record { year, temperature_anomaly, scenario: field(i_scenario).to_string() });
        }

        if records.is_empty() {
            return Err(DataFormatError::Empty);
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Records of one scenario, in insertion order. Not sorted by year.
    pub fn filter<'a>(&'a self, scenario: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| r.scenario == scenario)
    }

    /// Distinct scenario labels in order of first appearance.
    pub fn scenarios(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for r in &self.records {
            if !out.contains(&r.scenario.as_str()) {
                out.push(&r.scenario);
            }
        }
        out
    }

    /// `[min, max]` year over every scenario.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        let mut it = self.records.iter().map(|r| r.year);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// `[min, max]` anomaly over every scenario.
    pub fn anomaly_extent(&self) -> Option<(f64, f64)> {
        let mut it = self.records.iter().map(|r| r.temperature_anomaly);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

fn parse_year(s: &str, row: u64) -> Result<i32, DataFormatError> {
    if let Ok(y) = s.parse::<i32>() {
        return Ok(y);
    }
    // Integral float literals such as "2050.0" are still years.
    match s.parse::<f64>() {
        Ok(v) if !v.is_finite() => Err(DataFormatError::NonFinite { row, column: COL_YEAR }),
        Ok(v) if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 => Ok(v as i32),
        _ => Err(DataFormatError::InvalidNumber { row, column: COL_YEAR, value: s.to_string() }),
    }
}

fn parse_anomaly(s: &str, row: u64) -> Result<f64, DataFormatError> {
    let v = s
        .parse::<f64>()
        .map_err(|_| DataFormatError::InvalidNumber { row, column: COL_ANOMALY, value: s.to_string() })?;
    if !v.is_finite() {
        return Err(DataFormatError::NonFinite { row, column: COL_ANOMALY });
    }
    Ok(v)
}
