//! Delimited-text loading for sampling point observations.
//!
//! Columns are renamed by position, so header names in the file do not
//! matter. Two layouts are accepted:
//! - six columns: `PointID, LC_code, reference_date, ndvi, lon, lat`
//! - seven columns, where the first is a row index written by pandas and is
//!   dropped

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use pheno_common::{LandCoverCode, PhenoError, PhenoResult, SamplePoint, COLUMNS};

/// Options for reading a dataset file.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Load every observation from a file on disk.
pub fn load_points(path: &Path, options: &LoadOptions) -> PhenoResult<Vec<SamplePoint>> {
    let file = File::open(path)
        .map_err(|e| PhenoError::DatasetNotFound(format!("{}: {}", path.display(), e)))?;
    read_points(file, options)
}

/// Read observations from any reader. The first line must be a header.
pub fn read_points<R: Read>(reader: R, options: &LoadOptions) -> PhenoResult<Vec<SamplePoint>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let header_len = rdr.headers().map_err(csv_error)?.len();
    let offset = column_offset(header_len)?;

    let mut points = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_error)?;
        points.push(parse_record(&record, offset)?);
    }

    tracing::debug!(rows = points.len(), "Parsed dataset records");
    Ok(points)
}

/// Number of leading columns to skip for a header of `len` columns.
fn column_offset(len: usize) -> PhenoResult<usize> {
    match len {
        6 => Ok(0),
        7 => Ok(1),
        other => Err(PhenoError::MalformedDataset {
            line: 1,
            message: format!(
                "expected {} columns (optionally preceded by an index column), found {}",
                COLUMNS.len(),
                other
            ),
        }),
    }
}

fn parse_record(record: &StringRecord, offset: usize) -> PhenoResult<SamplePoint> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let malformed = |message: String| PhenoError::MalformedDataset { line, message };

    if record.len() != COLUMNS.len() + offset {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            COLUMNS.len() + offset,
            record.len()
        )));
    }

    let field = |i: usize| record.get(offset + i).unwrap_or("");

    let point_id = field(0);
    if point_id.is_empty() {
        return Err(malformed("empty PointID".to_string()));
    }

    let lc_code = parse_land_cover(field(1))
        .ok_or_else(|| malformed(format!("invalid LC_code '{}'", field(1))))?;

    let reference_date = parse_reference_date(field(2))
        .ok_or_else(|| malformed(format!("invalid reference_date '{}'", field(2))))?;

    let number = |i: usize| -> PhenoResult<f64> {
        field(i)
            .parse::<f64>()
            .map_err(|_| malformed(format!("invalid {} '{}'", COLUMNS[i], field(i))))
    };
    // ndvi may be missing (NaN); coordinates may not
    let coordinate = |i: usize| -> PhenoResult<f64> {
        let value = number(i)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(malformed(format!("non-finite {} '{}'", COLUMNS[i], field(i))))
        }
    };

    Ok(SamplePoint {
        point_id: point_id.to_string(),
        lc_code,
        reference_date,
        ndvi: number(3)?,
        lon: coordinate(4)?,
        lat: coordinate(5)?,
    })
}

/// Integer codes, also tolerating a float rendering such as `41.0`.
fn parse_land_cover(s: &str) -> Option<LandCoverCode> {
    if let Ok(code) = s.parse::<LandCoverCode>() {
        return Some(code);
    }
    let value = s.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(LandCoverCode(value as i32))
    } else {
        None
    }
}

/// Parse a calendar date, accepting a date-only or a datetime rendering.
pub fn parse_reference_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

fn csv_error(err: csv::Error) -> PhenoError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    PhenoError::MalformedDataset {
        line,
        message: err.to_string(),
    }
}
