//! Sampling point observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::land_cover::LandCoverCode;

/// One observation of a sampling point at a reference date.
///
/// Serializes with the dataset's column names so table records match the
/// source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    #[serde(rename = "PointID")]
    pub point_id: String,

    #[serde(rename = "LC_code")]
    pub lc_code: LandCoverCode,

    pub reference_date: NaiveDate,

    pub ndvi: f64,

    pub lon: f64,

    pub lat: f64,
}

impl SamplePoint {
    pub fn new(
        point_id: impl Into<String>,
        lc_code: LandCoverCode,
        reference_date: NaiveDate,
        ndvi: f64,
        lon: f64,
        lat: f64,
    ) -> Self {
        Self {
            point_id: point_id.into(),
            lc_code,
            reference_date,
            ndvi,
            lon,
            lat,
        }
    }
}

/// Column names in dataset order.
pub const COLUMNS: [&str; 6] = ["PointID", "LC_code", "reference_date", "ndvi", "lon", "lat"];
