//! The immutable in-memory dataset.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

use pheno_common::{
    BoundingBox, DoyCalendar, DoyPairing, LandCoverCode, LandCoverColorScale, PhenoError,
    PhenoResult, SamplePoint,
};

use crate::loader::{load_points, LoadOptions};

/// Sampling point observations plus the facts derived from them at load.
///
/// Nothing here changes after construction; selections borrow rows and
/// build their own filtered copies.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    points: Vec<SamplePoint>,
    calendar: DoyCalendar,
    color_scale: LandCoverColorScale,
    extent: BoundingBox,
}

impl DatasetStore {
    /// Load a dataset file and derive the calendar and color range.
    pub fn open(path: &Path, options: &LoadOptions, pairing: DoyPairing) -> PhenoResult<Self> {
        let points = load_points(path, options)?;
        if points.is_empty() {
            return Err(PhenoError::EmptyDataset(path.display().to_string()));
        }
        let store = Self::from_points(points, pairing)?;

        let summary = store.summary();
        info!(
            path = %path.display(),
            rows = summary.rows,
            points = summary.points,
            reference_dates = summary.reference_dates,
            "Loaded phenology dataset"
        );

        Ok(store)
    }

    /// Build a store from already parsed observations.
    pub fn from_points(points: Vec<SamplePoint>, pairing: DoyPairing) -> PhenoResult<Self> {
        let color_scale = LandCoverColorScale::from_codes(points.iter().map(|p| p.lc_code))
            .ok_or_else(|| PhenoError::EmptyDataset("no observations".to_string()))?;

        if let Some(p) = points.iter().find(|p| !(p.lon.is_finite() && p.lat.is_finite())) {
            return Err(PhenoError::InternalError(format!(
                "point {} has non-finite coordinates ({}, {})",
                p.point_id, p.lon, p.lat
            )));
        }
        let extent = BoundingBox::from_points(points.iter().map(|p| (p.lon, p.lat)))
            .ok_or_else(|| PhenoError::EmptyDataset("no observations".to_string()))?;

        let calendar = DoyCalendar::from_dates(points.iter().map(|p| p.reference_date), pairing)?;

        Ok(Self {
            points,
            calendar,
            color_scale,
            extent,
        })
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn calendar(&self) -> &DoyCalendar {
        &self.calendar
    }

    /// Color scale spanning the dataset-wide land-cover code range.
    pub fn color_scale(&self) -> &LandCoverColorScale {
        &self.color_scale
    }

    pub fn extent(&self) -> BoundingBox {
        self.extent
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Day of year for an observation date present in the dataset.
    pub fn doy_of(&self, date: NaiveDate) -> Option<u16> {
        self.calendar.date_to_doy(date)
    }

    /// Land-cover codes that occur in the dataset, ascending.
    pub fn land_cover_codes(&self) -> BTreeSet<LandCoverCode> {
        self.points.iter().map(|p| p.lc_code).collect()
    }

    pub fn summary(&self) -> DatasetSummary {
        let point_ids: BTreeSet<&str> = self.points.iter().map(|p| p.point_id.as_str()).collect();
        DatasetSummary {
            rows: self.points.len(),
            points: point_ids.len(),
            reference_dates: self.calendar.len(),
            land_cover_codes: self.land_cover_codes().into_iter().collect(),
            lc_min: self.color_scale.min(),
            lc_max: self.color_scale.max(),
            extent: self.extent,
        }
    }
}

/// Counts and ranges describing a loaded dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub points: usize,
    pub reference_dates: usize,
    pub land_cover_codes: Vec<LandCoverCode>,
    pub lc_min: LandCoverCode,
    pub lc_max: LandCoverCode,
    pub extent: BoundingBox,
}
