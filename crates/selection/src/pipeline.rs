//! Applying a selection to the dataset.

use serde::Serialize;
use tracing::debug;

use dataset::DatasetStore;
use pheno_common::{PhenoError, PhenoResult};

use crate::request::{LandCoverFilter, SelectionRequest};
use crate::view::FilteredView;

/// Outcome of an input-dependent computation.
///
/// `NoUpdate` means the output should keep whatever it currently shows. It
/// is not an error and not an empty result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Update<T> {
    Render(T),
    NoUpdate,
}

impl<T> Update<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Update<U> {
        match self {
            Update::Render(value) => Update::Render(f(value)),
            Update::NoUpdate => Update::NoUpdate,
        }
    }

    pub fn is_no_update(&self) -> bool {
        matches!(self, Update::NoUpdate)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Update::Render(value) => Some(value),
            Update::NoUpdate => None,
        }
    }
}

/// Read-only filtering over a dataset snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SelectionPipeline<'a> {
    store: &'a DatasetStore,
}

impl<'a> SelectionPipeline<'a> {
    pub fn new(store: &'a DatasetStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a DatasetStore {
        self.store
    }

    /// Filter rows by land cover AND reference date, or by hovered point.
    ///
    /// A requested DOY is always validated. When a hover point is present
    /// the result holds that point's rows across every reference date and
    /// the DOY does not restrict it.
    pub fn select(&self, request: &SelectionRequest) -> PhenoResult<FilteredView<'a>> {
        let date = request
            .doy
            .map(|doy| self.store.calendar().resolve(doy))
            .transpose()?;
        let hover = request.hover.as_deref();

        let mut view = FilteredView::with_capacity(match (hover, date) {
            (None, None) => self.store.len(),
            _ => 0,
        });

        for (index, row) in self.store.points().iter().enumerate() {
            if !request.land_cover.matches(row.lc_code) {
                continue;
            }
            let keep = match hover {
                Some(point_id) => row.point_id == point_id,
                None => date.map_or(true, |d| row.reference_date == d),
            };
            if !keep {
                continue;
            }

            let doy = self.store.doy_of(row.reference_date).ok_or_else(|| {
                PhenoError::InternalError(format!(
                    "reference date {} missing from calendar",
                    row.reference_date
                ))
            })?;
            view.push(index, row, doy);
        }

        debug!(
            land_cover = ?request.land_cover,
            doy = ?request.doy,
            hover = ?request.hover,
            rows = view.len(),
            "Selection applied"
        );

        Ok(view)
    }

    /// Time series of the hovered point, sorted by DOY.
    ///
    /// Before anything has been hovered there is nothing to show, which is
    /// reported as [`Update::NoUpdate`].
    pub fn select_point_series(
        &self,
        land_cover: &LandCoverFilter,
        hover: Option<&str>,
    ) -> PhenoResult<Update<FilteredView<'a>>> {
        let Some(point_id) = hover else {
            return Ok(Update::NoUpdate);
        };

        let request = SelectionRequest {
            land_cover: land_cover.clone(),
            doy: None,
            hover: Some(point_id.to_string()),
        };
        let view = self.select(&request)?;
        Ok(Update::Render(view.sorted_by_doy()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pheno_common::{DoyPairing, LandCoverCode, SamplePoint};

    fn store() -> DatasetStore {
        let date = |m, d| NaiveDate::from_ymd_opt(2016, m, d).unwrap();
        DatasetStore::from_points(
            vec![
                SamplePoint::new("P1", LandCoverCode(41), date(6, 25), 0.78, -74.3, 41.9),
                SamplePoint::new("P1", LandCoverCode(41), date(6, 9), 0.71, -74.3, 41.9),
                SamplePoint::new("P2", LandCoverCode(82), date(6, 9), 0.55, -74.1, 41.5),
            ],
            DoyPairing::Ordinal,
        )
        .unwrap()
    }

    #[test]
    fn test_no_filters_keeps_everything_in_order() {
        let store = store();
        let view = SelectionPipeline::new(&store)
            .select(&SelectionRequest::new())
            .unwrap();
        assert_eq!(view.indices(), &[0, 1, 2]);
        assert_eq!(view.doys(), &[176, 160, 160]);
    }

    #[test]
    fn test_hover_ignores_doy_but_validates_it() {
        let store = store();
        let pipeline = SelectionPipeline::new(&store);

        let view = pipeline
            .select(&SelectionRequest::new().with_doy(160).with_hover("P1"))
            .unwrap();
        assert_eq!(view.len(), 2);

        let err = pipeline
            .select(&SelectionRequest::new().with_doy(161).with_hover("P1"))
            .unwrap_err();
        assert!(matches!(err, PhenoError::InvalidSelection { .. }));
    }

    #[test]
    fn test_point_series_sorted_by_doy() {
        let store = store();
        let series = SelectionPipeline::new(&store)
            .select_point_series(&LandCoverFilter::All, Some("P1"))
            .unwrap()
            .into_option()
            .unwrap();
        assert_eq!(series.doys(), &[160, 176]);
        assert_eq!(series.indices(), &[1, 0]);
    }

    #[test]
    fn test_update_map() {
        assert_eq!(Update::Render(2).map(|v| v * 2), Update::Render(4));
        assert!(Update::<i32>::NoUpdate.map(|v| v * 2).is_no_update());
    }
}
