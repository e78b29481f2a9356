//! Filtered row subsets.

use std::collections::BTreeSet;

use pheno_common::{
    apply_selection, GradientConfig, LandCoverCode, LandCoverColorScale, PhenoResult,
    SamplePoint, SELECTED_COLOR,
};

/// Rows that passed a selection, in dataset order, with their derived DOY.
///
/// Rows are borrowed from the store; `indices` are positions in the store
/// so a view can be traced back to the source rows.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    rows: Vec<&'a SamplePoint>,
    doys: Vec<u16>,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
            doys: Vec::with_capacity(capacity),
            indices: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, index: usize, row: &'a SamplePoint, doy: u16) {
        self.indices.push(index);
        self.rows.push(row);
        self.doys.push(doy);
    }

    pub fn rows(&self) -> &[&'a SamplePoint] {
        &self.rows
    }

    /// DOY of each row, parallel to [`rows`](Self::rows).
    pub fn doys(&self) -> &[u16] {
        &self.doys
    }

    /// Store positions of each row.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a SamplePoint, u16)> + '_ {
        self.rows.iter().copied().zip(self.doys.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The same rows reordered by DOY. Ties keep dataset order.
    pub fn sorted_by_doy(&self) -> FilteredView<'a> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by_key(|&i| self.doys[i]);

        let mut sorted = FilteredView::with_capacity(self.len());
        for i in order {
            sorted.push(self.indices[i], self.rows[i], self.doys[i]);
        }
        sorted
    }

    pub fn land_cover_codes(&self) -> Vec<LandCoverCode> {
        self.rows.iter().map(|r| r.lc_code).collect()
    }

    pub fn distinct_point_ids(&self) -> BTreeSet<&'a str> {
        self.rows.iter().map(|r| r.point_id.as_str()).collect()
    }

    /// Land-cover bucket color per row, with `selected` rows highlighted.
    pub fn marker_colors(
        &self,
        scale: &LandCoverColorScale,
        selected: &[usize],
    ) -> PhenoResult<Vec<String>> {
        let colors = scale.colors(&self.land_cover_codes(), selected)?;
        Ok(colors.into_iter().map(str::to_string).collect())
    }

    /// NDVI gradient color per row, with `selected` rows highlighted.
    pub fn ndvi_colors(
        &self,
        gradient: &GradientConfig,
        selected: &[usize],
    ) -> PhenoResult<Vec<String>> {
        let mut colors: Vec<String> = self
            .rows
            .iter()
            .map(|r| gradient.interpolate(r.ndvi).to_hex())
            .collect();
        apply_selection(&mut colors, selected, SELECTED_COLOR.to_string())?;
        Ok(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(id: &str, code: i32, ndvi: f64) -> SamplePoint {
        SamplePoint::new(
            id,
            LandCoverCode(code),
            NaiveDate::from_ymd_opt(2016, 6, 25).unwrap(),
            ndvi,
            -74.0,
            41.0,
        )
    }

    #[test]
    fn test_sorted_by_doy_is_stable() {
        let a = row("A", 41, 0.1);
        let b = row("B", 41, 0.2);
        let c = row("C", 41, 0.3);
        let mut view = FilteredView::with_capacity(3);
        view.push(0, &a, 176);
        view.push(1, &b, 16);
        view.push(2, &c, 176);

        let sorted = view.sorted_by_doy();
        let ids: Vec<&str> = sorted.rows().iter().map(|r| r.point_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
        assert_eq!(sorted.doys(), &[16, 176, 176]);
        assert_eq!(sorted.indices(), &[1, 0, 2]);
    }

    #[test]
    fn test_ndvi_colors_with_selection() {
        let a = row("A", 41, 1.0);
        let b = row("B", 41, -1.0);
        let mut view = FilteredView::with_capacity(2);
        view.push(0, &a, 0);
        view.push(1, &b, 0);

        let colors = view.ndvi_colors(&GradientConfig::ndvi(), &[1]).unwrap();
        assert_eq!(colors[0], "#1B5E20");
        assert_eq!(colors[1], SELECTED_COLOR);
        assert!(view.ndvi_colors(&GradientConfig::ndvi(), &[2]).is_err());
    }
}
