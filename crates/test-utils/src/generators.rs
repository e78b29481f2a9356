//! Generators for synthetic phenology datasets.
//!
//! Values are deterministic so tests can assert on them directly.

use chrono::{Duration, NaiveDate};
use pheno_common::{LandCoverCode, SamplePoint, DOY_LIST};

/// The 23 composite reference dates of `year`, one per canonical DOY.
///
/// # Example
///
/// ```
/// use test_utils::composite_dates;
///
/// let dates = composite_dates(2016);
/// assert_eq!(dates.len(), 23);
/// assert_eq!(dates[0].to_string(), "2016-01-01");
/// ```
pub fn composite_dates(year: i32) -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid year");
    DOY_LIST
        .iter()
        .map(|doy| start + Duration::days(*doy as i64))
        .collect()
}

/// A smooth seasonal NDVI curve peaking mid-year at `peak`.
pub fn ndvi_curve(doy: u16, peak: f64) -> f64 {
    let phase = std::f64::consts::PI * doy as f64 / 365.0;
    let value = 0.1 + (peak - 0.1) * phase.sin().powi(2);
    (value * 1000.0).round() / 1000.0
}

/// One observation per (point, composite date).
///
/// Point ids are `P{code}_{n}`, with `points_per_code` points for every code
/// in `codes`. Coordinates are spread over a small grid in the Hudson Valley.
pub fn synthetic_points(codes: &[i32], points_per_code: usize, year: i32) -> Vec<SamplePoint> {
    let dates = composite_dates(year);
    let mut points = Vec::with_capacity(codes.len() * points_per_code * dates.len());

    for (code_index, code) in codes.iter().enumerate() {
        for n in 0..points_per_code {
            let id = format!("P{}_{}", code, n);
            let lon = -74.5 + code_index as f64 * 0.05;
            let lat = 41.0 + n as f64 * 0.01;
            let peak = 0.4 + (*code % 10) as f64 * 0.05;

            for (date, doy) in dates.iter().zip(DOY_LIST) {
                points.push(SamplePoint::new(
                    id.clone(),
                    LandCoverCode(*code),
                    *date,
                    ndvi_curve(doy, peak),
                    lon,
                    lat,
                ));
            }
        }
    }

    points
}

/// Render observations as CSV, optionally with a leading pandas-style index.
pub fn points_to_csv(points: &[SamplePoint], with_index: bool) -> String {
    let mut out = String::new();
    if with_index {
        out.push(',');
    }
    out.push_str("PointID,LC_code,variable,value,x,y\n");

    for (i, p) in points.iter().enumerate() {
        if with_index {
            out.push_str(&format!("{},", i));
        }
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            p.point_id, p.lc_code, p.reference_date, p.ndvi, p.lon, p.lat
        ));
    }

    out
}
