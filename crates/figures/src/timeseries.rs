//! Per-point NDVI time series.

use selection::FilteredView;

use crate::figure::{Axis, Figure, Layout, Marker, Trace};

/// Line plot of one point's NDVI by DOY.
///
/// Rows are sorted by DOY here as well, so any view of a single point can be
/// passed in.
pub fn build_timeseries(view: &FilteredView<'_>) -> Figure {
    let sorted = view.sorted_by_doy();

    let title = match sorted.rows().first() {
        Some(first) => format!("{} ({})", first.point_id, first.lc_code.display_label()),
        None => "No observations".to_string(),
    };
    let name = sorted.rows().first().map(|r| r.point_id.clone());

    let x = sorted.doys().iter().map(|d| f64::from(*d)).collect();
    let y = sorted.rows().iter().map(|r| r.ndvi).collect();

    let mut trace = Trace::new("scatter", "lines+markers")
        .with_xy(x, y)
        .with_marker(Marker {
            size: 6.0,
            ..Default::default()
        });
    trace.name = name;

    Figure {
        data: vec![trace],
        layout: Layout {
            title: Some(title),
            xaxis: Some(Axis::titled("Day Of Year (DOY)")),
            yaxis: Some(Axis::titled("NDVI")),
            hovermode: Some("closest".to_string()),
            ..Default::default()
        },
    }
}
