//! NDVI by day-of-year scatter plot.

use selection::FilteredView;

use crate::figure::{Axis, Figure, Layout, Legend, Margin, Marker, MarkerLine, Trace};

pub fn build_scatter(view: &FilteredView<'_>) -> Figure {
    let x = view.doys().iter().map(|d| f64::from(*d)).collect();
    let y = view.rows().iter().map(|r| r.ndvi).collect();
    let text = view.rows().iter().map(|r| r.point_id.clone()).collect();

    let mut trace = Trace::new("scatter", "markers")
        .with_name("NDVI")
        .with_xy(x, y)
        .with_text(text)
        .with_marker(Marker {
            size: 9.0,
            opacity: None,
            color: None,
            line: Some(MarkerLine {
                width: 0.5,
                color: "white".to_string(),
            }),
        });
    trace.opacity = Some(0.7);

    Figure {
        data: vec![trace],
        layout: Layout {
            xaxis: Some(Axis::titled("Day Of Year (DOY)")),
            yaxis: Some(Axis::titled("NDVI")),
            margin: Some(Margin {
                l: 40,
                r: 10,
                b: 40,
                t: 10,
            }),
            legend: Some(Legend {
                x: Some(0.0),
                y: Some(1.0),
                ..Default::default()
            }),
            hovermode: Some("closest".to_string()),
            ..Default::default()
        },
    }
}
