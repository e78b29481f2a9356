//! Sampling point map.

use pheno_common::{GradientConfig, LandCoverColorScale, PhenoResult};
use selection::FilteredView;

use crate::figure::{Figure, Font, Layout, Legend, Mapbox, Marker, Trace};
use crate::options::{MapOptions, MarkerColoring};

pub const MAP_TITLE: &str = "Points represent center of sampling buffers";

const TEXT_COLOR: &str = "#191A1A";

/// Map layout for `options`. `access_token` is left out when `None`.
pub fn map_layout(options: &MapOptions, access_token: Option<&str>) -> Layout {
    Layout {
        title: Some(MAP_TITLE.to_string()),
        autosize: Some(true),
        height: Some(options.height),
        font: Some(Font {
            color: Some(TEXT_COLOR.to_string()),
            size: None,
        }),
        titlefont: Some(Font {
            color: Some(TEXT_COLOR.to_string()),
            size: Some(14),
        }),
        margin: Some(options.margin),
        hovermode: Some("closest".to_string()),
        plot_bgcolor: options.background.clone(),
        paper_bgcolor: options.background.clone(),
        legend: Some(Legend {
            font: Some(Font {
                color: None,
                size: Some(10),
            }),
            orientation: Some("h".to_string()),
            x: None,
            y: None,
        }),
        xaxis: None,
        yaxis: None,
        mapbox: Some(Mapbox {
            accesstoken: access_token.map(str::to_string),
            style: options.style.clone(),
            center: options.center,
            zoom: options.zoom,
        }),
    }
}

/// Marker color per row in the configured coloring mode.
pub fn marker_colors(
    view: &FilteredView<'_>,
    scale: &LandCoverColorScale,
    coloring: MarkerColoring,
    selected: &[usize],
) -> PhenoResult<Vec<String>> {
    match coloring {
        MarkerColoring::LandCover => view.marker_colors(scale, selected),
        MarkerColoring::Ndvi => view.ndvi_colors(&GradientConfig::ndvi(), selected),
    }
}

/// One `scattermapbox` trace of the filtered rows.
///
/// Hover text is the land-cover label, or the NDVI value when coloring by
/// NDVI. `customdata` carries the point id so hover events identify the
/// point.
pub fn build_map_figure(
    view: &FilteredView<'_>,
    scale: &LandCoverColorScale,
    options: &MapOptions,
    access_token: &str,
    selected: &[usize],
) -> PhenoResult<Figure> {
    let colors = marker_colors(view, scale, options.coloring, selected)?;

    let text = view
        .rows()
        .iter()
        .map(|r| match options.coloring {
            MarkerColoring::LandCover => r.lc_code.display_label(),
            MarkerColoring::Ndvi => r.ndvi.to_string(),
        })
        .collect();

    let mut trace = Trace::new("scattermapbox", "markers")
        .with_text(text)
        .with_marker(Marker {
            size: 6.0,
            opacity: Some(0.7),
            color: Some(colors),
            line: None,
        });
    trace.lat = Some(view.rows().iter().map(|r| r.lat).collect());
    trace.lon = Some(view.rows().iter().map(|r| r.lon).collect());
    trace.customdata = Some(view.rows().iter().map(|r| r.point_id.clone()).collect());

    Ok(Figure {
        data: vec![trace],
        layout: map_layout(options, Some(access_token)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_token() {
        let layout = map_layout(&MapOptions::classic(), None);
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["title"], MAP_TITLE);
        assert_eq!(json["hovermode"], "closest");
        assert_eq!(json["legend"]["orientation"], "h");
        assert_eq!(json["mapbox"]["style"], "light");
        assert_eq!(json["mapbox"]["zoom"], 10.0);
        assert!(json["mapbox"].get("accesstoken").is_none());
    }

    #[test]
    fn test_bootstrap_layout() {
        let layout = map_layout(&MapOptions::bootstrap(), Some("pk.test"));
        assert_eq!(layout.height, Some(600));
        assert_eq!(layout.plot_bgcolor, None);
        let mapbox = layout.mapbox.unwrap();
        assert_eq!(mapbox.accesstoken.as_deref(), Some("pk.test"));
        assert_eq!(mapbox.center.lat, 41.12487);
    }
}
