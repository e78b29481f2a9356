//! Figure builder tests against the fixture dataset.

use dataset::{read_points, DatasetStore, LoadOptions};
use figures::{
    build_map_figure, build_scatter, build_table, build_timeseries, MapOptions, MAP_TITLE,
};
use pheno_common::{DoyPairing, LandCoverCode, PhenoError, LAND_COVER_BUCKETS, SELECTED_COLOR};
use selection::{LandCoverFilter, SelectionPipeline, SelectionRequest};
use test_utils::assert_approx_eq;
use test_utils::fixtures::{EARLY_DOY, LATE_DOY, SMALL_CSV};

fn store() -> DatasetStore {
    let points = read_points(SMALL_CSV.as_bytes(), &LoadOptions::default()).unwrap();
    DatasetStore::from_points(points, DoyPairing::Ordinal).unwrap()
}

// ============================================================================
// Map
// ============================================================================

#[test]
fn test_map_figure_land_cover_coloring() {
    let store = store();
    let view = SelectionPipeline::new(&store)
        .select(&SelectionRequest::new().with_doy(LATE_DOY))
        .unwrap();

    let figure = build_map_figure(
        &view,
        store.color_scale(),
        &MapOptions::classic(),
        "pk.test",
        &[],
    )
    .unwrap();
    let json = serde_json::to_value(&figure).unwrap();
    let trace = &json["data"][0];

    assert_eq!(trace["type"], "scattermapbox");
    assert_eq!(trace["mode"], "markers");
    assert_eq!(trace["customdata"], serde_json::json!(["P1", "P2", "P3"]));
    assert_eq!(trace["text"][0], "Deciduous Forest");
    assert_eq!(trace["text"][2], "Cultivated Crops");
    assert_eq!(trace["marker"]["size"], 6.0);
    assert_eq!(trace["marker"]["opacity"], 0.7);
    assert_eq!(trace["marker"]["color"][0], LAND_COVER_BUCKETS[0].color);
    assert_eq!(trace["marker"]["color"][2], LAND_COVER_BUCKETS[15].color);

    assert_eq!(json["layout"]["title"], MAP_TITLE);
    assert_eq!(json["layout"]["font"]["color"], "#191A1A");
    assert_eq!(json["layout"]["mapbox"]["accesstoken"], "pk.test");
    assert_eq!(json["layout"]["mapbox"]["center"]["lon"], -74.362539);
}

#[test]
fn test_map_figure_ndvi_coloring_and_selection() {
    let store = store();
    let view = SelectionPipeline::new(&store)
        .select(&SelectionRequest::new().with_land_cover(LandCoverCode(41)))
        .unwrap();

    let figure = build_map_figure(
        &view,
        store.color_scale(),
        &MapOptions::bootstrap(),
        "pk.test",
        &[2],
    )
    .unwrap();
    let trace = &figure.data[0];
    let colors = trace.marker.as_ref().unwrap().color.as_ref().unwrap();

    assert_eq!(trace.len(), 3);
    assert_eq!(trace.text.as_ref().unwrap()[0], "0.71");
    assert_eq!(colors[2], SELECTED_COLOR);
    assert!(colors[0].starts_with('#') && colors[0].len() == 7);
    assert_eq!(figure.layout.height, Some(600));
}

#[test]
fn test_map_figure_rejects_out_of_range_selection() {
    let store = store();
    let view = SelectionPipeline::new(&store)
        .select(&SelectionRequest::new().with_doy(EARLY_DOY))
        .unwrap();

    let err = build_map_figure(
        &view,
        store.color_scale(),
        &MapOptions::classic(),
        "pk.test",
        &[view.len()],
    )
    .unwrap_err();
    assert!(matches!(err, PhenoError::InvalidSelection { .. }));
}

#[test]
fn test_map_figure_empty_view() {
    let store = store();
    let view = SelectionPipeline::new(&store)
        .select(&SelectionRequest::new().with_land_cover(LandCoverCode(99)))
        .unwrap();
    let figure =
        build_map_figure(&view, store.color_scale(), &MapOptions::classic(), "t", &[]).unwrap();
    assert!(figure.data[0].is_empty());
}

// ============================================================================
// Scatter and time series
// ============================================================================

#[test]
fn test_scatter_plots_ndvi_by_doy() {
    let store = store();
    let view = SelectionPipeline::new(&store)
        .select(&SelectionRequest::new().with_land_cover(LandCoverCode(82)))
        .unwrap();
    let figure = build_scatter(&view);
    let trace = &figure.data[0];

    assert_eq!(trace.x.as_deref(), Some(&[160.0, 176.0][..]));
    assert_approx_eq!(trace.y.as_ref().unwrap()[1], 0.61, 1e-12);
    assert_eq!(trace.text.as_ref().unwrap()[0], "P3");

    let json = serde_json::to_value(&figure).unwrap();
    assert_eq!(json["layout"]["xaxis"]["title"], "Day Of Year (DOY)");
    assert_eq!(json["layout"]["yaxis"]["title"], "NDVI");
    assert_eq!(json["data"][0]["marker"]["line"]["color"], "white");
    assert_eq!(json["data"][0]["opacity"], 0.7);
}

#[test]
fn test_timeseries_is_sorted_and_titled() {
    let store = store();
    let view = SelectionPipeline::new(&store)
        .select_point_series(&LandCoverFilter::All, Some("P1"))
        .unwrap()
        .into_option()
        .unwrap();
    let figure = build_timeseries(&view);
    let trace = &figure.data[0];

    assert_eq!(trace.mode, "lines+markers");
    assert_eq!(trace.x.as_deref(), Some(&[160.0, 176.0][..]));
    assert_eq!(trace.y.as_deref(), Some(&[0.71, 0.78][..]));
    assert_eq!(trace.name.as_deref(), Some("P1"));
    assert_eq!(
        figure.layout.title.as_deref(),
        Some("P1 (Deciduous Forest)")
    );
}

#[test]
fn test_timeseries_for_unknown_point() {
    let store = store();
    let view = SelectionPipeline::new(&store)
        .select_point_series(&LandCoverFilter::All, Some("nope"))
        .unwrap()
        .into_option()
        .unwrap();
    let figure = build_timeseries(&view);
    assert!(figure.data[0].is_empty());
    assert_eq!(figure.layout.title.as_deref(), Some("No observations"));
}

// ============================================================================
// Table
// ============================================================================

#[test]
fn test_table_records_and_selection() {
    let store = store();
    let view = SelectionPipeline::new(&store)
        .select(&SelectionRequest::new().with_doy(LATE_DOY))
        .unwrap();
    let table = build_table(&view, &[2, 0, 2]).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.selected_rows, vec![0, 2]);

    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["columns"][0]["id"], "PointID");
    assert_eq!(json["columns"].as_array().unwrap().len(), 6);
    assert_eq!(json["records"][1]["PointID"], "P2");
    assert_eq!(json["records"][1]["LC_code"], 41);
    assert_eq!(json["records"][1]["reference_date"], "2016-06-25");
    assert_eq!(json["row_selectable"], "multi");
}

#[test]
fn test_table_rejects_out_of_range_selection() {
    let store = store();
    let view = SelectionPipeline::new(&store)
        .select(&SelectionRequest::new().with_doy(LATE_DOY))
        .unwrap();
    let err = build_table(&view, &[3]).unwrap_err();
    assert_eq!(err.http_status_code(), 400);
}
