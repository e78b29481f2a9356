//! Figure handlers: map, scatter and hover time series.

use axum::{
    body::Bytes,
    extract::{Extension, Query},
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

use figures::{build_map_figure, build_scatter, build_timeseries};
use pheno_common::{PhenoError, PhenoResult};
use selection::{HoverPayload, LandCoverFilter, SelectionPipeline, Update};

use super::common::{finish, json_response, no_content, FilterParams};
use crate::metrics::{record_no_update, record_selection};
use crate::state::AppState;

/// GET /api/figures/map
pub async fn map_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Response {
    let started = Instant::now();
    finish("map", started, map_figure(&state, &params))
}

fn map_figure(state: &AppState, params: &FilterParams) -> PhenoResult<Response> {
    let token = state.map_token.as_deref().ok_or_else(|| {
        PhenoError::MissingMapCredential("map figure is disabled".to_string())
    })?;

    let request = params.selection_request(&state.variant.doy_slider)?;
    let selected = params.selected_rows()?;
    let view = SelectionPipeline::new(&state.dataset).select(&request)?;
    record_selection("map", view.len());

    let figure = build_map_figure(
        &view,
        state.dataset.color_scale(),
        &state.variant.map,
        token,
        &selected,
    )?;
    json_response(&figure)
}

/// GET /api/figures/scatter
pub async fn scatter_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Response {
    let started = Instant::now();
    finish("scatter", started, scatter_figure(&state, &params))
}

fn scatter_figure(state: &AppState, params: &FilterParams) -> PhenoResult<Response> {
    let request = params.selection_request(&state.variant.doy_slider)?;
    let view = SelectionPipeline::new(&state.dataset).select(&request)?;
    record_selection("scatter", view.len());
    json_response(&build_scatter(&view))
}

/// Query parameters for the time series routes.
#[derive(Debug, Default, Deserialize)]
pub struct TimeseriesParams {
    pub lc: Option<String>,

    /// Hovered point id.
    pub point: Option<String>,
}

/// GET /api/figures/timeseries
pub async fn timeseries_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<TimeseriesParams>,
) -> Response {
    let started = Instant::now();
    let result = LandCoverFilter::parse(params.lc.as_deref()).and_then(|lc| {
        let point = params
            .point
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());
        timeseries_figure(&state, &lc, point)
    });
    finish("timeseries", started, result)
}

/// POST /api/figures/timeseries
///
/// Body is the map's hover payload. An empty body means nothing has been
/// hovered yet.
pub async fn timeseries_hover_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<TimeseriesParams>,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let result = LandCoverFilter::parse(params.lc.as_deref()).and_then(|lc| {
        let hover = parse_hover(&body)?;
        timeseries_figure(&state, &lc, hover.as_deref())
    });
    finish("timeseries", started, result)
}

fn parse_hover(body: &[u8]) -> PhenoResult<Option<String>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let payload: HoverPayload = serde_json::from_slice(body)
        .map_err(|e| PhenoError::invalid_selection("hover", e.to_string()))?;
    Ok(payload.point_id())
}

fn timeseries_figure(
    state: &AppState,
    land_cover: &LandCoverFilter,
    point: Option<&str>,
) -> PhenoResult<Response> {
    match SelectionPipeline::new(&state.dataset).select_point_series(land_cover, point)? {
        Update::Render(view) => {
            record_selection("timeseries", view.len());
            json_response(&build_timeseries(&view))
        }
        Update::NoUpdate => {
            record_no_update("timeseries");
            Ok(no_content())
        }
    }
}
