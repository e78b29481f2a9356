//! Data table handler.

use axum::{
    extract::{Extension, Query},
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use figures::build_table;
use pheno_common::PhenoResult;
use selection::SelectionPipeline;

use super::common::{finish, json_response, FilterParams};
use crate::metrics::record_selection;
use crate::state::AppState;

/// GET /api/table
pub async fn table_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Response {
    let started = Instant::now();
    finish("table", started, table(&state, &params))
}

fn table(state: &AppState, params: &FilterParams) -> PhenoResult<Response> {
    let request = params.selection_request(&state.variant.doy_slider)?;
    let selected = params.selected_rows()?;
    let view = SelectionPipeline::new(&state.dataset).select(&request)?;
    record_selection("table", view.len());
    json_response(&build_table(&view, &selected)?)
}
