//! Layout and controls handlers.

use axum::{extract::Extension, response::Response};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use figures::{map_layout, Layout};

use super::common::{finish, json_response};
use crate::config::Panel;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LayoutResponse<'a> {
    pub variant: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub panels: &'a [Panel],
    /// Map layout without the access token.
    pub map: Layout,
    pub map_enabled: bool,
}

/// GET /api/layout
pub async fn layout_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let started = Instant::now();
    let variant = &state.variant;
    let response = LayoutResponse {
        variant: &state.variant_name,
        title: &variant.title,
        description: &variant.description,
        panels: &variant.panels,
        map: map_layout(&variant.map, None),
        map_enabled: state.map_token.is_some(),
    };
    finish("layout", started, json_response(&response))
}
