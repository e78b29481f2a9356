//! Control definitions for the front end.

use axum::{extract::Extension, response::Response};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use pheno_common::{land_cover_options, LandCoverOption};

use super::common::{finish, json_response};
use crate::config::SliderMark;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ControlsResponse<'a> {
    pub land_cover: DropdownControl<'a>,
    pub doy_slider: SliderControl<'a>,
}

#[derive(Debug, Serialize)]
pub struct DropdownControl<'a> {
    pub label: &'a str,
    pub options: Vec<LandCoverOption>,
    pub multi: bool,
    /// A list for multi-select, a single value otherwise.
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct SliderControl<'a> {
    pub label: &'a str,
    pub min: u16,
    pub max: u16,
    pub step: u16,
    pub value: u16,
    pub marks: Vec<SliderMark>,
}

/// GET /api/controls
pub async fn controls_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let started = Instant::now();
    let dropdown = &state.variant.land_cover;
    let slider = &state.variant.doy_slider;

    let value = if dropdown.multi {
        serde_json::json!(dropdown.default)
    } else {
        dropdown
            .default
            .first()
            .map(|v| serde_json::json!(v))
            .unwrap_or(serde_json::Value::Null)
    };

    let response = ControlsResponse {
        land_cover: DropdownControl {
            label: &dropdown.label,
            options: land_cover_options(),
            multi: dropdown.multi,
            value,
            placeholder: dropdown.placeholder.as_deref(),
        },
        doy_slider: SliderControl {
            label: &slider.label,
            min: slider.min,
            max: slider.max,
            step: slider.step,
            value: slider.default,
            marks: slider.marks(),
        },
    };
    finish("controls", started, json_response(&response))
}
