//! Shared request parsing and response building.

use axum::{
    http::{header, StatusCode},
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use pheno_common::{PhenoError, PhenoResult};
use selection::{LandCoverFilter, SelectionRequest};

use crate::config::SliderConfig;
use crate::metrics::record_request;

/// Widget values shared by the filtered figure routes.
///
/// Values arrive as text so malformed input is reported as an invalid
/// selection instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    /// Land-cover code, or comma separated codes for multi-select.
    pub lc: Option<String>,

    /// Slider value.
    pub doy: Option<String>,

    /// Selected table rows, comma separated.
    pub selected: Option<String>,
}

impl FilterParams {
    pub fn selection_request(&self, slider: &SliderConfig) -> PhenoResult<SelectionRequest> {
        Ok(SelectionRequest {
            land_cover: LandCoverFilter::parse(self.lc.as_deref())?,
            doy: parse_doy(self.doy.as_deref(), slider)?,
            hover: None,
        })
    }

    pub fn selected_rows(&self) -> PhenoResult<Vec<usize>> {
        parse_selected(self.selected.as_deref())
    }
}

/// Exception body returned for failed requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExceptionBody {
    #[serde(rename = "type")]
    pub type_: String,

    pub status: u16,

    pub detail: String,
}

/// Slider value to canonical DOY. Empty means no DOY filter.
pub fn parse_doy(raw: Option<&str>, slider: &SliderConfig) -> PhenoResult<Option<u16>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let value: u16 = raw
        .parse()
        .map_err(|_| PhenoError::invalid_selection("doy", format!("'{}' is not an integer", raw)))?;
    slider.to_doy(value).map(Some)
}

/// Comma separated row indices.
pub fn parse_selected(raw: Option<&str>) -> PhenoResult<Vec<usize>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>().map_err(|_| {
                PhenoError::invalid_selection("selected", format!("'{}' is not a row index", s))
            })
        })
        .collect()
}

pub fn json_response<T: Serialize>(value: &T) -> PhenoResult<Response> {
    let json = serde_json::to_string(value)?;
    build(StatusCode::OK, "application/json", json)
}

pub fn no_content() -> Response {
    let mut response = Response::default();
    *response.status_mut() = StatusCode::NO_CONTENT;
    response
}

pub fn error_response(err: &PhenoError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        tracing::warn!(error = %err, "Request failed");
    } else {
        tracing::debug!(error = %err, "Request rejected");
    }

    let body = ExceptionBody {
        type_: err.exception_code().to_string(),
        status: status.as_u16(),
        detail: err.to_string(),
    };
    let json = serde_json::to_string(&body).unwrap_or_default();
    build(status, "application/json", json).unwrap_or_else(|_| {
        let mut response = Response::default();
        *response.status_mut() = status;
        response
    })
}

/// Turn a handler result into a response and record it.
pub fn finish(route: &'static str, started: Instant, result: PhenoResult<Response>) -> Response {
    let response = match result {
        Ok(response) => response,
        Err(e) => error_response(&e),
    };
    record_request(route, response.status().as_u16(), started);
    response
}

fn build(status: StatusCode, content_type: &str, body: String) -> PhenoResult<Response> {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .map_err(|e| PhenoError::InternalError(e.to_string()))
}
