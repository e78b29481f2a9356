//! Plotly figure types.
//!
//! Only the attributes the dashboard sets are modelled. Unset options are
//! left out of the JSON so the front end applies its own defaults.

use serde::{Deserialize, Serialize};

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One plotted series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trace {
    #[serde(rename = "type")]
    pub type_: String,

    pub mode: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<Vec<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<Vec<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,

    /// Echoed back by the front end in hover payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    pub fn new(type_: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            mode: mode.into(),
            name: None,
            lat: None,
            lon: None,
            x: None,
            y: None,
            text: None,
            customdata: None,
            opacity: None,
            marker: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_xy(mut self, x: Vec<f64>, y: Vec<f64>) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_text(mut self, text: Vec<String>) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Number of plotted points.
    pub fn len(&self) -> usize {
        self.lat
            .as_ref()
            .or(self.x.as_ref())
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Marker {
    pub size: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,

    /// Per-point colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerLine>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarkerLine {
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub titlefont: Option<Font>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapbox: Option<Mapbox>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: String,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mapbox {
    /// Omitted when the layout is served without credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accesstoken: Option<String>,

    pub style: String,

    pub center: crate::options::MapCenter,

    pub zoom: f64,
}
