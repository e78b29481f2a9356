//! Map presentation settings, as found in layout configuration.

use serde::{Deserialize, Serialize};

use crate::figure::Margin;

/// How map markers are colored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerColoring {
    /// 16-bucket land-cover palette.
    #[default]
    LandCover,

    /// Continuous NDVI gradient.
    Ndvi,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    #[serde(default = "default_height")]
    pub height: u32,

    pub center: MapCenter,

    #[serde(default = "default_zoom")]
    pub zoom: f64,

    /// Mapbox basemap style.
    #[serde(default = "default_style")]
    pub style: String,

    #[serde(default)]
    pub coloring: MarkerColoring,

    #[serde(default = "default_margin")]
    pub margin: Margin,

    /// Plot and paper background.
    #[serde(default)]
    pub background: Option<String>,
}

fn default_height() -> u32 {
    500
}

fn default_zoom() -> f64 {
    10.0
}

fn default_style() -> String {
    "light".to_string()
}

fn default_margin() -> Margin {
    Margin {
        l: 35,
        r: 35,
        b: 35,
        t: 45,
    }
}

impl MapOptions {
    /// Hudson Valley close-up colored by land cover.
    pub fn classic() -> Self {
        Self {
            height: 500,
            center: MapCenter {
                lon: -74.362539,
                lat: 41.987256,
            },
            zoom: 10.0,
            style: default_style(),
            coloring: MarkerColoring::LandCover,
            margin: default_margin(),
            background: Some("#fffcfc".to_string()),
        }
    }

    /// Regional view colored by NDVI.
    pub fn bootstrap() -> Self {
        Self {
            height: 600,
            center: MapCenter {
                lon: -74.296787,
                lat: 41.12487,
            },
            zoom: 6.0,
            style: default_style(),
            coloring: MarkerColoring::Ndvi,
            margin: Margin {
                l: 0,
                r: 0,
                b: 35,
                t: 45,
            },
            background: None,
        }
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self::classic()
    }
}
