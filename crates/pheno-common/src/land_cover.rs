//! NLCD land-cover codes and their display labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PhenoError, PhenoResult};

/// NLCD 2011 land-cover classes.
pub const NLCD_2011: [(i32, &str); 20] = [
    (11, "Open Water"),
    (12, "Perennial Ice/Snow"),
    (21, "Developed, Open Space"),
    (22, "Developed, Low Intensity"),
    (23, "Developed, Medium Intensity"),
    (24, "Developed, High Intensity"),
    (31, "Barren Land (Rock/Sand/Clay)"),
    (41, "Deciduous Forest"),
    (42, "Evergreen Forest"),
    (43, "Mixed Forest"),
    (51, "Dwarf Scrub (AK only)"),
    (52, "Scrub/Scrub"),
    (71, "Grassland/Herbaceous"),
    (72, "Sedge/Herbaceous (AK only)"),
    (73, "Lichens (AK ony)"),
    (74, "Moss (AK only)"),
    (81, "Pasture/Hay"),
    (82, "Cultivated Crops"),
    (90, "Woody Wetlands"),
    (95, "Emergent Herbaceous Wetlands"),
];

/// A land-cover classification code.
///
/// Codes are stored as text in the source data but always compared as
/// integers. Codes outside [`NLCD_2011`] are valid, they just have no label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandCoverCode(pub i32);

impl LandCoverCode {
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Parse a widget value, reporting failures as an invalid `lc` selection.
    pub fn parse(s: &str) -> PhenoResult<Self> {
        s.parse().map_err(|e: ParseLandCoverError| {
            PhenoError::invalid_selection("lc", e.to_string())
        })
    }

    /// Human-readable NLCD label, if the code is known.
    pub fn label(&self) -> Option<&'static str> {
        NLCD_2011
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, label)| *label)
    }

    /// Label for display, falling back to the bare code.
    pub fn display_label(&self) -> String {
        self.label()
            .map(str::to_string)
            .unwrap_or_else(|| self.0.to_string())
    }

    pub fn is_known(&self) -> bool {
        self.label().is_some()
    }
}

impl fmt::Display for LandCoverCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LandCoverCode {
    type Err = ParseLandCoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i32>()
            .map(LandCoverCode)
            .map_err(|_| ParseLandCoverError(trimmed.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("land-cover code is not an integer: '{0}'")]
pub struct ParseLandCoverError(pub String);

/// A dropdown option for the land-cover selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandCoverOption {
    pub label: String,
    pub value: String,
}

/// Dropdown options for every NLCD class, in table order.
pub fn land_cover_options() -> Vec<LandCoverOption> {
    NLCD_2011
        .iter()
        .map(|(code, label)| LandCoverOption {
            label: label.to_string(),
            value: code.to_string(),
        })
        .collect()
}
