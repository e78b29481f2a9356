//! Parsed widget values.

use serde::Serialize;
use std::collections::BTreeSet;

use pheno_common::{LandCoverCode, PhenoResult};

/// Land-cover dropdown value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "kind", content = "codes", rename_all = "snake_case")]
pub enum LandCoverFilter {
    /// No dropdown value: every row passes.
    #[default]
    All,

    /// Single-select dropdown.
    One(LandCoverCode),

    /// Multi-select dropdown. An empty set passes nothing.
    AnyOf(BTreeSet<LandCoverCode>),
}

impl LandCoverFilter {
    /// Parse the `lc` query value.
    ///
    /// Absent means [`LandCoverFilter::All`]. A comma separated list is a
    /// multi-select value; a present but empty value is a multi-select with
    /// nothing chosen.
    ///
    /// # Example
    ///
    /// ```
    /// use selection::LandCoverFilter;
    /// use pheno_common::LandCoverCode;
    ///
    /// assert_eq!(LandCoverFilter::parse(None).unwrap(), LandCoverFilter::All);
    /// assert_eq!(
    ///     LandCoverFilter::parse(Some("41")).unwrap(),
    ///     LandCoverFilter::One(LandCoverCode(41))
    /// );
    /// assert!(LandCoverFilter::parse(Some("forest")).is_err());
    /// ```
    pub fn parse(value: Option<&str>) -> PhenoResult<Self> {
        let Some(value) = value else {
            return Ok(Self::All);
        };
        let value = value.trim();

        if value.is_empty() {
            return Ok(Self::AnyOf(BTreeSet::new()));
        }

        if !value.contains(',') {
            return Ok(Self::One(LandCoverCode::parse(value)?));
        }

        let codes = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(LandCoverCode::parse)
            .collect::<PhenoResult<BTreeSet<_>>>()?;
        Ok(Self::AnyOf(codes))
    }

    pub fn matches(&self, code: LandCoverCode) -> bool {
        match self {
            Self::All => true,
            Self::One(c) => *c == code,
            Self::AnyOf(codes) => codes.contains(&code),
        }
    }
}

impl From<LandCoverCode> for LandCoverFilter {
    fn from(code: LandCoverCode) -> Self {
        Self::One(code)
    }
}

/// Everything a figure needs to know about the current widget state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SelectionRequest {
    pub land_cover: LandCoverFilter,

    /// Canonical day of year, already corrected for any slider offset.
    pub doy: Option<u16>,

    /// Point id taken from the map hover payload.
    pub hover: Option<String>,
}

impl SelectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_land_cover(mut self, filter: impl Into<LandCoverFilter>) -> Self {
        self.land_cover = filter.into();
        self
    }

    pub fn with_doy(mut self, doy: u16) -> Self {
        self.doy = Some(doy);
        self
    }

    pub fn with_hover(mut self, point_id: impl Into<String>) -> Self {
        self.hover = Some(point_id.into());
        self
    }
}
