//! Dashboard configuration loading and types.
//!
//! Layout variants live in a YAML file. When the file is missing the two
//! built-in variants (`classic` and `bootstrap`) are used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figures::MapOptions;
use pheno_common::{DoyPairing, PhenoError, PhenoResult, DOY_LIST, DOY_STEP, NLCD_2011};

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Variant served when none is requested.
    #[serde(default = "default_variant")]
    pub default_variant: String,

    /// How dataset dates are paired with DOY buckets.
    #[serde(default)]
    pub doy_pairing: DoyPairing,

    /// Field delimiter of the dataset file.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Fallback location of the map access token.
    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,

    #[serde(default = "builtin_variants")]
    pub variants: BTreeMap<String, LayoutVariant>,
}

fn default_variant() -> String {
    "classic".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_token_file() -> PathBuf {
    PathBuf::from(".mapbox_token")
}

fn builtin_variants() -> BTreeMap<String, LayoutVariant> {
    let mut variants = BTreeMap::new();
    variants.insert("classic".to_string(), LayoutVariant::classic());
    variants.insert("bootstrap".to_string(), LayoutVariant::bootstrap());
    variants
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_variant: default_variant(),
            doy_pairing: DoyPairing::default(),
            delimiter: default_delimiter(),
            token_file: default_token_file(),
            variants: builtin_variants(),
        }
    }
}

impl DashboardConfig {
    /// Load from a YAML file, falling back to the built-in defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(
                "Dashboard config {} does not exist, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse: {:?}", path))?;

        tracing::info!(
            variants = config.variants.len(),
            "Loaded dashboard config from {:?}",
            path
        );
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PhenoResult<()> {
        if !self.delimiter.is_ascii() {
            return Err(PhenoError::ConfigError(format!(
                "delimiter {:?} must be a single ASCII character",
                self.delimiter
            )));
        }
        if !self.variants.contains_key(&self.default_variant) {
            return Err(PhenoError::ConfigError(format!(
                "default variant '{}' is not defined",
                self.default_variant
            )));
        }
        for (name, variant) in &self.variants {
            variant
                .doy_slider
                .validate()
                .map_err(|e| PhenoError::ConfigError(format!("variant '{}': {}", name, e)))?;
        }
        Ok(())
    }

    /// Look up a variant by name, or the default one.
    pub fn variant(&self, name: Option<&str>) -> PhenoResult<(&str, &LayoutVariant)> {
        let name = name.unwrap_or(self.default_variant.as_str());
        self.variants
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| {
                PhenoError::ConfigError(format!(
                    "unknown layout variant '{}' (available: {})",
                    name,
                    self.variants.keys().cloned().collect::<Vec<_>>().join(", ")
                ))
            })
    }

    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

/// Dashboard panels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Controls,
    Map,
    Table,
    Scatter,
    Timeseries,
}

/// One page layout with its controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutVariant {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub panels: Vec<Panel>,

    #[serde(default)]
    pub map: MapOptions,

    pub land_cover: DropdownConfig,

    pub doy_slider: SliderConfig,
}

impl LayoutVariant {
    /// Multi-select land cover, land cover colored map, data table and
    /// hover time series.
    pub fn classic() -> Self {
        Self {
            title: "Phenology Library".to_string(),
            description: "Interactive mapping of NDVI signatures by land cover class.".to_string(),
            panels: vec![Panel::Controls, Panel::Map, Panel::Table, Panel::Timeseries],
            map: MapOptions::classic(),
            land_cover: DropdownConfig {
                label: "Filter by Land Cover Class:".to_string(),
                multi: true,
                default: NLCD_2011.iter().map(|(code, _)| code.to_string()).collect(),
                placeholder: None,
            },
            doy_slider: SliderConfig {
                label: "Filter by Day Of Year (or select DOY in line plot):".to_string(),
                min: 0,
                max: 352,
                step: DOY_STEP,
                default: 176,
                doy_offset: 0,
            },
        }
    }

    /// Single land cover, NDVI colored map and scatter plot.
    pub fn bootstrap() -> Self {
        Self {
            title: "Phenology Library".to_string(),
            description: "Interactive mapping of NDVI signatures by land cover class.".to_string(),
            panels: vec![Panel::Map, Panel::Controls, Panel::Scatter],
            map: MapOptions::bootstrap(),
            land_cover: DropdownConfig {
                label: "Select Landcover Class".to_string(),
                multi: false,
                default: vec!["41".to_string()],
                placeholder: Some("Select a land cover class".to_string()),
            },
            doy_slider: SliderConfig {
                label: "Filter by Day Of Year (DOY), or select in lineplot".to_string(),
                min: 1,
                max: 353,
                step: DOY_STEP,
                default: 177,
                doy_offset: 1,
            },
        }
    }
}

/// Land-cover dropdown settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropdownConfig {
    pub label: String,

    #[serde(default)]
    pub multi: bool,

    /// Initially selected codes, as text.
    #[serde(default)]
    pub default: Vec<String>,

    #[serde(default)]
    pub placeholder: Option<String>,
}

/// Day-of-year slider settings.
///
/// Slider values are canonical DOYs shifted by `doy_offset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    pub label: String,
    pub min: u16,
    pub max: u16,
    pub step: u16,
    pub default: u16,

    #[serde(default)]
    pub doy_offset: u16,
}

/// A labelled slider position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliderMark {
    pub value: u16,
    pub label: String,
}

impl SliderConfig {
    /// Translate a slider value to the canonical DOY.
    pub fn to_doy(&self, value: u16) -> PhenoResult<u16> {
        if value < self.min || value > self.max {
            return Err(PhenoError::invalid_selection(
                "doy",
                format!(
                    "slider value {} outside [{}, {}]",
                    value, self.min, self.max
                ),
            ));
        }
        value.checked_sub(self.doy_offset).ok_or_else(|| {
            PhenoError::invalid_selection(
                "doy",
                format!("slider value {} is below offset {}", value, self.doy_offset),
            )
        })
    }

    /// One mark per canonical DOY that the slider can reach.
    pub fn marks(&self) -> Vec<SliderMark> {
        DOY_LIST
            .iter()
            .filter_map(|doy| doy.checked_add(self.doy_offset))
            .filter(|value| (self.min..=self.max).contains(value))
            .map(|value| SliderMark {
                value,
                label: (value - self.doy_offset).to_string(),
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.step == 0 {
            return Err("slider step must be positive".to_string());
        }
        if self.min > self.max {
            return Err(format!("slider min {} exceeds max {}", self.min, self.max));
        }
        let last_doy = DOY_LIST[DOY_LIST.len() - 1];
        if last_doy.checked_add(self.doy_offset).is_none() {
            return Err(format!(
                "doy_offset {} shifts DOY {} past {}",
                self.doy_offset,
                last_doy,
                u16::MAX
            ));
        }
        if self.min < self.doy_offset {
            return Err(format!(
                "slider min {} is below doy_offset {}",
                self.min, self.doy_offset
            ));
        }
        self.to_doy(self.default)
            .map(|_| ())
            .map_err(|e| format!("slider default: {}", e))
    }
}
