//! Application state for the dashboard API.

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use tracing::{info, warn};

use dataset::{DatasetStore, LoadOptions};

use crate::config::{DashboardConfig, LayoutVariant};
use crate::credentials::load_map_token;

/// Shared, read-only application context.
pub struct AppState {
    /// Phenology observations and their derived calendar and color range.
    pub dataset: DatasetStore,

    pub config: DashboardConfig,

    /// Name of the active layout variant.
    pub variant_name: String,

    pub variant: LayoutVariant,

    /// Map access token. `None` disables the map figure only.
    pub map_token: Option<String>,

    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Build the state in order: variant, dataset, map credential.
    pub fn load(config: DashboardConfig, data_path: &Path, variant: Option<&str>) -> Result<Self> {
        let (variant_name, variant) = config
            .variant(variant)
            .map(|(name, v)| (name.to_string(), v.clone()))
            .context("Failed to select layout variant")?;

        let options = LoadOptions {
            delimiter: config.delimiter_byte(),
        };
        let dataset = DatasetStore::open(data_path, &options, config.doy_pairing)
            .with_context(|| format!("Failed to load dataset {:?}", data_path))?;

        let map_token = match load_map_token(&config.token_file) {
            Ok(token) => Some(token),
            Err(e) => {
                warn!(error = %e, "Map figure disabled");
                None
            }
        };

        info!(
            variant = %variant_name,
            rows = dataset.len(),
            map_enabled = map_token.is_some(),
            "Application state initialized"
        );

        Ok(Self {
            dataset,
            config,
            variant_name,
            variant,
            map_token,
            prometheus: None,
        })
    }

    /// Assemble state from already loaded parts.
    pub fn from_parts(
        dataset: DatasetStore,
        config: DashboardConfig,
        variant: Option<&str>,
        map_token: Option<String>,
    ) -> Result<Self> {
        let (variant_name, variant) = config
            .variant(variant)
            .map(|(name, v)| (name.to_string(), v.clone()))?;

        Ok(Self {
            dataset,
            config,
            variant_name,
            variant,
            map_token,
            prometheus: None,
        })
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
