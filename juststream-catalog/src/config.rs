use std::time::Duration;

use crate::{Error, Result};

fn default_page_size() -> usize {
    20
}

fn default_total_items() -> usize {
    200
}

fn default_latency() -> Duration {
    Duration::from_millis(800)
}

fn default_lookup_latency() -> Duration {
    Duration::from_millis(500)
}

fn default_failure_rate() -> f64 {
    0.1
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Maximum number of items returned per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Number of items in the generated catalog.
    #[serde(default = "default_total_items")]
    pub total_items: usize,

    /// Simulated network delay of page requests.
    #[serde(default = "default_latency", with = "humantime_serde")]
    pub latency: Duration,

    /// Simulated network delay of single item lookups.
    #[serde(default = "default_lookup_latency", with = "humantime_serde")]
    pub lookup_latency: Duration,

    /// Probability in [0, 1] that a request for any page after the first one fails.
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,

    /// Seed of the generated catalog. A random seed is drawn per session when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            total_items: default_total_items(),
            latency: default_latency(),
            lookup_latency: default_lookup_latency(),
            failure_rate: default_failure_rate(),
            seed: None,
        }
    }
}

impl CatalogConfig {
    /// Parses a TOML document. Missing keys take their default value.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfig(
                "page_size must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(Error::InvalidConfig(format!(
                "failure_rate must be within [0, 1], got {}",
                self.failure_rate
            )));
        }

        Ok(self)
    }
}
