//! Configuration management and validation.
//!
//! Provides the runtime configuration for portal requests, CSV output and
//! response stashing, with sensible defaults and validation of caller
//! overrides.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_CONVERT_WORKERS, DEFAULT_HOST_URL, DEFAULT_HTTP_TIMEOUT_SECS};
use crate::{Error, Result};

/// Runtime configuration for the WQX processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Water Quality Portal host, including scheme
    pub host_url: String,

    /// Directory CSV output files are written to
    pub output_dir: PathBuf,

    /// Directory stashed portal responses are written to
    pub stash_dir: PathBuf,

    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,

    /// Number of concurrent workers for directory conversion
    pub convert_workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host_url: DEFAULT_HOST_URL.to_string(),
            output_dir: PathBuf::from("output"),
            stash_dir: default_stash_dir(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            convert_workers: DEFAULT_CONVERT_WORKERS,
        }
    }
}

/// Default stash location under the platform data directory
fn default_stash_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("wqx-processor").join("stash"))
        .unwrap_or_else(|| PathBuf::from("stash"))
}

impl Config {
    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.host_url.starts_with("http://") && !self.host_url.starts_with("https://") {
            return Err(Error::configuration(format!(
                "Host URL must include a scheme: {}",
                self.host_url
            )));
        }

        if self.http_timeout_secs == 0 {
            return Err(Error::configuration(
                "HTTP timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if self.convert_workers == 0 {
            return Err(Error::configuration(
                "Number of convert workers must be greater than 0".to_string(),
            ));
        }

        if self.convert_workers > 64 {
            return Err(Error::configuration(
                "Number of convert workers cannot exceed 64".to_string(),
            ));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
