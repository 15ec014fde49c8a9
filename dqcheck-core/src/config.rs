//! Analysis configuration.
//!
//! Controls the sampling cap and input acceptance rules. Defaults: at most
//! 5000 rows, seed 42, `.csv` files only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum number of rows profiled per file.
pub const DEFAULT_MAX_ROWS: usize = 5000;

/// Default seed for the row sampler.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

/// Row sampling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Tables with more rows than this are sampled down to exactly this many
    pub max_rows: usize,
    /// Seed for the pseudo-random row selection
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            seed: DEFAULT_SAMPLE_SEED,
        }
    }
}

impl SamplingConfig {
    /// Creates a new sampling config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the row cap.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Builder method to set the sampler seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Top-level configuration for one analyzer instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Row sampling settings
    pub sampling: SamplingConfig,
    /// Reject file names that do not end in `.csv`
    pub require_csv_extension: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig::default(),
            require_csv_extension: true,
        }
    }
}

/// Validation errors for analysis configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("max_rows must be greater than zero")]
    ZeroMaxRows,
}

impl AnalysisConfig {
    /// Creates a new analysis config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to replace the sampling settings.
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Builder method to toggle the `.csv` extension check.
    pub fn with_require_csv_extension(mut self, require: bool) -> Self {
        self.require_csv_extension = require;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.sampling.max_rows == 0 {
            return Err(ConfigValidationError::ZeroMaxRows);
        }
        Ok(())
    }
}
