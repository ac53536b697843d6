//! Analysis configuration
//!
//! Every setting has a default, so a TOML file only needs the keys it wants
//! to change:
//!
//! ```toml
//! estimator = "JK"
//! ppm_order = 5
//! ppm_alphabet_size = 2
//! threads = 4
//! ```
//!
//! CLI flags override whatever the file sets.

use crate::entropy::Estimator;
use crate::error::Result as ComplexityResult;
use crate::ncd::Compressor;
use crate::ppm::PpmConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings shared by the complexity engines
///
/// # Example
/// ```
/// use spikeplex::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.ppm_order, 3);
/// assert_eq!(config.ppm_alphabet_size, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Entropy estimator used by ETC and the `entropy` report
    pub estimator: Estimator,

    /// PPM maximum context order
    pub ppm_order: usize,

    /// PPM output alphabet size (256 = byte-oriented model)
    pub ppm_alphabet_size: usize,

    /// Tiling factor for padded byte compressors
    pub padding_factor: usize,

    /// Worker threads for pairwise matrices (0 = available parallelism)
    pub threads: usize,

    /// Stop LZ parsing once the complexity exceeds this count
    pub lz_threshold: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            estimator: Estimator::MillerMaddow,
            ppm_order: 3,
            ppm_alphabet_size: 256,
            padding_factor: 3,
            threads: 0,
            lz_threshold: None,
        }
    }
}

impl AnalysisConfig {
    /// Configuration for binary spike trains (PPM alphabet {0, 1})
    pub fn binary() -> Self {
        Self {
            ppm_alphabet_size: 2,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read analysis config from {}",
                path.as_ref().display()
            )
        })?;
        let config: AnalysisConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML analysis config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no engine can run with
    pub fn validate(&self) -> Result<()> {
        if self.ppm_alphabet_size == 0 {
            anyhow::bail!("ppm_alphabet_size must be at least 1");
        }
        if self.padding_factor == 0 {
            anyhow::bail!("padding_factor must be at least 1");
        }
        Ok(())
    }

    pub fn ppm(&self) -> PpmConfig {
        PpmConfig {
            order: self.ppm_order,
            alphabet_size: self.ppm_alphabet_size,
        }
    }

    /// Parse a compressor name and apply this configuration's PPM and padding settings
    pub fn compressor(&self, name: &str) -> ComplexityResult<Compressor> {
        Ok(match name.parse::<Compressor>()? {
            Compressor::Ppm(_) => Compressor::Ppm(self.ppm()),
            Compressor::PaddedBytes { codec, .. } => Compressor::PaddedBytes {
                codec,
                tiling: self.padding_factor,
            },
            other => other,
        })
    }
}
