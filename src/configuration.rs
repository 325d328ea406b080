use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;

/// Generation parameters. Every field falls back to the defaults the
/// external evaluator's fixtures were produced with.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Half-open range `[lower, upper)` knot coordinates are drawn from.
    pub coordinate_range: [f64; 2],
    /// Random mode draws its segment count uniformly from `1..=max_segments`.
    pub max_segments: usize,
    pub bulk_segments: usize,
    pub bulk_seed: u64,
    pub bulk_output: PathBuf,
    /// Point evaluated and printed after a bulk run.
    pub example_x: f64,
    /// Knot sets with a repeated x are redrawn at most this many times.
    pub max_redraws: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            coordinate_range: [-1024.0, 1024.0],
            max_segments: 128,
            bulk_segments: 4096,
            bulk_seed: 0,
            bulk_output: PathBuf::from("massive_spline.csv"),
            example_x: 1.5,
            max_redraws: 16,
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let configuration: Configuration = serde_json::from_str(json)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let [lower, upper] = self.coordinate_range;
        if !(lower.is_finite() && upper.is_finite()) {
            return Err(ConfigurationError::invalid_value("coordinate_range", "bounds must be finite"));
        }
        if lower >= upper {
            return Err(ConfigurationError::invalid_value(
                "coordinate_range",
                format!("lower bound {} is not below upper bound {}", lower, upper),
            ));
        }
        if self.max_segments == 0 {
            return Err(ConfigurationError::invalid_value("max_segments", "must be at least 1"));
        }
        if self.bulk_segments == 0 {
            return Err(ConfigurationError::invalid_value("bulk_segments", "must be at least 1"));
        }
        if !self.example_x.is_finite() {
            return Err(ConfigurationError::invalid_value("example_x", "must be finite"));
        }
        Ok(())
    }
}
