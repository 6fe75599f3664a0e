use std::{env, fs, path::Path};

use log::info;
use regression::PredictionInput;
use serde::{Deserialize, Serialize};
use trainer::{ConfigErr, TrainingConfig};

use crate::error::{LoadErr, Result};

/// The environment variable holding the path to the JSON configuration.
pub const CONFIG_VAR: &str = "PROPHET_CONFIG";

/// The environment variable holding the analysis service key when none is configured.
pub const DEFAULT_API_KEY_VAR: &str = "API_KEY";

/// Configuration of a whole session: how to train, what to price and where to find
/// the analysis credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub training: TrainingConfig,
    pub prediction: PredictionInput,
    pub api_key_var: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            training: TrainingConfig::default(),
            prediction: PredictionInput::default(),
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads an `AppConfig` from a JSON file, missing fields take their defaults.
    ///
    /// # Errors
    /// Returns a `LoadErr` if the file cannot be read, parsed or holds invalid values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadErr::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parses and validates an `AppConfig` from its JSON representation.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by `PROPHET_CONFIG`, or the defaults if it is not set.
    pub fn from_env() -> Result<Self> {
        match env::var(CONFIG_VAR) {
            Ok(path) => {
                info!(path = path.as_str(); "loading configuration");
                Self::load(path)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigErr> {
        self.training.validate()?;

        if self.prediction.sqft == 0 {
            return Err(ConfigErr::InvalidValue {
                field: "prediction.sqft",
                reason: "a property must have a positive square footage".into(),
            });
        }

        if self.api_key_var.is_empty() {
            return Err(ConfigErr::InvalidValue {
                field: "api_key_var",
                reason: "the variable name must not be empty".into(),
            });
        }

        Ok(())
    }
}
