use std::{num::NonZeroUsize, time::Duration};

use rand::{SeedableRng, rngs::StdRng};
use regression::DEFAULT_LEARNING_RATE;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigErr, Result};

const DEFAULT_EPOCHS: NonZeroUsize = NonZeroUsize::new(200).unwrap();
const DEFAULT_STEPS_PER_TICK: NonZeroUsize = NonZeroUsize::new(5).unwrap();
const DEFAULT_HISTORY_LEN: NonZeroUsize = NonZeroUsize::new(50).unwrap();
const DEFAULT_DATASET_SIZE: usize = 50;

/// Execution bounds and hyperparameters of a training run.
///
/// Every field may be left out when deserializing, falling back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Total amount of gradient descent steps of a run.
    pub epochs: NonZeroUsize,
    /// Gradient descent steps performed before publishing a sample.
    pub steps_per_tick: NonZeroUsize,
    pub learning_rate: f64,
    /// Records generated for each dataset.
    pub dataset_size: usize,
    /// Maximum amount of samples kept in the metrics history.
    pub history_len: NonZeroUsize,
    /// Whether a reset also draws a fresh dataset.
    pub regenerate_on_reset: bool,
    /// Pause between ticks, `0` only yields to the runtime.
    pub tick_interval_ms: u64,
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: DEFAULT_EPOCHS,
            steps_per_tick: DEFAULT_STEPS_PER_TICK,
            learning_rate: DEFAULT_LEARNING_RATE,
            dataset_size: DEFAULT_DATASET_SIZE,
            history_len: DEFAULT_HISTORY_LEN,
            regenerate_on_reset: true,
            tick_interval_ms: 0,
            seed: None,
        }
    }
}

impl TrainingConfig {
    /// Checks the values that can't be ruled out by their types.
    ///
    /// # Returns
    /// An error if the learning rate is not a positive finite number or if the dataset
    /// would be empty.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.) {
            return Err(ConfigErr::InvalidValue {
                field: "learning_rate",
                reason: format!("expected a positive number, got {}", self.learning_rate),
            });
        }

        if self.dataset_size == 0 {
            return Err(ConfigErr::InvalidValue {
                field: "dataset_size",
                reason: "the dataset must hold at least one record".into(),
            });
        }

        Ok(())
    }

    /// The pause between ticks, if any.
    pub fn tick_interval(&self) -> Option<Duration> {
        (self.tick_interval_ms > 0).then(|| Duration::from_millis(self.tick_interval_ms))
    }

    /// Creates the random number generator for a run, seeded when a seed was given.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn defaults() {
        let config = TrainingConfig::default();

        assert_eq!(config.epochs.get(), 200);
        assert_eq!(config.steps_per_tick.get(), 5);
        assert_eq!(config.history_len.get(), 50);
        assert_eq!(config.dataset_size, 50);
        assert_eq!(config.learning_rate, 1e-7);
        assert_eq!(config.tick_interval(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: TrainingConfig =
            serde_json::from_str(r#"{ "epochs": 40, "seed": 3, "tick_interval_ms": 16 }"#).unwrap();

        assert_eq!(config.epochs.get(), 40);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.tick_interval(), Some(Duration::from_millis(16)));
        assert_eq!(config.steps_per_tick.get(), 5);
    }

    #[test]
    fn zero_epochs_are_rejected_when_parsing() {
        assert!(serde_json::from_str::<TrainingConfig>(r#"{ "epochs": 0 }"#).is_err());
    }

    #[test]
    fn invalid_values() {
        let config = TrainingConfig {
            learning_rate: -1.,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigErr::InvalidValue { field: "learning_rate", .. })
        ));

        let config = TrainingConfig {
            dataset_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn seeded_rngs_are_reproducible() {
        let config = TrainingConfig {
            seed: Some(17),
            ..Default::default()
        };

        assert_eq!(config.rng().random::<u64>(), config.rng().random::<u64>());
    }
}
