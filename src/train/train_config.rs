use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — number of full passes over the training data; every
///                     epoch runs, there is no early stop
/// - `learning_rate` — step size of the perceptron update
///
/// Missing fields in a JSON config fall back to the defaults (100 epochs,
/// learning rate 0.5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
        }
    }

    /// Parses and validates a config from a JSON string.
    pub fn from_json(json: &str) -> Result<TrainConfig> {
        let config: TrainConfig = serde_json::from_str(json)
            .map_err(|e| PerceptronError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// `epochs == 0` is accepted and leaves the weights untouched.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(PerceptronError::InvalidConfig(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(100, 0.5)
    }
}
