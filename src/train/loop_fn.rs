use tracing::{debug, info};

use crate::data::dataset::Dataset;
use crate::error::{PerceptronError, Result};
use crate::optim::perceptron_rule::PerceptronRule;
use crate::perceptron::perceptron::Perceptron;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `perceptron` in place for exactly `config.epochs` epochs.
///
/// There is no convergence check: the loop runs every epoch even once a pass
/// makes no mistakes.
///
/// # Errors
/// - `InvalidConfig` if the learning rate is not finite and positive
/// - `ShapeMismatch` if the dataset's feature count differs from the weights
pub fn train_loop(
    perceptron: &mut Perceptron,
    dataset: &Dataset,
    config: &TrainConfig,
) -> Result<()> {
    config.validate()?;
    if dataset.n_features() != perceptron.n_features() {
        return Err(PerceptronError::ShapeMismatch {
            expected: perceptron.n_features(),
            got: dataset.n_features(),
        });
    }

    let rule = PerceptronRule::new(config.learning_rate);
    info!(
        epochs = config.epochs,
        learning_rate = config.learning_rate,
        examples = dataset.len(),
        "training perceptron"
    );

    for epoch in 1..=config.epochs {
        let mistakes = train_epoch(perceptron, dataset, &rule)?;
        debug!(epoch, mistakes, weights = ?perceptron.weights, "epoch complete");
    }

    info!(weights = ?perceptron.weights, "training finished");
    Ok(())
}

/// Trains a fresh zero-initialized perceptron sized to `dataset`.
pub fn train(dataset: &Dataset, config: &TrainConfig) -> Result<Perceptron> {
    let mut perceptron = Perceptron::new(dataset.n_features());
    train_loop(&mut perceptron, dataset, config)?;
    Ok(perceptron)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_epochs_keeps_zero_weights() {
        let p = train(&Dataset::nand(), &TrainConfig::new(0, 0.5)).unwrap();
        assert_eq!(p.weights, vec![0.0, 0.0, 0.0]);
        assert!(!p.is_trained());
    }

    #[test]
    fn default_run_reaches_known_weights() {
        let p = train(&Dataset::nand(), &TrainConfig::default()).unwrap();
        assert_eq!(p.weights, vec![-1.0, -0.5, 1.5]);
        assert!(p.is_trained());
    }

    #[test]
    fn rejects_invalid_learning_rate() {
        let err = train(&Dataset::nand(), &TrainConfig::new(100, -1.0)).unwrap_err();
        assert!(matches!(err, PerceptronError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_feature_count_mismatch() {
        let mut p = Perceptron::new(2);
        let err = train_loop(&mut p, &Dataset::nand(), &TrainConfig::default()).unwrap_err();
        assert_eq!(err, PerceptronError::ShapeMismatch { expected: 2, got: 3 });
        assert!(!p.is_trained());
    }

    #[test]
    fn continues_from_existing_weights() {
        let mut p = Perceptron::new(3);
        train_loop(&mut p, &Dataset::nand(), &TrainConfig::new(1, 0.5)).unwrap();
        assert_eq!(p.weights, vec![-0.5, -0.5, 0.0]);
        train_loop(&mut p, &Dataset::nand(), &TrainConfig::new(1, 0.5)).unwrap();
        assert_eq!(p.weights, vec![-1.0, -0.5, 0.5]);
    }
}
