use serde::{Serialize, Deserialize};

use crate::activation::heaviside::Heaviside;
use crate::error::{PerceptronError, Result};
use crate::math::matrix::{dot, Matrix};

/// A single linear threshold unit: `ŷ = H(x · w)`.
///
/// There is no separate bias term; the bias is learned as the weight of a
/// constant `1.0` input feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    pub weights: Vec<f64>,
    pub activator: Heaviside,
}

impl Perceptron {
    /// Zero-initialized perceptron over `n_features` inputs.
    pub fn new(n_features: usize) -> Perceptron {
        Perceptron {
            weights: vec![0.0; n_features],
            activator: Heaviside::default(),
        }
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// False until some update has moved a weight off zero.
    pub fn is_trained(&self) -> bool {
        self.weights.iter().any(|&w| w != 0.0)
    }

    pub fn weighted_sum(&self, input: &[f64]) -> Result<f64> {
        if input.len() != self.weights.len() {
            return Err(PerceptronError::ShapeMismatch {
                expected: self.weights.len(),
                got: input.len(),
            });
        }
        dot(input, &self.weights)
    }

    /// Predicted label (`0.0` or `1.0`) for one input row.
    pub fn classify(&self, input: &[f64]) -> Result<f64> {
        Ok(self.activator.function(self.weighted_sum(input)?))
    }

    /// Predicted label for every row of `inputs`, in row order.
    pub fn predict(&self, inputs: &Matrix) -> Result<Vec<f64>> {
        if inputs.cols != self.weights.len() && inputs.rows > 0 {
            return Err(PerceptronError::ShapeMismatch {
                expected: self.weights.len(),
                got: inputs.cols,
            });
        }
        inputs.iter_rows().map(|row| self.classify(row)).collect()
    }
}
