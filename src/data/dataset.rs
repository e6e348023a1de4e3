use crate::error::{PerceptronError, Result};
use crate::math::matrix::Matrix;

/// Two-input NAND truth table, without the bias column.
const NAND_INPUTS: [[f64; 2]; 4] = [
    [0.0, 0.0],
    [0.0, 1.0],
    [1.0, 0.0],
    [1.0, 1.0],
];
const NAND_LABELS: [f64; 4] = [1.0, 1.0, 1.0, 0.0];

/// Labelled training data: one input row per example and one binary label per row.
///
/// Construction validates the shape, so everything downstream may assume
/// `inputs.rows == labels.len() > 0` and every label is `0.0` or `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Matrix,
    labels: Vec<f64>,
}

impl Dataset {
    pub fn new(inputs: Matrix, labels: Vec<f64>) -> Result<Dataset> {
        if inputs.rows == 0 {
            return Err(PerceptronError::EmptyDataset);
        }
        if inputs.rows != labels.len() {
            return Err(PerceptronError::LabelCountMismatch {
                inputs: inputs.rows,
                labels: labels.len(),
            });
        }
        if let Some((index, &value)) = labels.iter()
            .enumerate()
            .find(|&(_, &y)| y != 0.0 && y != 1.0)
        {
            return Err(PerceptronError::NonBinaryLabel { index, value });
        }

        Ok(Dataset { inputs, labels })
    }

    /// Appends the constant bias feature `1.0` to every row of `raw_inputs`.
    pub fn with_bias_column(raw_inputs: Matrix, labels: Vec<f64>) -> Result<Dataset> {
        Dataset::new(raw_inputs.with_column(1.0), labels)
    }

    /// The NAND truth table with a trailing bias column:
    /// `[[0,0,1],[0,1,1],[1,0,1],[1,1,1]]` labelled `[1,1,1,0]`.
    pub fn nand() -> Dataset {
        let raw = Matrix {
            rows: NAND_INPUTS.len(),
            cols: NAND_INPUTS[0].len(),
            data: NAND_INPUTS.iter().map(|row| row.to_vec()).collect(),
        };
        Dataset { inputs: raw.with_column(1.0), labels: NAND_LABELS.to_vec() }
    }

    pub fn inputs(&self) -> &Matrix {
        &self.inputs
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn n_features(&self) -> usize {
        self.inputs.cols
    }

    /// Examples in their fixed training order.
    pub fn examples(&self) -> impl Iterator<Item = (&[f64], f64)> {
        self.inputs.iter_rows().zip(self.labels.iter().copied())
    }
}
