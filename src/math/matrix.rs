use crate::error::{PerceptronError, Result};

/// Row-major dense matrix. Each row is one example's feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Builds a matrix from rows, rejecting ragged input.
    ///
    /// An empty `data` yields a 0×0 matrix.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, |row| row.len());
        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(PerceptronError::ShapeMismatch { expected: cols, got: bad.len() });
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.iter().map(|row| row.as_slice())
    }

    /// Returns a copy with one extra trailing column filled with `value`.
    pub fn with_column(&self, value: f64) -> Matrix {
        let data = self.data.iter()
            .map(|row| {
                let mut extended = row.clone();
                extended.push(value);
                extended
            })
            .collect();

        Matrix {
            rows: self.rows,
            cols: self.cols + 1,
            data
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

/// Dot product of two equal-length vectors.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(PerceptronError::ShapeMismatch { expected: b.len(), got: a.len() });
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}
