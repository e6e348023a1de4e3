use crate::{
    error::{PerceptronError, Result},
    perceptron::perceptron::Perceptron,
};

pub struct PerceptronRule {
    pub learning_rate: f64,
}

impl PerceptronRule {
    pub fn new(learning_rate: f64) -> PerceptronRule {
        PerceptronRule { learning_rate }
    }

    /// Applies `w_j += learning_rate * error * x_j` to every weight, in place.
    ///
    /// `error` is `label - prediction`, so it is `0.0` when the example was
    /// classified correctly and the weights do not move.
    pub fn step(&self, perceptron: &mut Perceptron, input: &[f64], error: f64) -> Result<()> {
        if input.len() != perceptron.n_features() {
            return Err(PerceptronError::ShapeMismatch {
                expected: perceptron.n_features(),
                got: input.len(),
            });
        }

        let scale = self.learning_rate * error;
        for (w, x) in perceptron.weights.iter_mut().zip(input.iter()) {
            *w += scale * x;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_error_moves_towards_input() {
        let mut p = Perceptron::new(3);
        PerceptronRule::new(0.5).step(&mut p, &[0.0, 1.0, 1.0], 1.0).unwrap();
        assert_eq!(p.weights, vec![0.0, 0.5, 0.5]);
    }

    #[test]
    fn negative_error_moves_away_from_input() {
        let mut p = Perceptron::new(3);
        PerceptronRule::new(0.5).step(&mut p, &[1.0, 1.0, 1.0], -1.0).unwrap();
        assert_eq!(p.weights, vec![-0.5, -0.5, -0.5]);
    }

    #[test]
    fn zero_error_is_a_no_op() {
        let mut p = Perceptron::new(3);
        p.weights = vec![0.25, -1.0, 2.0];
        PerceptronRule::new(0.5).step(&mut p, &[1.0, 1.0, 1.0], 0.0).unwrap();
        assert_eq!(p.weights, vec![0.25, -1.0, 2.0]);
    }

    #[test]
    fn wrong_length_leaves_weights_untouched() {
        let mut p = Perceptron::new(3);
        let err = PerceptronRule::new(0.5).step(&mut p, &[1.0, 1.0], 1.0).unwrap_err();
        assert_eq!(err, PerceptronError::ShapeMismatch { expected: 3, got: 2 });
        assert!(!p.is_trained());
    }

    #[test]
    fn longer_input_is_rejected_too() {
        let mut p = Perceptron::new(2);
        let err = PerceptronRule::new(0.5).step(&mut p, &[1.0, 1.0, 1.0], 1.0).unwrap_err();
        assert_eq!(err, PerceptronError::ShapeMismatch { expected: 2, got: 3 });
        assert_eq!(p.weights, vec![0.0, 0.0]);
    }
}
