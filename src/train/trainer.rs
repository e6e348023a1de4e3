use tracing::trace;

use crate::{
    data::dataset::Dataset,
    error::Result,
    optim::perceptron_rule::PerceptronRule,
    perceptron::perceptron::Perceptron,
};

/// One online pass over `dataset` in row order.
///
/// Each example is classified with the current weights and the update is
/// applied immediately, so later examples in the same pass see earlier
/// updates. Returns how many examples were misclassified during the pass.
pub fn train_epoch(
    perceptron: &mut Perceptron,
    dataset: &Dataset,
    rule: &PerceptronRule,
) -> Result<usize> {
    let mut mistakes = 0;

    for (index, (input, label)) in dataset.examples().enumerate() {
        let predicted = perceptron.classify(input)?;
        let error = label - predicted;

        if error != 0.0 {
            mistakes += 1;
        }

        rule.step(perceptron, input, error)?;
        trace!(index, label, predicted, weights = ?perceptron.weights, "update");
    }

    Ok(mistakes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_nand_epoch() {
        let mut p = Perceptron::new(3);
        let mistakes = train_epoch(&mut p, &Dataset::nand(), &PerceptronRule::new(0.5)).unwrap();
        // (0,0,1) misses and raises the bias; (1,1,1) then fires wrongly
        assert_eq!(mistakes, 2);
        assert_eq!(p.weights, vec![-0.5, -0.5, 0.0]);
    }

    #[test]
    fn updates_are_visible_within_the_epoch() {
        // A batched pass would have computed every error against zero weights
        // and ended with [0.5, 0.5, 1.5].
        let mut p = Perceptron::new(3);
        train_epoch(&mut p, &Dataset::nand(), &PerceptronRule::new(0.5)).unwrap();
        assert_eq!(p.weights[2], 0.0);
    }

    #[test]
    fn separated_data_makes_no_mistakes() {
        let mut p = Perceptron::new(3);
        p.weights = vec![-1.0, -0.5, 1.5];
        let mistakes = train_epoch(&mut p, &Dataset::nand(), &PerceptronRule::new(0.5)).unwrap();
        assert_eq!(mistakes, 0);
        assert_eq!(p.weights, vec![-1.0, -0.5, 1.5]);
    }

    #[test]
    fn feature_count_mismatch_errors() {
        let mut p = Perceptron::new(2);
        assert!(train_epoch(&mut p, &Dataset::nand(), &PerceptronRule::new(0.5)).is_err());
    }
}
