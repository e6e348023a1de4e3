pub mod perceptron_rule;
