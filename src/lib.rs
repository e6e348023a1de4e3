pub mod error;
pub mod math;
pub mod activation;
pub mod perceptron;
pub mod optim;
pub mod data;
pub mod train;
pub mod logging;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use math::matrix::Matrix;
pub use activation::heaviside::Heaviside;
pub use perceptron::perceptron::Perceptron;
pub use optim::perceptron_rule::PerceptronRule;
pub use data::dataset::Dataset;
pub use train::train_config::TrainConfig;
pub use train::loop_fn::{train, train_loop};
