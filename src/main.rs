use std::error::Error;

use ferrite_perceptron::{logging, train, Dataset, TrainConfig};
use tracing::info;

// Trains a perceptron on NAND with the default config and prints its
// predictions on the training inputs.
fn main() -> Result<(), Box<dyn Error>> {
    logging::init_logging()?;

    let dataset = Dataset::nand();
    let config = TrainConfig::default();

    let perceptron = train(&dataset, &config)?;
    let model = serde_json::to_string(&perceptron)?;
    info!(%model, "trained");

    let predictions: Vec<u8> = perceptron.predict(dataset.inputs())?
        .into_iter()
        .map(|y| y as u8)
        .collect();
    println!("predictions: {:?}", predictions);

    Ok(())
}
