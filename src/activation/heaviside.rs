use serde::{Serialize, Deserialize};

/// Heaviside step function used as the perceptron's activation.
///
/// Returns `0.0` for negative input and `1.0` for positive input. The value at
/// exactly zero varies between definitions, so it is carried explicitly in
/// `at_zero`; the default is `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heaviside {
    pub at_zero: f64,
}

impl Heaviside {
    pub fn new(at_zero: f64) -> Heaviside {
        Heaviside { at_zero }
    }

    pub fn function(&self, x: f64) -> f64 {
        if x > 0.0 {
            1.0
        } else if x < 0.0 {
            0.0
        } else {
            self.at_zero
        }
    }
}

impl Default for Heaviside {
    fn default() -> Self {
        Heaviside { at_zero: 0.0 }
    }
}
