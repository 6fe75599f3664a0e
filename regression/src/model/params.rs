use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// The learned parameters of the model.
///
/// This is a plain value, every update step produces a new one, so a snapshot handed
/// out to a reader can never change under it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    pub w_sqft: f64,
    pub w_beds: f64,
    pub w_baths: f64,
    pub bias: f64,
}

impl ModelParameters {
    /// The amount of scalars in the model.
    pub const SIZE: usize = 4;

    /// Returns a new `ModelParameters`.
    pub fn new(w_sqft: f64, w_beds: f64, w_baths: f64, bias: f64) -> Self {
        Self {
            w_sqft,
            w_beds,
            w_baths,
            bias,
        }
    }

    /// The feature weights, in feature order.
    pub fn weights(&self) -> Array1<f64> {
        Array1::from(vec![self.w_sqft, self.w_beds, self.w_baths])
    }

    /// Flattens the parameters, weights first and bias last.
    pub fn to_array(&self) -> [f64; Self::SIZE] {
        [self.w_sqft, self.w_beds, self.w_baths, self.bias]
    }

    /// Whether every parameter is a finite number.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|p| p.is_finite())
    }
}

impl From<[f64; ModelParameters::SIZE]> for ModelParameters {
    fn from([w_sqft, w_beds, w_baths, bias]: [f64; ModelParameters::SIZE]) -> Self {
        Self::new(w_sqft, w_beds, w_baths, bias)
    }
}
