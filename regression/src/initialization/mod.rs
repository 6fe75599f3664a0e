mod constant;
mod error;
mod param_gen;
mod uniform;

use std::ops::Range;

use rand::RngCore;

use crate::model::ModelParameters;

pub use constant::ConstParamGen;
pub use error::{InitErr, Result};
pub use param_gen::ParamGen;
pub use uniform::UniformParamGen;

/// The default range for the three feature weights.
pub const WEIGHT_RANGE: Range<f64> = 0.0..1.0;

/// The default range for the bias.
pub const BIAS_RANGE: Range<f64> = 0.0..1000.0;

/// Draws the starting point of a training run, one generator for the feature weights
/// and another for the bias.
pub struct Initializer {
    weights: Box<dyn ParamGen>,
    bias: Box<dyn ParamGen>,
}

impl Initializer {
    /// Creates a new `Initializer`.
    ///
    /// # Arguments
    /// * `weights` - The generator for the three feature weights.
    /// * `bias` - The generator for the bias.
    pub fn new(weights: Box<dyn ParamGen>, bias: Box<dyn ParamGen>) -> Self {
        Self { weights, bias }
    }

    /// Creates a new `Initializer` drawing uniformly from both ranges.
    ///
    /// # Returns
    /// An error if any of the ranges is empty or not finite.
    pub fn uniform(weights: Range<f64>, bias: Range<f64>) -> Result<Self> {
        Ok(Self::new(
            Box::new(UniformParamGen::new(weights.start, weights.end)?),
            Box::new(UniformParamGen::new(bias.start, bias.end)?),
        ))
    }

    /// Creates a new `Initializer` that always yields the same parameters.
    pub fn constant(weight: f64, bias: f64) -> Self {
        Self::new(
            Box::new(ConstParamGen::new(weight)),
            Box::new(ConstParamGen::new(bias)),
        )
    }

    /// Draws a new set of parameters.
    pub fn initialize(&mut self, rng: &mut dyn RngCore) -> ModelParameters {
        ModelParameters {
            w_sqft: self.weights.sample(rng),
            w_beds: self.weights.sample(rng),
            w_baths: self.weights.sample(rng),
            bias: self.bias.sample(rng),
        }
    }
}

impl Default for Initializer {
    /// Weights in `[0, 1)` and bias in `[0, 1000)`.
    fn default() -> Self {
        Self::new(
            Box::new(UniformParamGen::from_range(WEIGHT_RANGE)),
            Box::new(UniformParamGen::from_range(BIAS_RANGE)),
        )
    }
}

/// Draws a new set of parameters with the default `Initializer`.
pub fn initialize<R: RngCore>(rng: &mut R) -> ModelParameters {
    Initializer::default().initialize(rng)
}
