use std::ops::Range;

use rand::{
    RngCore,
    distr::{Distribution, Uniform},
};

use super::{ParamGen, Result};

/// A parameter generator drawing uniformly from `[low, high)`.
#[derive(Debug, Clone, Copy)]
pub struct UniformParamGen {
    distribution: Uniform<f64>,
}

impl UniformParamGen {
    /// Creates a new `UniformParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `low` - The inclusive lower limit.
    /// * `high` - The exclusive upper limit.
    ///
    /// # Returns
    /// An error if the range is empty or any of its limits is not finite.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        Ok(Self {
            distribution: Uniform::new(low, high)?,
        })
    }

    /// Must only be called with ranges known to be valid.
    pub(super) fn from_range(range: Range<f64>) -> Self {
        let distribution = Uniform::try_from(range).expect("default sampling ranges are valid");
        Self { distribution }
    }
}

impl ParamGen for UniformParamGen {
    fn sample(&mut self, rng: &mut dyn RngCore) -> f64 {
        self.distribution.sample(rng)
    }
}
