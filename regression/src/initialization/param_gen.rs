use rand::RngCore;

/// A `ParamGen` generates values for the initial state of the model's parameters.
pub trait ParamGen: Send {
    /// Samples a single parameter.
    ///
    /// # Arguments
    /// * `rng` - The source of randomness, ignored by deterministic generators.
    fn sample(&mut self, rng: &mut dyn RngCore) -> f64;
}
