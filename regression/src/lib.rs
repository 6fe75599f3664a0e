//! Linear regression over synthetic housing data.
//!
//! The crate holds the pieces of the model that carry no state of their own: the
//! synthetic [`Dataset`] generator, the parameter initializers and the regression
//! engine, which maps a dataset and a set of [`ModelParameters`] into the next set
//! of parameters through a single full-batch gradient descent step.

pub mod data;
pub mod initialization;
pub mod metrics;
pub mod model;

use rand::{Rng, RngCore};

pub use data::{Dataset, HousingRecord, PredictionInput, generate};
pub use initialization::{InitErr, Initializer, initialize};
pub use metrics::accuracy;
pub use model::{DEFAULT_LEARNING_RATE, Engine, ModelParameters, Step, predict, update};

/// Generates `count` synthetic housing records.
///
/// # Arguments
/// * `rng` - The source of randomness for the features and the price noise.
/// * `count` - The amount of records to generate.
pub fn generate_dataset<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<HousingRecord> {
    generate(rng, count)
}

/// Draws a fresh set of parameters with the default initializer.
pub fn initialize_weights<R: RngCore>(rng: &mut R) -> ModelParameters {
    initialize(rng)
}

/// Performs a single gradient descent step over the whole dataset.
///
/// # Arguments
/// * `dataset` - The training set, consumed entirely by the step.
/// * `params` - The current parameters, left untouched.
/// * `learning_rate` - The step length, `DEFAULT_LEARNING_RATE` when `None`.
///
/// # Returns
/// The new parameters and the mean squared error of `params` over `dataset`.
pub fn train_step(
    dataset: &Dataset,
    params: &ModelParameters,
    learning_rate: Option<f64>,
) -> (ModelParameters, f64) {
    update(
        dataset,
        params,
        learning_rate.unwrap_or(DEFAULT_LEARNING_RATE),
    )
}

/// Predicts the price of a property, unrounded.
pub fn predict_price(input: &PredictionInput, params: &ModelParameters) -> f64 {
    predict(input, params)
}
