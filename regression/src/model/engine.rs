use log::trace;
use ndarray::{Array1, ArrayView2};

use super::{GradientDescent, LossFn, ModelParameters, Mse, Optimizer};
use crate::data::{Dataset, PredictionInput};

/// The learning rate used when none is given.
///
/// Tuned to the scale of the generated features, square footages in the thousands
/// make any larger rate diverge.
pub const DEFAULT_LEARNING_RATE: f64 = 1e-7;

/// The outcome of a single training step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// The parameters after the step.
    pub params: ModelParameters,
    /// The mean squared error of the parameters before the step.
    pub loss: f64,
}

/// The regression engine, maps parameters into new parameters through full-batch
/// gradient descent steps. It holds no parameters of its own.
#[derive(Debug, Clone, Copy)]
pub struct Engine<O = GradientDescent, L = Mse>
where
    O: Optimizer,
    L: LossFn,
{
    optimizer: O,
    loss_fn: L,
}

impl Engine {
    /// Returns a new gradient descent `Engine` over the mean squared error.
    ///
    /// # Arguments
    /// * `learning_rate` - The length of each step.
    pub fn new(learning_rate: f64) -> Self {
        Self::with(GradientDescent::new(learning_rate), Mse)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_LEARNING_RATE)
    }
}

impl<O, L> Engine<O, L>
where
    O: Optimizer,
    L: LossFn,
{
    /// Returns a new `Engine` with a custom learning rule and loss function.
    pub fn with(optimizer: O, loss_fn: L) -> Self {
        Self { optimizer, loss_fn }
    }

    /// Performs one step over the entire dataset.
    ///
    /// The per-record gradients are summed raw and averaged over the dataset size
    /// before being handed to the optimizer.
    ///
    /// # Arguments
    /// * `dataset` - The training set.
    /// * `params` - The current parameters, left untouched.
    ///
    /// # Returns
    /// The new parameters alongside the loss of `params`. Both are `NaN` for an empty
    /// dataset.
    pub fn step(&self, dataset: &Dataset, params: &ModelParameters) -> Step {
        let x = dataset.x();
        let y = dataset.y();
        let n = dataset.len() as f64;

        let y_pred = forward(x, params);
        let loss = self.loss_fn.loss(y_pred.view(), y);
        let delta = self.loss_fn.loss_prime(y_pred.view(), y);

        let w_grad = x.t().dot(&delta);
        let b_grad = delta.sum();
        let grad = [w_grad[0] / n, w_grad[1] / n, w_grad[2] / n, b_grad / n];

        let mut next = params.to_array();
        self.optimizer.update_params(&mut next, &grad);
        trace!(records = dataset.len(), loss = loss; "gradient descent step");

        Step {
            params: ModelParameters::from(next),
            loss,
        }
    }
}

/// Predicts the price of a single property, `w·x + b`, unrounded.
pub fn predict(input: &PredictionInput, params: &ModelParameters) -> f64 {
    let [sqft, bedrooms, bathrooms] = input.to_array();
    params.w_sqft * sqft + params.w_beds * bedrooms + params.w_baths * bathrooms + params.bias
}

/// Predicts the price of every record in the dataset.
pub fn predict_all(dataset: &Dataset, params: &ModelParameters) -> Array1<f64> {
    forward(dataset.x(), params)
}

/// Performs a single gradient descent step with the given learning rate.
///
/// # Returns
/// The new parameters and the mean squared error of `params` over `dataset`.
pub fn update(
    dataset: &Dataset,
    params: &ModelParameters,
    learning_rate: f64,
) -> (ModelParameters, f64) {
    let Step { params, loss } = Engine::new(learning_rate).step(dataset, params);
    (params, loss)
}

fn forward(x: ArrayView2<f64>, params: &ModelParameters) -> Array1<f64> {
    x.dot(&params.weights()) + params.bias
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::data::{HousingRecord, generate};

    const EPS: f64 = 1e-9;

    fn single_house() -> Dataset {
        Dataset::new(vec![HousingRecord {
            id: 0,
            sqft: 1000,
            bedrooms: 2,
            bathrooms: 1,
            price: 300_000.,
        }])
    }

    fn assert_close(got: f64, expected: f64) {
        assert!(
            (got - expected).abs() < EPS,
            "got {got}, expected {expected}"
        );
    }

    #[test]
    fn predict_is_the_weighted_sum() {
        let params = ModelParameters::new(200., 25_000., 15_000., 50_000.);
        let input = PredictionInput::new(1000, 2, 1);

        assert_eq!(predict(&input, &params), 315_000.);
        assert_eq!(predict(&input, &params), predict(&input, &params));
    }

    #[test]
    fn single_update_from_zero() {
        let (params, loss) = update(&single_house(), &ModelParameters::default(), 1e-7);

        assert_eq!(loss, 9e10);
        assert_close(params.w_sqft, 60.);
        assert_close(params.w_beds, 0.12);
        assert_close(params.w_baths, 0.06);
        assert_close(params.bias, 0.06);
    }

    #[test]
    fn update_leaves_the_input_untouched() {
        let params = ModelParameters::new(0.3, 0.2, 0.1, 500.);
        let before = params;

        let (next, _) = update(&single_house(), &params, DEFAULT_LEARNING_RATE);

        assert_eq!(params, before);
        assert_ne!(next, params);
    }

    #[test]
    fn batch_predictions_match_single_ones() {
        let mut rng = StdRng::seed_from_u64(1);
        let dataset = Dataset::new(generate(&mut rng, 20));
        let params = ModelParameters::new(210., 20_000., 12_000., 40_000.);

        let batch = predict_all(&dataset, &params);
        for (record, pred) in dataset.records().iter().zip(batch.iter()) {
            assert_close(*pred, predict(&record.features(), &params));
        }
    }

    #[test]
    fn gradients_are_averaged_over_the_dataset() {
        let twice = Dataset::new(vec![single_house().records()[0]; 2]);
        let zeros = ModelParameters::default();

        let (once, once_loss) = update(&single_house(), &zeros, 1e-7);
        let (twice, twice_loss) = update(&twice, &zeros, 1e-7);

        assert_eq!(once_loss, twice_loss);
        assert_close(once.w_sqft, twice.w_sqft);
        assert_close(once.bias, twice.bias);
    }

    #[test]
    fn empty_dataset_yields_nan() {
        let (params, loss) = update(&Dataset::new(vec![]), &ModelParameters::default(), 1e-7);

        assert!(loss.is_nan());
        assert!(!params.is_finite());
    }

    #[test]
    fn large_learning_rates_diverge() {
        let mut rng = StdRng::seed_from_u64(2);
        let dataset = Dataset::new(generate(&mut rng, 50));
        let mut params = ModelParameters::default();

        for _ in 0..199 {
            (params, _) = update(&dataset, &params, 1e-5);
        }
        let (_, loss) = update(&dataset, &params, 1e-5);

        assert!(!loss.is_finite() || loss > 1e30, "loss {loss}");
    }
}
