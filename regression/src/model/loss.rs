use ndarray::{Array1, ArrayView1};

/// A loss function over a batch of predictions.
pub trait LossFn {
    /// The loss of the whole batch.
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;

    /// The derivative of the loss of each sample with respect to its prediction, not
    /// averaged over the batch.
    fn loss_prime(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Array1<f64>;
}

/// Squared price error, averaged over the records for the reported loss.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl LossFn for Mse {
    /// `sum((y_pred - y)^2) / n`, `NaN` for an empty batch.
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (&y_pred - &y).mapv(|e| e.powi(2)).sum() / y.len() as f64
    }

    /// `2 (y_pred - y)` per record, the engine divides by `n` afterwards.
    fn loss_prime(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Array1<f64> {
        (&y_pred - &y) * 2.
    }
}
