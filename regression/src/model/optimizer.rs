/// Moves the regression parameters along a gradient.
pub trait Optimizer {
    /// Rewrites `params` in place, laid out as `[w_sqft, w_beds, w_baths, bias]`.
    ///
    /// # Arguments
    /// * `params` - The working copy of the parameters.
    /// * `grad` - The loss gradient, already averaged over the dataset.
    fn update_params(&self, params: &mut [f64], grad: &[f64]);
}

/// Plain full-batch gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// Returns a new `GradientDescent` scaling every gradient by `learning_rate`.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl Optimizer for GradientDescent {
    /// `p <- p - learning_rate * g` for every parameter.
    fn update_params(&self, params: &mut [f64], grad: &[f64]) {
        params
            .iter_mut()
            .zip(grad)
            .for_each(|(p, g)| *p -= self.learning_rate * g);
    }
}
