mod engine;
mod loss;
mod optimizer;
mod params;

pub use engine::{DEFAULT_LEARNING_RATE, Engine, Step, predict, predict_all, update};
pub use loss::{LossFn, Mse};
pub use optimizer::{GradientDescent, Optimizer};
pub use params::ModelParameters;
