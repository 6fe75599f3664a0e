//! Drives training runs of the housing price regression.
//!
//! A [`TrainingController`] owns the dataset and the working parameters of a run and
//! advances it one tick at a time, each tick being a fixed amount of gradient descent
//! steps followed by a single [`TrainingSample`]. The [`driver`] runs those ticks
//! cooperatively on a tokio runtime.

pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod event;
pub mod history;

pub use config::TrainingConfig;
pub use controller::{Tick, TrainingController, TrainingState, TrainingView};
pub use driver::{DriveOutcome, drive};
pub use error::{ConfigErr, Result};
pub use event::TrainingEvent;
pub use history::{MetricsHistory, TrainingSample};
