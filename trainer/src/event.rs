use regression::ModelParameters;

use crate::history::TrainingSample;

/// Events published by the driver while a run progresses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrainingEvent {
    /// A tick finished and published a new sample.
    Sample(TrainingSample),
    /// The epoch budget was exhausted, carrying the final parameters.
    Finished(ModelParameters),
    /// The run was interrupted after `epoch` steps.
    Cancelled { epoch: usize },
}
