use std::{collections::VecDeque, num::NonZeroUsize};

use serde::{Deserialize, Serialize};

/// A single point of the training metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Display counter of the run's progress, the index of the last step of the tick
    /// that published the sample.
    pub epoch: usize,
    /// Mean squared error reported by the last step.
    pub loss: f64,
    /// Coefficient of determination after the last step, clamped at 0.
    pub accuracy: f64,
}

/// Sliding window over the most recent training samples.
#[derive(Debug, Clone)]
pub struct MetricsHistory {
    samples: VecDeque<TrainingSample>,
    capacity: NonZeroUsize,
}

impl MetricsHistory {
    /// Creates a new, empty `MetricsHistory`.
    ///
    /// # Arguments
    /// * `capacity` - The maximum amount of samples to keep.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Appends a sample, discarding the oldest one if the window is full.
    pub fn push(&mut self, sample: TrainingSample) {
        if self.samples.len() == self.capacity.get() {
            self.samples.pop_front();
        }

        self.samples.push_back(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// The oldest sample still in the window.
    pub fn first(&self) -> Option<&TrainingSample> {
        self.samples.front()
    }

    /// The most recent sample.
    pub fn last(&self) -> Option<&TrainingSample> {
        self.samples.back()
    }

    /// Iterates the samples from the oldest to the most recent.
    pub fn iter(&self) -> impl Iterator<Item = &TrainingSample> {
        self.samples.iter()
    }

    /// Copies the window into a vec, oldest first.
    pub fn to_vec(&self) -> Vec<TrainingSample> {
        self.samples.iter().copied().collect()
    }
}
